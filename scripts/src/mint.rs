use anyhow::Result;
use near_primitives::types::AccountId;

use crate::{
    contracts::{NftMintArgs, METHOD_NFT_MINT, MINT_DEPOSIT, MINT_GAS},
    error::Error,
    ledger::{AccountHandle, FunctionCall, LedgerClient, Receipt},
};

pub struct Mint {
    contract_id: AccountId,
    args: NftMintArgs,
    copies: u32,
}

/// Accepts the count as typed at a prompt or on the command line.
pub fn parse_copies(value: &str) -> Result<u32, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidCopies(value.to_string()))
}

impl Mint {
    pub fn new(contract_id: AccountId, args: NftMintArgs, copies: u32) -> Self {
        Self {
            contract_id,
            args,
            copies,
        }
    }

    /// Mints `copies` tokens one after another with identical arguments. The
    /// first failure stops the loop; tokens minted before it stay minted.
    pub async fn run<L: LedgerClient>(&self, ledger: &L) -> Result<Vec<Receipt>> {
        let args = serde_json::to_vec(&self.args)?;
        let account = ledger.account(&self.contract_id).await?;

        let mut receipts = Vec::with_capacity(self.copies as usize);
        for i in 0..self.copies {
            let receipt = account
                .function_call(FunctionCall {
                    receiver_id: self.contract_id.clone(),
                    method_name: METHOD_NFT_MINT.to_string(),
                    args: args.clone(),
                    gas: MINT_GAS,
                    deposit: MINT_DEPOSIT,
                })
                .await?;
            log::info!("minted copy {}/{}", i + 1, self.copies);
            println!("Minted 1 NFT");
            receipts.push(receipt);
        }

        println!("done");
        Ok(receipts)
    }
}
