use std::path::PathBuf;

use anyhow::{Context, Result};
use near_primitives::types::AccountId;

use crate::ledger::{AccountHandle, LedgerClient, Receipt};

pub const DEFAULT_WASM: &str = "res/nft.wasm";

pub struct Deploy {
    contract_id: AccountId,
    wasm: PathBuf,
}

impl Deploy {
    pub fn new(contract_id: AccountId, wasm: PathBuf) -> Self {
        Self { contract_id, wasm }
    }

    /// Reads the wasm before touching the ledger, so a bad path fails without
    /// any network traffic.
    pub async fn run<L: LedgerClient>(&self, ledger: &L) -> Result<Receipt> {
        let code = tokio::fs::read(&self.wasm)
            .await
            .with_context(|| format!("failed to read wasm file {}", self.wasm.display()))?;
        log::info!("read {} bytes from {}", code.len(), self.wasm.display());

        let account = ledger.account(&self.contract_id).await?;
        let receipt = account.deploy_contract(code).await?;

        println!("Deployed NFT contract to {}", account.account_id());
        Ok(receipt)
    }
}
