use anyhow::Result;
use near_primitives::types::AccountId;

use crate::{
    contracts::{NewArgs, INIT_GAS, METHOD_NEW},
    ledger::{AccountHandle, FunctionCall, LedgerClient, Receipt},
};

/// One-shot `new` call on a freshly deployed contract. Whether the contract
/// was already initialized is left to the contract to reject.
pub struct Init {
    contract_id: AccountId,
    args: NewArgs,
}

impl Init {
    pub fn new(contract_id: AccountId, args: NewArgs) -> Self {
        Self { contract_id, args }
    }

    pub fn args(&self) -> &NewArgs {
        &self.args
    }

    pub async fn run<L: LedgerClient>(&self, ledger: &L) -> Result<Receipt> {
        let args = serde_json::to_vec(&self.args)?;
        let account = ledger.account(&self.contract_id).await?;

        let receipt = account
            .function_call(FunctionCall {
                receiver_id: self.contract_id.clone(),
                method_name: METHOD_NEW.to_string(),
                args,
                gas: INIT_GAS,
                deposit: 0,
            })
            .await?;

        println!("done");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ledger::mock::MockLedger;
    use serde_json::{json, Value};

    fn contract_id() -> AccountId {
        "nft.testnet".parse().unwrap()
    }

    fn init(creator: Option<&str>, royalty: Option<f64>) -> Init {
        let args = NewArgs::new(
            contract_id(),
            "Cats".to_string(),
            "CAT".to_string(),
            creator.map(|c| c.parse().unwrap()),
            royalty,
        )
        .unwrap();
        Init::new(contract_id(), args)
    }

    #[tokio::test]
    async fn test_single_new_call() {
        let ledger = MockLedger::new();
        init(Some("alice"), Some(2.5)).run(&ledger).await.unwrap();

        let calls = ledger.function_calls();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.receiver_id, contract_id());
        assert_eq!(call.method_name, "new");
        assert_eq!(call.gas.as_tgas(), 100);
        assert_eq!(call.deposit, 0);

        let args: Value = serde_json::from_slice(&call.args).unwrap();
        assert_eq!(args["owner_id"], json!("nft.testnet"));
        assert_eq!(args["metadata"]["spec"], json!("nft-1.0.0"));
        assert_eq!(args["creator_id"], json!("alice"));
        assert_eq!(args["creator_royalty_bp"], json!(250));
    }

    #[tokio::test]
    async fn test_without_creator() {
        let ledger = MockLedger::new();
        init(None, None).run(&ledger).await.unwrap();

        let args: Value = serde_json::from_slice(&ledger.function_calls()[0].args).unwrap();
        assert!(args.get("creator_id").is_none());
        assert!(args.get("creator_royalty_bp").is_none());
    }

    #[tokio::test]
    async fn test_second_init_rejection_surfaces() {
        // The first `new` succeeds; the contract rejects the second.
        let ledger = MockLedger::rejecting(vec![2]);
        let script = init(None, None);

        script.run(&ledger).await.unwrap();
        let err = script.run(&ledger).await.unwrap_err();

        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Rpc(_))));
        assert_eq!(ledger.function_calls().len(), 2);
    }
}
