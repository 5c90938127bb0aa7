//! The narrow surface the scripts need from a NEAR client.
//!
//! [`crate::session::NearSession`] implements it over JSON-RPC; the tests use
//! the recording [`mock`] ledger instead.

use async_trait::async_trait;
use near_gas::NearGas;
use near_primitives::{
    hash::CryptoHash,
    types::{AccountId, Balance},
};

use crate::error::Result;

/// A contract method invocation with its gas budget and attached deposit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub receiver_id: AccountId,
    pub method_name: String,
    pub args: Vec<u8>,
    pub gas: NearGas,
    pub deposit: Balance,
}

/// Outcome of a transaction that reached final execution successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub transaction_hash: CryptoHash,
}

#[async_trait]
pub trait LedgerClient: Send + Sync {
    type Account: AccountHandle;

    async fn account(&self, account_id: &AccountId) -> Result<Self::Account>;
}

#[async_trait]
pub trait AccountHandle: Send + Sync {
    fn account_id(&self) -> &AccountId;

    async fn deploy_contract(&self, code: Vec<u8>) -> Result<Receipt>;

    async fn function_call(&self, call: FunctionCall) -> Result<Receipt>;
}
