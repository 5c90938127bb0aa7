//! JSON-RPC backed implementation of the ledger interface.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use near_crypto::Signer;
use near_jsonrpc_client::JsonRpcClient;
use near_primitives::{
    transaction::{Action, DeployContractAction, FunctionCallAction},
    types::{AccountId, Nonce},
};

use crate::{
    credentials::CredentialStore,
    error::Result,
    ledger::{AccountHandle, FunctionCall, LedgerClient, Receipt},
    network::NetworkProfile,
    utils::{self, send_transaction},
};

pub struct NearSession {
    client: JsonRpcClient,
    profile: NetworkProfile,
    credentials: CredentialStore,
}

pub struct NearAccount {
    client: JsonRpcClient,
    profile: NetworkProfile,
    account_id: AccountId,
    signer: Signer,
    /// Last nonce used by `signer`. Read from chain once, then advanced
    /// locally for every transaction.
    nonce: AtomicU64,
}

impl NearSession {
    /// Does not touch the network; the first request happens on [`LedgerClient::account`].
    pub fn connect(profile: NetworkProfile, credentials: CredentialStore) -> Self {
        log::info!(
            "connecting to {} via {}",
            profile.network_id,
            profile.rpc_url
        );
        Self {
            client: JsonRpcClient::connect(&profile.rpc_url),
            profile,
            credentials,
        }
    }

    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }
}

#[async_trait]
impl LedgerClient for NearSession {
    type Account = NearAccount;

    async fn account(&self, account_id: &AccountId) -> Result<NearAccount> {
        let view = utils::view_account(&self.client, account_id).await?;
        log::debug!("account {} balance {}", account_id, view.amount);

        let signer = self
            .credentials
            .load_signer(&self.profile.network_id, account_id)?;

        let nonce =
            utils::access_key_nonce(&self.client, account_id, &signer.public_key()).await?;
        log::debug!("access key {} at nonce {}", signer.public_key(), nonce);

        Ok(NearAccount::new(
            self.client.clone(),
            self.profile.clone(),
            account_id.clone(),
            signer,
            nonce,
        ))
    }
}

impl NearAccount {
    fn new(
        client: JsonRpcClient,
        profile: NetworkProfile,
        account_id: AccountId,
        signer: Signer,
        nonce: Nonce,
    ) -> Self {
        Self {
            client,
            profile,
            account_id,
            signer,
            nonce: AtomicU64::new(nonce),
        }
    }

    fn next_nonce(&self) -> Nonce {
        self.nonce.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn send(&self, receiver_id: &AccountId, action: Action) -> Result<Receipt> {
        let nonce = self.next_nonce();
        let receipt =
            send_transaction(&self.client, &self.signer, nonce, receiver_id, vec![action]).await?;
        log::info!(
            "explorer: {}",
            self.profile.transaction_url(&receipt.transaction_hash)
        );
        Ok(receipt)
    }
}

#[async_trait]
impl AccountHandle for NearAccount {
    fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    async fn deploy_contract(&self, code: Vec<u8>) -> Result<Receipt> {
        log::info!("deploying {} bytes to {}", code.len(), self.account_id);
        self.send(
            &self.account_id,
            Action::DeployContract(DeployContractAction { code }),
        )
        .await
    }

    async fn function_call(&self, call: FunctionCall) -> Result<Receipt> {
        log::info!(
            "calling {}.{} with {} gas",
            call.receiver_id,
            call.method_name,
            call.gas
        );
        let action = Action::FunctionCall(Box::new(FunctionCallAction {
            method_name: call.method_name,
            args: call.args,
            gas: call.gas.as_gas(),
            deposit: call.deposit,
        }));
        self.send(&call.receiver_id, action).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use near_crypto::{InMemorySigner, KeyType, SecretKey};

    fn offline_profile() -> NetworkProfile {
        NetworkProfile::resolve_with("testnet", |_| Some("http://127.0.0.1:9".to_string()))
            .unwrap()
    }

    fn offline_account(nonce: Nonce) -> NearAccount {
        let profile = offline_profile();
        let account_id: AccountId = "nft.testnet".parse().unwrap();
        let signer = InMemorySigner::from_secret_key(
            account_id.clone(),
            SecretKey::from_random(KeyType::ED25519),
        );
        NearAccount::new(
            JsonRpcClient::connect(&profile.rpc_url),
            profile,
            account_id,
            signer,
            nonce,
        )
    }

    #[test]
    fn test_nonces_advance_locally() {
        let account = offline_account(5);
        let nonces: Vec<Nonce> = (0..3).map(|_| account.next_nonce()).collect();
        assert_eq!(nonces, vec![6, 7, 8]);
    }

    #[tokio::test]
    async fn test_sequential_sends_never_reuse_a_nonce() {
        // Each send takes a fresh nonce up front, so a broadcast that may or
        // may not have reached the node never shares its nonce with the next.
        let account = offline_account(5);

        let err = account.deploy_contract(b"wasm".to_vec()).await.err().unwrap();
        assert!(matches!(err, Error::Rpc(_)), "unexpected error: {err}");

        let call = FunctionCall {
            receiver_id: account.account_id().clone(),
            method_name: "nft_mint".to_string(),
            args: b"{}".to_vec(),
            gas: near_gas::NearGas::from_tgas(100),
            deposit: 0,
        };
        assert!(account.function_call(call).await.is_err());

        assert_eq!(account.next_nonce(), 8);
    }

    #[tokio::test]
    async fn test_unreachable_rpc_surfaces_error() {
        let profile = offline_profile();
        let dir = tempfile::tempdir().unwrap();
        let credentials = CredentialStore::new(dir.path().to_path_buf());
        let session = NearSession::connect(profile, credentials);
        assert_eq!(session.profile().rpc_url, "http://127.0.0.1:9");

        let account: AccountId = "nft.testnet".parse().unwrap();
        let err = session.account(&account).await.err().unwrap();
        assert!(matches!(err, Error::Rpc(_)), "unexpected error: {err}");
    }
}
