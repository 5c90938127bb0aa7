use near_crypto::{PublicKey, Signer};
use near_jsonrpc_client::{methods, JsonRpcClient};
use near_jsonrpc_primitives::types::query::{QueryResponseKind, RpcQueryError};
use near_primitives::{
    hash::CryptoHash,
    transaction::{Action, SignedTransaction, Transaction, TransactionV0},
    types::{AccountId, BlockReference, Finality, Nonce},
    views::{AccountView, FinalExecutionStatus, QueryRequest},
};

use crate::{
    error::{Error, Result},
    ledger::Receipt,
};

pub async fn latest_block_hash(client: &JsonRpcClient) -> Result<CryptoHash> {
    let block = client
        .call(methods::block::RpcBlockRequest {
            block_reference: BlockReference::Finality(Finality::Final),
        })
        .await
        .map_err(|e| Error::Rpc(format!("block query failed: {e}")))?;
    Ok(block.header.hash)
}

pub async fn view_account(client: &JsonRpcClient, account_id: &AccountId) -> Result<AccountView> {
    let resp = client
        .call(methods::query::RpcQueryRequest {
            block_reference: BlockReference::Finality(Finality::Final),
            request: QueryRequest::ViewAccount {
                account_id: account_id.clone(),
            },
        })
        .await
        .map_err(|e| match e.handler_error() {
            Some(RpcQueryError::UnknownAccount { .. }) => {
                Error::AccountNotFound(account_id.clone())
            }
            _ => Error::Rpc(format!("view_account failed: {e}")),
        })?;

    match resp.kind {
        QueryResponseKind::ViewAccount(account) => Ok(account),
        other => Err(Error::Rpc(format!("unexpected query response: {other:?}"))),
    }
}

pub async fn access_key_nonce(
    client: &JsonRpcClient,
    account_id: &AccountId,
    public_key: &PublicKey,
) -> Result<Nonce> {
    let resp = client
        .call(methods::query::RpcQueryRequest {
            block_reference: BlockReference::Finality(Finality::Final),
            request: QueryRequest::ViewAccessKey {
                account_id: account_id.clone(),
                public_key: public_key.clone(),
            },
        })
        .await
        .map_err(|e| Error::Rpc(format!("access_key query failed: {e}")))?;

    match resp.kind {
        QueryResponseKind::AccessKey(access_key) => Ok(access_key.nonce),
        other => Err(Error::Rpc(format!("unexpected query response: {other:?}"))),
    }
}

pub fn sign_transaction(
    signer: &Signer,
    nonce: Nonce,
    receiver_id: &AccountId,
    block_hash: CryptoHash,
    actions: Vec<Action>,
) -> SignedTransaction {
    Transaction::V0(TransactionV0 {
        signer_id: signer.get_account_id().clone(),
        public_key: signer.public_key(),
        nonce,
        receiver_id: receiver_id.clone(),
        block_hash,
        actions,
    })
    .sign(signer)
}

/// Sign `actions` with `nonce`, broadcast and wait for the final outcome.
/// The caller owns nonce bookkeeping; the final-block view lags behind
/// transactions that were just committed.
pub async fn send_transaction(
    client: &JsonRpcClient,
    signer: &Signer,
    nonce: Nonce,
    receiver_id: &AccountId,
    actions: Vec<Action>,
) -> Result<Receipt> {
    let block_hash = latest_block_hash(client).await?;
    log::debug!("signing as {} with nonce {}", signer.get_account_id(), nonce);

    let signed_transaction = sign_transaction(signer, nonce, receiver_id, block_hash, actions);
    log::info!("transaction hash:{}", signed_transaction.get_hash());

    let outcome = client
        .call(methods::broadcast_tx_commit::RpcBroadcastTxCommitRequest { signed_transaction })
        .await
        .map_err(|e| Error::Rpc(format!("broadcast_tx_commit failed: {e}")))?;

    check_outcome(outcome.transaction_outcome.id, &outcome.status)
}

pub fn check_outcome(hash: CryptoHash, status: &FinalExecutionStatus) -> Result<Receipt> {
    match status {
        FinalExecutionStatus::SuccessValue(_) => Ok(Receipt {
            transaction_hash: hash,
        }),
        FinalExecutionStatus::Failure(e) => Err(Error::TransactionFailed {
            hash,
            reason: format!("{e:?}"),
        }),
        FinalExecutionStatus::Started | FinalExecutionStatus::NotStarted => {
            Err(Error::TransactionFailed {
                hash,
                reason: "transaction did not reach final execution".to_string(),
            })
        }
    }
}
