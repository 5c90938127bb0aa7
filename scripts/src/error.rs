use std::path::PathBuf;

use near_primitives::{hash::CryptoHash, types::AccountId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("bad network name: {0}")]
    UnknownNetwork(String),

    #[error("could not determine home directory")]
    HomeDirNotFound,

    #[error("failed to read credentials at {path}: {source}")]
    CredentialsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse credentials at {path}: {source}")]
    CredentialsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("account {0} does not exist")]
    AccountNotFound(AccountId),

    #[error("rpc error: {0}")]
    Rpc(String),

    #[error("transaction {hash} failed: {reason}")]
    TransactionFailed { hash: CryptoHash, reason: String },

    #[error("invalid creator royalty: {0}")]
    InvalidRoyalty(String),

    #[error("invalid copies value {0:?}, expected a non-negative integer")]
    InvalidCopies(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
