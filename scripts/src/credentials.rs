//! Read-only access to the key files under `~/.near-credentials`.

use std::path::{Path, PathBuf};

use near_crypto::{InMemorySigner, PublicKey, SecretKey, Signer};
use near_primitives::types::AccountId;
use serde::Deserialize;

use crate::error::{Error, Result};

pub const CREDENTIALS_DIR: &str = ".near-credentials";

/// Layout: `<root>/<network_id>/<account_id>.json`.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    root: PathBuf,
}

#[derive(Deserialize)]
struct KeyFile {
    account_id: AccountId,
    public_key: PublicKey,
    #[serde(alias = "private_key")]
    secret_key: SecretKey,
}

impl CredentialStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The store under the current user's home directory. The directory is
    /// not required to exist yet.
    pub fn in_home_dir() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
        Ok(Self::new(home.join(CREDENTIALS_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, network_id: &str, account_id: &AccountId) -> PathBuf {
        self.root
            .join(network_id)
            .join(format!("{}.json", account_id))
    }

    pub fn load_signer(&self, network_id: &str, account_id: &AccountId) -> Result<Signer> {
        let path = self.key_path(network_id, account_id);
        let data = std::fs::read(&path).map_err(|source| Error::CredentialsRead {
            path: path.clone(),
            source,
        })?;
        let key_file: KeyFile =
            serde_json::from_slice(&data).map_err(|source| Error::CredentialsParse {
                path: path.clone(),
                source,
            })?;

        if &key_file.account_id != account_id {
            log::warn!(
                "key file {} names account {}, signing as {}",
                path.display(),
                key_file.account_id,
                account_id
            );
        }
        if key_file.secret_key.public_key() != key_file.public_key {
            log::warn!(
                "public key in {} does not match its secret key",
                path.display()
            );
        }

        log::debug!("loaded key {} from {}", key_file.public_key, path.display());
        Ok(InMemorySigner::from_secret_key(
            account_id.clone(),
            key_file.secret_key,
        ))
    }
}
