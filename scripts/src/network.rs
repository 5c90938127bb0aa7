//! Fixed endpoint table for the two supported networks.

use near_primitives::hash::CryptoHash;

use crate::error::{Error, Result};

pub const MAINNET: &str = "mainnet";
pub const TESTNET: &str = "testnet";

pub const MAINNET_RPC_ENV: &str = "NEAR_CLI_MAINNET_RPC_SERVER_URL";
pub const TESTNET_RPC_ENV: &str = "NEAR_CLI_TESTNET_RPC_SERVER_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfile {
    pub network_id: String,
    pub rpc_url: String,
    pub wallet_url: String,
    pub helper_url: String,
    pub explorer_url: String,
}

impl NetworkProfile {
    /// Resolve `network_id` against the process environment.
    pub fn resolve(network_id: &str) -> Result<Self> {
        Self::resolve_with(network_id, |key| std::env::var(key).ok())
    }

    /// Resolve `network_id`, reading RPC overrides through `env`.
    ///
    /// An empty override counts as unset.
    pub fn resolve_with<F>(network_id: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (rpc_env, default_rpc) = match network_id {
            MAINNET => (MAINNET_RPC_ENV, "https://rpc.mainnet.near.org"),
            TESTNET => (TESTNET_RPC_ENV, "https://rpc.testnet.near.org"),
            other => return Err(Error::UnknownNetwork(other.to_string())),
        };

        let rpc_url = env(rpc_env)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| default_rpc.to_string());

        Ok(Self {
            network_id: network_id.to_string(),
            rpc_url,
            wallet_url: format!("https://wallet.{network_id}.near.org"),
            helper_url: format!("https://helper.{network_id}.near.org"),
            explorer_url: format!("https://explorer.{network_id}.near.org"),
        })
    }

    pub fn transaction_url(&self, hash: &CryptoHash) -> String {
        format!("{}/transactions/{}", self.explorer_url, hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_rpc_urls() {
        let mainnet = NetworkProfile::resolve_with("mainnet", no_env).unwrap();
        assert_eq!(mainnet.rpc_url, "https://rpc.mainnet.near.org");
        assert_eq!(mainnet.wallet_url, "https://wallet.mainnet.near.org");
        assert_eq!(mainnet.helper_url, "https://helper.mainnet.near.org");
        assert_eq!(mainnet.explorer_url, "https://explorer.mainnet.near.org");

        let testnet = NetworkProfile::resolve_with("testnet", no_env).unwrap();
        assert_eq!(testnet.network_id, "testnet");
        assert_eq!(testnet.rpc_url, "https://rpc.testnet.near.org");
    }

    #[test]
    fn test_rpc_override_per_network() {
        let env = |key: &str| {
            (key == TESTNET_RPC_ENV).then(|| "http://localhost:3030".to_string())
        };

        let testnet = NetworkProfile::resolve_with("testnet", env).unwrap();
        assert_eq!(testnet.rpc_url, "http://localhost:3030");

        // The testnet variable must not leak into mainnet.
        let mainnet = NetworkProfile::resolve_with("mainnet", env).unwrap();
        assert_eq!(mainnet.rpc_url, "https://rpc.mainnet.near.org");
    }

    #[test]
    fn test_empty_override_falls_back() {
        let profile =
            NetworkProfile::resolve_with("mainnet", |_| Some(String::new())).unwrap();
        assert_eq!(profile.rpc_url, "https://rpc.mainnet.near.org");
    }

    #[test]
    fn test_unknown_network_rejected() {
        for name in ["localnet", "Mainnet", ""] {
            let err = NetworkProfile::resolve_with(name, no_env).unwrap_err();
            assert!(matches!(err, Error::UnknownNetwork(ref n) if n == name));
        }
    }

    #[test]
    fn test_transaction_url() {
        let profile = NetworkProfile::resolve_with("testnet", no_env).unwrap();
        let hash = CryptoHash::default();
        assert_eq!(
            profile.transaction_url(&hash),
            format!("https://explorer.testnet.near.org/transactions/{hash}")
        );
    }
}
