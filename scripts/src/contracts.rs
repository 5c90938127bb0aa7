//! Call surface of the NFT contract: method names, argument payloads and the
//! gas and deposit attached to each call.

use near_gas::NearGas;
use near_primitives::types::{AccountId, Balance};
use serde::Serialize;

use crate::error::{Error, Result};

pub const NFT_METADATA_SPEC: &str = "nft-1.0.0";

pub const METHOD_NEW: &str = "new";
pub const METHOD_NFT_MINT: &str = "nft_mint";

pub const INIT_GAS: NearGas = NearGas::from_tgas(100);
pub const MINT_GAS: NearGas = NearGas::from_tgas(100);

/// 0.01 NEAR in yoctoNEAR.
pub const MINT_DEPOSIT: Balance = 10_000_000_000_000_000_000_000;

pub type BasisPoint = u32;

/// Full basis points, 10000 = 100%
pub const FULL_BASIS_POINT: BasisPoint = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NftContractMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
}

/// Arguments of `new`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewArgs {
    pub owner_id: AccountId,
    pub metadata: NftContractMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<AccountId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_royalty_bp: Option<BasisPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

/// Arguments of `nft_mint`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NftMintArgs {
    pub token_owner_id: AccountId,
    pub token_metadata: TokenMetadata,
}

impl NewArgs {
    /// The royalty is attached only when both the creator and the percentage
    /// are known.
    pub fn new(
        owner_id: AccountId,
        name: String,
        symbol: String,
        creator: Option<AccountId>,
        creator_royalty_percent: Option<f64>,
    ) -> Result<Self> {
        let (creator_id, creator_royalty_bp) = match (creator, creator_royalty_percent) {
            (Some(creator), Some(percent)) => {
                (Some(creator), Some(percent_to_basis_points(percent)?))
            }
            _ => (None, None),
        };

        Ok(Self {
            owner_id,
            metadata: NftContractMetadata {
                spec: NFT_METADATA_SPEC.to_string(),
                name,
                symbol,
            },
            creator_id,
            creator_royalty_bp,
        })
    }
}

/// `2.5` (percent) becomes `250`. Rounds half away from zero and rejects
/// anything outside `0..=FULL_BASIS_POINT`.
pub fn percent_to_basis_points(percent: f64) -> Result<BasisPoint> {
    if !percent.is_finite() || percent < 0.0 {
        return Err(Error::InvalidRoyalty(format!("{percent}%")));
    }
    let bp = (percent * 100.0).round();
    if bp > FULL_BASIS_POINT as f64 {
        return Err(Error::InvalidRoyalty(format!("{percent}% exceeds 100%")));
    }
    Ok(bp as BasisPoint)
}
