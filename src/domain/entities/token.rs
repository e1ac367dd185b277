//! Token entities for the unified token registry
//!
//! These are the record types the emitted source blocks construct: a
//! token as known across chains, and each of its per-chain deployments.

use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    TokenSpec, ERC20_DECIMALS, ERC20_STANDARD, ETHEREUM_CHAIN_ID, ETHEREUM_CMC_ID,
};
use crate::shared::utils::cmc_logo_url;

/// How a token exists on one particular chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainDeployment {
    pub chain: String,
    pub chain_type: String,
    pub chain_id: Option<u32>,
    pub contract_address: Option<String>,
    pub decimals: u8,
    pub symbol: String,
    pub is_native: bool,
    pub token_standard: String,
    pub chain_logo: Option<String>,
}

/// Asset classification used by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Native,
    Token,
    Wrapped,
    Stablecoin,
    Synthetic,
}

/// A token as tracked by the unified registry, with all its deployments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedToken {
    pub base_symbol: String,
    pub name: String,
    pub logo: String,
    pub cmc_id: Option<u32>,
    pub coingecko_id: Option<String>,
    pub category: String,
    pub is_multi_chain: bool,
    pub asset_type: AssetType,
    pub deployments: Vec<ChainDeployment>,
}

impl From<&TokenSpec> for UnifiedToken {
    /// Build the same record the emitted source block constructs: a
    /// single ERC-20 deployment on Ethereum mainnet.
    fn from(spec: &TokenSpec) -> Self {
        Self {
            base_symbol: spec.symbol.to_string(),
            name: spec.name.to_string(),
            logo: spec.cmc_id.map(cmc_logo_url).unwrap_or_default(),
            cmc_id: spec.cmc_id,
            coingecko_id: None,
            category: spec.category.to_string(),
            is_multi_chain: false,
            asset_type: AssetType::Token,
            deployments: vec![ChainDeployment {
                chain: "Ethereum".to_string(),
                chain_type: "Ethereum".to_string(),
                chain_id: Some(ETHEREUM_CHAIN_ID),
                contract_address: Some(spec.ethereum_address.to_string()),
                decimals: ERC20_DECIMALS,
                symbol: spec.symbol.to_string(),
                is_native: false,
                token_standard: ERC20_STANDARD.to_string(),
                chain_logo: Some(cmc_logo_url(ETHEREUM_CMC_ID)),
            }],
        }
    }
}
