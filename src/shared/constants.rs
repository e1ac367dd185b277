//! Constants for the registry generator
//!
//! This module holds the static tables the generator works from: the
//! chains the wallet supports and the additional ERC-20 tokens to be
//! emitted into the unified token registry, plus the fixed values the
//! emitted deployments share.

/// Base path for CoinMarketCap 64x64 coin images; the cmc id is appended as `{id}.png`.
pub const CMC_LOGO_BASE_URL: &str = "https://s2.coinmarketcap.com/static/img/coins/64x64";

/// CoinMarketCap image id for Ethereum itself, used as the chain logo.
pub const ETHEREUM_CMC_ID: u32 = 1027;

/// Ethereum mainnet chain id.
pub const ETHEREUM_CHAIN_ID: u32 = 1;

/// Decimals shared by every emitted ERC-20 deployment.
pub const ERC20_DECIMALS: u8 = 18;

/// Token standard tag for every emitted deployment.
pub const ERC20_STANDARD: &str = "ERC-20";

/// A chain the wallet supports, with its internal chain-type variants.
#[derive(Debug, Clone)]
pub struct ChainSupport {
    pub name: &'static str,
    pub chain_types: &'static [&'static str],
}

/// Supported chains in the multichain wallet.
///
/// Reference list for maintainers; the emitter itself only targets the
/// Ethereum entry.
pub static SUPPORTED_CHAINS: &[ChainSupport] = &[
    ChainSupport { name: "Bitcoin", chain_types: &["BitcoinLegacy", "BitcoinSegwit", "BitcoinTaproot"] },
    ChainSupport { name: "Ethereum", chain_types: &["Ethereum"] },
    ChainSupport { name: "Solana", chain_types: &["Solana"] },
    ChainSupport { name: "Tron", chain_types: &["Tron"] },
    ChainSupport { name: "Dogecoin", chain_types: &["Dogecoin"] },
    ChainSupport { name: "Filecoin", chain_types: &["Filecoin"] },
    ChainSupport { name: "Cosmos", chain_types: &["Cosmos"] },
    ChainSupport { name: "Osmosis", chain_types: &["Osmosis"] },
    ChainSupport { name: "Secret", chain_types: &["Secret"] },
    ChainSupport { name: "Juno", chain_types: &["Juno"] },
    ChainSupport { name: "Akash", chain_types: &["Akash"] },
    ChainSupport { name: "Celestia", chain_types: &["Celestia"] },
    ChainSupport { name: "Sei", chain_types: &["Sei"] },
    ChainSupport { name: "Injective", chain_types: &["Injective"] },
    ChainSupport { name: "Near", chain_types: &["Near"] },
    ChainSupport { name: "Sui", chain_types: &["Sui"] },
    ChainSupport { name: "Ripple", chain_types: &["Ripple"] },
    ChainSupport { name: "Tezos", chain_types: &["Tezos"] },
];

/// One token's metadata as consumed by the emitter.
#[derive(Debug, Clone)]
pub struct TokenSpec {
    pub symbol: &'static str,
    pub name: &'static str,
    pub cmc_id: Option<u32>,
    pub category: &'static str,
    pub ethereum_address: &'static str,
}

/// Additional tokens from the unified registry with deployments on supported chains.
pub static ADDITIONAL_TOKENS: &[TokenSpec] = &[
    TokenSpec {
        symbol: "LDO",
        name: "Lido DAO",
        cmc_id: Some(8000),
        category: "DeFi",
        ethereum_address: "0x5A98FcBEA516Cf06857215779Fd812CA3beF1B32",
    },
    TokenSpec {
        symbol: "IMX",
        name: "Immutable X",
        cmc_id: Some(10603),
        category: "Layer 2",
        ethereum_address: "0xF57e7e7C23978C3cAEC3C3548E3D615c346e79fF",
    },
    TokenSpec {
        symbol: "ENA",
        name: "Ethena",
        cmc_id: Some(30171),
        category: "DeFi",
        ethereum_address: "0x57e114B691Db790C35207b2e685D4A43181e6061",
    },
    TokenSpec {
        symbol: "ONDO",
        name: "Ondo Finance",
        cmc_id: Some(21159),
        category: "RWA",
        ethereum_address: "0xfAbA6f8e4a5E8Ab82F62fe7C39859FA577269BE3",
    },
    TokenSpec {
        symbol: "HYPE",
        name: "Hyperliquid",
        cmc_id: Some(33021),
        category: "DEX",
        ethereum_address: "0xEa66501Df1a00261e3bB79D1e90444fc6C7104e7",
    },
    TokenSpec {
        symbol: "MNT",
        name: "Mantle",
        cmc_id: Some(27075),
        category: "Layer 2",
        ethereum_address: "0x3c3a81e81dc49A522A592e7622A7E711c06bf354",
    },
];

/// Look up a supported chain by its logical name.
pub fn chain_support(name: &str) -> Option<&'static ChainSupport> {
    SUPPORTED_CHAINS.iter().find(|chain| chain.name == name)
}

/// Whether the wallet supports a chain with the given logical name.
pub fn is_supported_chain(name: &str) -> bool {
    chain_support(name).is_some()
}

/// Look up an additional token by symbol.
pub fn additional_token(symbol: &str) -> Option<&'static TokenSpec> {
    ADDITIONAL_TOKENS.iter().find(|token| token.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_supported_chains() {
        assert_eq!(SUPPORTED_CHAINS.len(), 18);
        assert!(is_supported_chain("Ethereum"));
        assert!(is_supported_chain("Bitcoin"));
        assert!(is_supported_chain("Tezos"));
        assert!(!is_supported_chain("Polygon"));
    }

    #[test]
    fn test_chain_type_variants() {
        let bitcoin = chain_support("Bitcoin").expect("Bitcoin must be supported");
        assert_eq!(
            bitcoin.chain_types,
            &["BitcoinLegacy", "BitcoinSegwit", "BitcoinTaproot"]
        );

        let ethereum = chain_support("Ethereum").expect("Ethereum must be supported");
        assert_eq!(ethereum.chain_types, &["Ethereum"]);
    }

    #[test]
    fn test_additional_tokens() {
        assert_eq!(ADDITIONAL_TOKENS.len(), 6);
        assert_eq!(ADDITIONAL_TOKENS[0].symbol, "LDO");
        assert_eq!(ADDITIONAL_TOKENS[0].cmc_id, Some(8000));
        assert_eq!(ADDITIONAL_TOKENS[5].symbol, "MNT");

        let hype = additional_token("HYPE").expect("HYPE must be in the table");
        assert_eq!(hype.name, "Hyperliquid");
        assert_eq!(hype.category, "DEX");
    }

    #[test]
    fn test_token_symbols_are_unique() {
        let symbols: HashSet<_> = ADDITIONAL_TOKENS.iter().map(|t| t.symbol).collect();
        assert_eq!(symbols.len(), ADDITIONAL_TOKENS.len());
    }

    #[test]
    fn test_token_addresses_are_well_formed() {
        for token in ADDITIONAL_TOKENS {
            crate::shared::utils::validate_ethereum_address(token.ethereum_address)
                .expect("table addresses must be well-formed");
        }
    }
}
