//! Source-block emitter for the unified token registry
//!
//! Renders the additional-token table into `add_token(...)` struct
//! literals, one block per token, ready to paste into the
//! `initialize_defi_tokens()` function of the registry module. The
//! transformation is pure and deterministic: the same table always
//! renders to byte-identical text.

use crate::shared::constants::{
    TokenSpec, ERC20_DECIMALS, ERC20_STANDARD, ETHEREUM_CHAIN_ID, ETHEREUM_CMC_ID,
};
use crate::shared::error::RegistryError;
use crate::shared::utils::{cmc_logo_url, validate_ethereum_address};

/// Header comment emitted once, before the first block.
pub const REGISTRY_HEADER: &str =
    "\n        // ============ ADDITIONAL ERC-20 TOKENS ============\n        \n";

/// Validate a table entry before rendering.
///
/// Rejects an empty symbol or name and a malformed Ethereum address,
/// naming the offending field in the error.
pub fn validate_token(token: &TokenSpec) -> Result<(), RegistryError> {
    if token.symbol.is_empty() {
        return Err(RegistryError::validation("token with empty symbol"));
    }

    if token.name.is_empty() {
        return Err(RegistryError::validation("name cannot be empty").for_token(token.symbol));
    }

    validate_ethereum_address(token.ethereum_address).map_err(|e| e.for_token(token.symbol))?;

    Ok(())
}

/// Render one `add_token(...)` block for a token.
///
/// A single parameterized template; the blank line at the end separates
/// consecutive blocks in the concatenated output.
pub fn render_token_block(token: &TokenSpec) -> String {
    let symbol = token.symbol;
    let name = token.name;
    let logo = token.cmc_id.map(cmc_logo_url).unwrap_or_default();
    let cmc_id = match token.cmc_id {
        Some(id) => format!("Some({})", id),
        None => "None".to_string(),
    };
    let category = token.category;
    let address = token.ethereum_address;
    let chain_id = ETHEREUM_CHAIN_ID;
    let decimals = ERC20_DECIMALS;
    let standard = ERC20_STANDARD;
    let chain_logo = cmc_logo_url(ETHEREUM_CMC_ID);

    format!(
        r#"        // {name}
        self.add_token(UnifiedToken {{
            base_symbol: "{symbol}".to_string(),
            name: "{name}".to_string(),
            logo: "{logo}".to_string(),
            cmc_id: {cmc_id},
            coingecko_id: None,
            category: "{category}".to_string(),
            is_multi_chain: false,
            asset_type: AssetType::Token,
            deployments: vec![
                ChainDeployment {{
                    chain: "Ethereum".to_string(),
                    chain_type: "Ethereum".to_string(),
                    chain_id: Some({chain_id}),
                    contract_address: Some("{address}".to_string()),
                    decimals: {decimals},
                    symbol: "{symbol}".to_string(),
                    is_native: false,
                    token_standard: "{standard}".to_string(),
                    chain_logo: Some("{chain_logo}".to_string()),
                }},
            ],
        }});

"#
    )
}

/// Render the whole table: header comment plus one block per entry, in
/// table order.
///
/// Every entry is validated up front; the first invalid entry aborts
/// the run.
pub fn render(tokens: &[TokenSpec]) -> Result<String, RegistryError> {
    for token in tokens {
        validate_token(token)?;
    }

    let mut code = String::from(REGISTRY_HEADER);
    for token in tokens {
        code.push_str(&render_token_block(token));
    }

    log::debug!("rendered {} token blocks", tokens.len());
    Ok(code)
}
