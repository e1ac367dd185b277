//! Utility functions for the registry generator
//!
//! Address validation and the CoinMarketCap image-path builder shared by
//! the emitter and the entity conversions.

use crate::shared::constants::CMC_LOGO_BASE_URL;
use crate::shared::error::RegistryError;

/// Validate Ethereum address format (0x prefix + 40 hex characters)
pub fn validate_ethereum_address(address: &str) -> Result<(), RegistryError> {
    if !address.starts_with("0x") {
        return Err(RegistryError::validation("ethereum_address must start with 0x"));
    }

    if address.len() != 42 {
        return Err(RegistryError::validation("ethereum_address must be 42 characters long"));
    }

    hex::decode(&address[2..])
        .map_err(|_| RegistryError::validation("ethereum_address contains invalid hex characters"))?;

    Ok(())
}

/// Build the CoinMarketCap 64x64 image URL for a cmc id.
pub fn cmc_logo_url(cmc_id: u32) -> String {
    format!("{}/{}.png", CMC_LOGO_BASE_URL, cmc_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_ethereum_address() {
        // Valid address
        assert!(validate_ethereum_address("0x5A98FcBEA516Cf06857215779Fd812CA3beF1B32").is_ok());

        // Invalid addresses
        assert!(validate_ethereum_address("5A98FcBEA516Cf06857215779Fd812CA3beF1B32").is_err()); // No 0x
        assert!(validate_ethereum_address("0x5A98FcBEA516Cf06857215779Fd812CA3beF1B3").is_err()); // Too short
        assert!(validate_ethereum_address("0x5A98FcBEA516Cf06857215779Fd812CA3beF1B325").is_err()); // Too long
        assert!(validate_ethereum_address("0x5A98FcBEA516Cf06857215779Fd812CA3beF1B3g").is_err()); // Invalid char
        assert!(validate_ethereum_address("").is_err());
    }

    #[test]
    fn test_cmc_logo_url() {
        assert_eq!(
            cmc_logo_url(8000),
            "https://s2.coinmarketcap.com/static/img/coins/64x64/8000.png"
        );
        assert!(cmc_logo_url(1027).ends_with("/1027.png"));
    }

    proptest! {
        #[test]
        fn valid_hex_bodies_always_pass(body in "[0-9a-fA-F]{40}") {
            let address = format!("0x{}", body);
            prop_assert!(validate_ethereum_address(&address).is_ok());
        }

        #[test]
        fn short_bodies_always_fail(body in "[0-9a-fA-F]{0,39}") {
            let address = format!("0x{}", body);
            prop_assert!(validate_ethereum_address(&address).is_err());
        }

        #[test]
        fn non_hex_characters_always_fail(prefix in "[0-9a-fA-F]{10}", suffix in "[0-9a-fA-F]{29}") {
            let address = format!("0x{}g{}", prefix, suffix);
            prop_assert!(validate_ethereum_address(&address).is_err());
        }
    }
}
