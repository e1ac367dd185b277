//! Registry Codegen
//!
//! Offline code generator for the multichain wallet's unified token
//! registry. The crate holds two static tables - the chains the wallet
//! supports and the additional ERC-20 tokens to register - and renders
//! the token table into `add_token(...)` source blocks to paste into the
//! `initialize_defi_tokens()` function of the registry module.
//!
//! ## Architecture
//!
//! - **Core**: the template emitter
//! - **Domain**: the registry entity types the emitted code constructs
//! - **Shared**: static tables, errors, and validation utilities
//!
//! ## Usage
//!
//! ```
//! use registry_codegen::{render, ADDITIONAL_TOKENS};
//!
//! let code = render(ADDITIONAL_TOKENS)?;
//! println!("{}", code);
//! # Ok::<(), registry_codegen::RegistryError>(())
//! ```

pub mod core;
pub mod domain;
pub mod shared;

// Re-export main operations
pub use crate::core::emitter::{render, render_token_block, validate_token, REGISTRY_HEADER};

// Re-export domain entities
pub use crate::domain::entities::{AssetType, ChainDeployment, UnifiedToken};

// Re-export shared components
pub use crate::shared::constants::{
    ChainSupport, TokenSpec, ADDITIONAL_TOKENS, SUPPORTED_CHAINS,
};
pub use crate::shared::error::RegistryError;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
