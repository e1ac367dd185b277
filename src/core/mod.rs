//! Core generator functionality
//!
//! This module contains the template emitter that turns the static
//! token table into registry source blocks.

pub mod emitter;

// Re-export core components
pub use emitter::{render, render_token_block, validate_token, REGISTRY_HEADER};
