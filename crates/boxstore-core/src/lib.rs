//! Core configuration for the BoxStore storefront.
//!
//! This crate provides:
//! - `StoreConfig` - Brand, navigation, footer, catalog and cart settings
//! - `ConfigError` - Parse and validation failures

mod config;
mod error;

pub use config::*;
pub use error::*;
