//! Store configuration for the views.

use boxstore_commerce::Currency;
use boxstore_core::StoreConfig;
use boxstore_observability::StructuredLogger;
use leptos::prelude::*;

/// Configuration compiled into the storefront.
pub const BUNDLED_CONFIG: &str = include_str!("../boxstore.toml");

/// Parse the bundled configuration, falling back to the defaults when it is
/// invalid.
pub fn load_store_config() -> StoreConfig {
    match StoreConfig::from_toml_str(BUNDLED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            StructuredLogger::new("config")
                .error_builder("bundled config rejected, using defaults")
                .field("error", e.to_string())
                .emit();
            StoreConfig::default()
        }
    }
}

/// Currency configured for prices and the cart.
pub fn store_currency(config: &StoreConfig) -> Currency {
    Currency::from_code(&config.catalog.currency).unwrap_or_default()
}

/// The config provided by `App`, or the defaults outside of it.
pub fn use_store_config() -> StoreConfig {
    use_context::<StoreConfig>().unwrap_or_default()
}
