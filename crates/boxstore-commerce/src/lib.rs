//! Storefront domain types for BoxStore.
//!
//! This crate holds the data the storefront views render from:
//!
//! - **Catalog**: products, collections and a validated catalog snapshot
//! - **Cart**: line items, quantity rules and the badge label
//! - **Search**: the product filter used by the home page
//!
//! # Example
//!
//! ```rust
//! use boxstore_commerce::prelude::*;
//!
//! let product = Product::new("caja-m", "Caja mediana", Money::new(250, Currency::EUR));
//!
//! let mut cart = Cart::new(Currency::EUR);
//! cart.add_item(&product, 2).unwrap();
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.subtotal().unwrap().amount_cents, 500);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Collection, Product, ProductStatus};

    // Cart
    pub use crate::cart::{badge_label, Cart, LineItem, BADGE_CAP, MAX_QUANTITY_PER_ITEM};

    // Search
    pub use crate::search::{filter_products, ProductFilter};
}
