//! Search module.
//!
//! Text and collection filtering for the product grid.

mod filter;

pub use filter::{filter_products, ProductFilter};
