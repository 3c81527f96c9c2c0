//! BoxStore storefront
//!
//! Client-rendered Leptos storefront for a cardboard box shop:
//! - `StorefrontShell` - header, footer and cart affordances around each page
//! - `StorefrontHomeView` - hero search, collections and the product grid
//! - `use_index_logic` - catalog loading, search and collection selection
//! - `CartProvider` - cart state split into reader, writer and panel handles

pub mod app;
pub mod cart;
pub mod catalog;
pub mod components;
pub mod config;
pub mod logic;
pub mod view_model;

pub use app::App;
