//! Shopping cart module.
//!
//! Contains the cart, its line items and the header badge label.

mod badge;
mod cart;

pub use badge::{badge_label, BADGE_CAP};
pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
