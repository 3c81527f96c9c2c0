//! Cart state and the widgets that show it.

mod context;
mod drawer;
mod floating;

pub use context::*;
pub use drawer::CartDrawer;
pub use floating::FloatingCart;
