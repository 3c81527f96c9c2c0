//! Cart state shared through context.
//!
//! `CartProvider` owns the cart signal and hands out two capabilities:
//! `CartReader` for views that only display cart data, and `CartWriter` for
//! the few controls that change it. `CartUi` tracks whether the cart panel
//! is open.

use boxstore_commerce::cart::{Cart, LineItem};
use boxstore_commerce::catalog::Product;
use boxstore_commerce::{CommerceError, Currency, Money, ProductId};
use boxstore_observability::{LogLevel, StructuredLogger};
use leptos::prelude::*;

/// Read-only view of the cart.
#[derive(Clone, Copy)]
pub struct CartReader {
    cart: ReadSignal<Cart>,
}

impl CartReader {
    /// Sum of quantities across all lines. Reactive.
    pub fn total_items(&self) -> u32 {
        self.cart.with(Cart::total_items)
    }

    /// Snapshot of the line items. Reactive.
    pub fn items(&self) -> Vec<LineItem> {
        self.cart.with(|cart| cart.items.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.cart.with(Cart::is_empty)
    }

    /// Cart subtotal, `None` if the sum overflows.
    pub fn subtotal(&self) -> Option<Money> {
        self.cart.with(|cart| cart.subtotal().ok())
    }

    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.cart
            .with(|cart| cart.get_item(product_id).map(|i| i.quantity).unwrap_or(0))
    }
}

/// Mutating access to the cart.
#[derive(Clone, Copy)]
pub struct CartWriter {
    cart: WriteSignal<Cart>,
    logger: StoredValue<StructuredLogger>,
}

impl CartWriter {
    /// Add a product and return the new line quantity.
    pub fn add(&self, product: &Product, quantity: u32) -> Result<u32, CommerceError> {
        let mut result = Ok(0);
        self.cart.maybe_update(|cart| {
            result = cart.add_item(product, quantity);
            result.is_ok()
        });

        self.logger.with_value(|logger| match &result {
            Ok(line_quantity) => logger
                .debug_builder("item added")
                .field("product_id", product.id.as_str())
                .field_i64("quantity", i64::from(*line_quantity))
                .emit(),
            Err(e) => logger
                .warn_builder("add to cart rejected")
                .field("product_id", product.id.as_str())
                .field("error", e.to_string())
                .emit(),
        });

        result
    }

    /// Set a line's quantity; zero removes it.
    pub fn set_quantity(&self, product_id: &ProductId, quantity: u32) -> Result<bool, CommerceError> {
        let mut result = Ok(false);
        self.cart.maybe_update(|cart| {
            result = cart.update_quantity(product_id, quantity);
            matches!(result, Ok(true))
        });

        if let Err(e) = &result {
            self.logger.with_value(|logger| {
                logger
                    .warn_builder("quantity change rejected")
                    .field("product_id", product_id.as_str())
                    .field("error", e.to_string())
                    .emit()
            });
        }

        result
    }

    pub fn remove(&self, product_id: &ProductId) -> bool {
        let mut removed = false;
        self.cart.maybe_update(|cart| {
            removed = cart.remove_item(product_id);
            removed
        });
        removed
    }

    pub fn clear(&self) {
        self.cart.update(Cart::clear);
        self.logger.with_value(|logger| logger.debug("cart cleared"));
    }
}

/// Open/closed state of the cart panel.
#[derive(Clone, Copy)]
pub struct CartUi {
    open: RwSignal<bool>,
}

impl CartUi {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    /// Whether the panel is open. Reactive.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn open_cart(&self) {
        self.open.set(true);
    }

    pub fn close_cart(&self) {
        self.open.set(false);
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }
}

impl Default for CartUi {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the cart for everything rendered inside it.
#[component]
pub fn CartProvider(
    /// Currency the cart accepts.
    #[prop(optional)]
    currency: Currency,
    children: Children,
) -> impl IntoView {
    let (cart, set_cart) = signal(Cart::new(currency));
    let logger = StructuredLogger::new("cart").with_min_level(LogLevel::Debug);

    provide_context(CartReader { cart });
    provide_context(CartWriter {
        cart: set_cart,
        logger: StoredValue::new(logger),
    });
    provide_context(CartUi::new());

    children()
}

/// Read access to the cart provided by `CartProvider`.
pub fn use_cart() -> CartReader {
    expect_context::<CartReader>()
}

/// Write access to the cart provided by `CartProvider`.
pub fn use_cart_writer() -> CartWriter {
    expect_context::<CartWriter>()
}

/// The cart panel state provided by `CartProvider`.
pub fn use_cart_ui() -> CartUi {
    expect_context::<CartUi>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caja(id: &str) -> Product {
        Product::new(id, format!("Caja {}", id), Money::new(250, Currency::EUR))
    }

    fn handles() -> (CartReader, CartWriter) {
        let (cart, set_cart) = signal(Cart::new(Currency::EUR));
        (
            CartReader { cart },
            CartWriter {
                cart: set_cart,
                logger: StoredValue::new(StructuredLogger::new("cart")),
            },
        )
    }

    #[test]
    fn test_writer_changes_are_visible_to_reader() {
        let (reader, writer) = handles();
        assert_eq!(reader.total_items(), 0);

        writer.add(&caja("m"), 2).unwrap();
        writer.add(&caja("l"), 1).unwrap();

        assert_eq!(reader.total_items(), 3);
        assert_eq!(reader.items().len(), 2);
        assert_eq!(reader.subtotal(), Some(Money::new(750, Currency::EUR)));
    }

    #[test]
    fn test_set_quantity_and_remove() {
        let (reader, writer) = handles();
        let product = caja("m");
        writer.add(&product, 1).unwrap();

        assert!(writer.set_quantity(&product.id, 4).unwrap());
        assert_eq!(reader.quantity_of(&product.id), 4);

        assert!(writer.remove(&product.id));
        assert!(reader.is_empty());
    }

    #[test]
    fn test_rejected_add_leaves_cart_unchanged() {
        let (reader, writer) = handles();
        assert!(writer.add(&caja("m"), 0).is_err());
        assert!(reader.is_empty());
    }

    #[test]
    fn test_clear() {
        let (reader, writer) = handles();
        writer.add(&caja("m"), 3).unwrap();
        writer.clear();
        assert_eq!(reader.total_items(), 0);
    }

    #[test]
    fn test_cart_ui_toggle() {
        let ui = CartUi::new();
        assert!(!ui.is_open());

        ui.open_cart();
        assert!(ui.is_open());

        ui.toggle();
        assert!(!ui.is_open());

        ui.toggle();
        ui.close_cart();
        assert!(!ui.is_open());
    }
}
