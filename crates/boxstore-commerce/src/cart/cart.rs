//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 99;

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart, in the order they were first added.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add a product to the cart and return the resulting line quantity.
    ///
    /// Returns an error if:
    /// - Quantity is zero
    /// - The product is not active
    /// - The product is priced in another currency
    /// - The line would exceed MAX_QUANTITY_PER_ITEM
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<u32, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if !product.is_available() {
            return Err(CommerceError::ProductUnavailable(product.id.to_string()));
        }

        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            return Ok(new_quantity);
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.items.push(LineItem::from_product(product, quantity));
        Ok(quantity)
    }

    /// Set a line's quantity. Zero removes the line.
    ///
    /// Returns `Ok(false)` when the product is not in the cart.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<bool, CommerceError> {
        if quantity == 0 {
            return Ok(self.remove_item(product_id));
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        match self.items.iter_mut().find(|i| &i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a line from the cart.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count (sum of quantities).
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by product id.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let totals = self
            .items
            .iter()
            .map(LineItem::total)
            .collect::<Result<Vec<_>, _>>()?;

        Money::try_sum(totals.iter(), self.currency).ok_or(CommerceError::Overflow)
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Product image (denormalized for display).
    pub image_url: Option<String>,
    /// Unit price at the time the item was added.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
}

impl LineItem {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            title: product.title.clone(),
            image_url: product.image_url.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// Unit price times quantity.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductStatus;

    fn caja(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Caja {}", id), Money::new(cents, Currency::EUR))
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::EUR);
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new(Currency::EUR);
        cart.add_item(&caja("m", 250), 2).unwrap();

        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new(Currency::EUR);
        let product = caja("m", 250);

        cart.add_item(&product, 1).unwrap();
        let quantity = cart.add_item(&product, 2).unwrap();

        assert_eq!(quantity, 3);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new(Currency::EUR);
        let product = caja("m", 250);
        cart.add_item(&product, 1).unwrap();

        assert!(cart.update_quantity(&product.id, 5).unwrap());
        assert_eq!(cart.total_items(), 5);

        assert!(!cart.update_quantity(&ProductId::new("nope"), 5).unwrap());
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new(Currency::EUR);
        let product = caja("m", 250);
        cart.add_item(&product, 3).unwrap();

        assert!(cart.update_quantity(&product.id, 0).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new(Currency::EUR);
        let product = caja("m", 250);
        cart.add_item(&product, 1).unwrap();

        assert!(cart.remove_item(&product.id));
        assert!(!cart.remove_item(&product.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new(Currency::EUR);
        cart.add_item(&caja("m", 1000), 2).unwrap();
        cart.add_item(&caja("l", 2000), 1).unwrap();

        assert_eq!(cart.subtotal().unwrap().amount_cents, 4000);
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::new(Currency::EUR);
        let product = caja("m", 250);

        let result = cart.add_item(&product, MAX_QUANTITY_PER_ITEM + 1);
        assert!(matches!(result, Err(CommerceError::QuantityExceedsLimit(100, 99))));

        cart.add_item(&product, MAX_QUANTITY_PER_ITEM).unwrap();
        assert!(cart.add_item(&product, 1).is_err());
        assert_eq!(cart.total_items(), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = Cart::new(Currency::EUR);
        let result = cart.add_item(&caja("m", 250), 0);
        assert_eq!(result, Err(CommerceError::InvalidQuantity(0)));
    }

    #[test]
    fn test_unavailable_product_rejected() {
        let mut cart = Cart::new(Currency::EUR);
        let mut product = caja("m", 250);
        product.status = ProductStatus::Archived;

        assert!(matches!(
            cart.add_item(&product, 1),
            Err(CommerceError::ProductUnavailable(_))
        ));
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut cart = Cart::new(Currency::EUR);
        let product = Product::new("usd", "Box", Money::new(100, Currency::USD));

        assert!(matches!(
            cart.add_item(&product, 1),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
