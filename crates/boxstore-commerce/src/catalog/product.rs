//! Product types.

use crate::ids::{CollectionId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Product is in draft mode, not visible to customers.
    Draft,
    /// Product is active and visible.
    #[default]
    Active,
    /// Product is archived, not visible but data preserved.
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Active => "active",
            ProductStatus::Archived => "archived",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(ProductStatus::Draft),
            "active" => Some(ProductStatus::Active),
            "archived" => Some(ProductStatus::Archived),
            _ => None,
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Short description for listings.
    #[serde(default)]
    pub description: Option<String>,
    /// Current price.
    pub price: Money,
    /// Previous price, shown struck through when higher than `price`.
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    /// Main image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Collections this product belongs to.
    #[serde(default)]
    pub collection_ids: Vec<CollectionId>,
    /// Tags for search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Product visibility status.
    #[serde(default)]
    pub status: ProductStatus,
}

impl Product {
    /// Create a new active product with no collections.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            price,
            compare_at_price: None,
            image_url: None,
            collection_ids: Vec::new(),
            tags: Vec::new(),
            status: ProductStatus::Active,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add the product to a collection.
    pub fn in_collection(mut self, id: impl Into<CollectionId>) -> Self {
        self.collection_ids.push(id.into());
        self
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Check membership in a collection.
    pub fn belongs_to(&self, collection_id: &CollectionId) -> bool {
        self.collection_ids.contains(collection_id)
    }

    /// Compare-at price, only when it is actually a markdown.
    pub fn discounted_from(&self) -> Option<Money> {
        self.compare_at_price.filter(|compare| {
            compare.currency == self.price.currency && compare.amount_cents > self.price.amount_cents
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_new_product_is_available() {
        let p = Product::new("caja-s", "Caja pequeña", Money::new(120, Currency::EUR));
        assert!(p.is_available());
        assert!(p.collection_ids.is_empty());
    }

    #[test]
    fn test_discounted_from_ignores_higher_price() {
        let mut p = Product::new("caja-s", "Caja pequeña", Money::new(120, Currency::EUR));
        p.compare_at_price = Some(Money::new(100, Currency::EUR));
        assert_eq!(p.discounted_from(), None);

        p.compare_at_price = Some(Money::new(150, Currency::EUR));
        assert_eq!(p.discounted_from(), Some(Money::new(150, Currency::EUR)));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ProductStatus::parse("Archived"), Some(ProductStatus::Archived));
        assert_eq!(ProductStatus::parse("gone"), None);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"id":"p1","title":"Caja","price":{"amount_cents":300}}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.price.currency, Currency::EUR);
        assert_eq!(p.status, ProductStatus::Active);
        assert!(p.description.is_none());
    }
}
