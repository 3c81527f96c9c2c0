//! Product catalog module.
//!
//! Contains products, collections and the `Catalog` snapshot that the
//! storefront loads in one piece.

mod collection;
mod product;

pub use collection::Collection;
pub use product::{Product, ProductStatus};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{CollectionId, ProductId};

/// A validated catalog: ids are unique and collections are ordered by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
    collections: Vec<Collection>,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    collections: Vec<Collection>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product or collection ids.
    pub fn new(
        products: Vec<Product>,
        mut collections: Vec<Collection>,
    ) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CommerceError::DuplicateId {
                    kind: "product",
                    id: product.id.to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for collection in &collections {
            if !seen.insert(collection.id.as_str()) {
                return Err(CommerceError::DuplicateId {
                    kind: "collection",
                    id: collection.id.to_string(),
                });
            }
        }

        // Stable, so equal positions keep feed order.
        collections.sort_by_key(|c| c.position);

        Ok(Self {
            products,
            collections,
        })
    }

    /// Parse a catalog from its JSON feed.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::new(raw.products, raw.collections)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a collection by id.
    pub fn collection(&self, id: &CollectionId) -> Option<&Collection> {
        self.collections.iter().find(|c| &c.id == id)
    }

    /// Products belonging to a collection, in catalog order.
    pub fn products_in(&self, id: &CollectionId) -> Vec<&Product> {
        self.products.iter().filter(|p| p.belongs_to(id)).collect()
    }

    /// Split into owned product and collection lists.
    pub fn into_parts(self) -> (Vec<Product>, Vec<Collection>) {
        (self.products, self.collections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, collection: &str) -> Product {
        Product::new(id, id.to_uppercase(), Money::new(100, Currency::EUR)).in_collection(collection)
    }

    #[test]
    fn test_duplicate_product_rejected() {
        let result = Catalog::new(vec![product("a", "x"), product("a", "y")], vec![]);
        assert_eq!(
            result.unwrap_err(),
            CommerceError::DuplicateId {
                kind: "product",
                id: "a".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_collection_rejected() {
        let result = Catalog::new(
            vec![],
            vec![Collection::new("x", "X"), Collection::new("x", "Other")],
        );
        assert!(matches!(
            result,
            Err(CommerceError::DuplicateId { kind: "collection", .. })
        ));
    }

    #[test]
    fn test_collections_sorted_by_position() {
        let mut first = Collection::new("b", "B");
        first.position = 2;
        let mut second = Collection::new("a", "A");
        second.position = 1;

        let catalog = Catalog::new(vec![], vec![first, second]).unwrap();
        let ids: Vec<_> = catalog.collections().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_products_in_collection() {
        let catalog = Catalog::new(
            vec![product("a", "x"), product("b", "y"), product("c", "x")],
            vec![Collection::new("x", "X"), Collection::new("y", "Y")],
        )
        .unwrap();

        let ids: Vec<_> = catalog
            .products_in(&CollectionId::new("x"))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(catalog.collection(&CollectionId::new("missing")).is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "collections": [{"id": "mudanza", "name": "Mudanza"}],
            "products": [{
                "id": "caja-m",
                "title": "Caja mediana",
                "price": {"amount_cents": 250, "currency": "EUR"},
                "collection_ids": ["mudanza"]
            }]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.products_in(&CollectionId::new("mudanza")).len(), 1);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CommerceError::SerializationError(_))
        ));
    }
}
