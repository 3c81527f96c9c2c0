//! Product filtering for the listing grid.

use crate::catalog::Product;
use crate::ids::CollectionId;
use serde::{Deserialize, Serialize};

/// Criteria a product must meet to appear in the grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive text matched against title, description and tags.
    pub text: Option<String>,
    /// Restrict to one collection.
    pub collection: Option<CollectionId>,
    /// Keep draft and archived products.
    pub include_unavailable: bool,
}

impl ProductFilter {
    /// Build a filter from the raw search box value and collection selection.
    ///
    /// Whitespace-only terms are treated as no term.
    pub fn new(search_term: &str, collection: Option<CollectionId>) -> Self {
        let trimmed = search_term.trim();
        Self {
            text: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
            collection,
            include_unavailable: false,
        }
    }

    /// Check whether a product passes every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.include_unavailable && !product.is_available() {
            return false;
        }

        if let Some(collection) = &self.collection {
            if !product.belongs_to(collection) {
                return false;
            }
        }

        match &self.text {
            Some(needle) => matches_text(product, needle),
            None => true,
        }
    }

    /// Apply the filter, preserving input order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

fn matches_text(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || product
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}

/// Products matching the search term and selected collection, in input order.
pub fn filter_products(
    products: &[Product],
    search_term: &str,
    selected_collection_id: Option<&CollectionId>,
) -> Vec<Product> {
    ProductFilter::new(search_term, selected_collection_id.cloned()).apply(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductStatus;
    use crate::money::{Currency, Money};

    fn products() -> Vec<Product> {
        vec![
            Product::new("m1", "Caja de Mudanza Grande", Money::new(350, Currency::EUR))
                .with_description("Doble canal, ideal para libros")
                .in_collection("mudanza"),
            Product::new("e1", "Caja de Envío", Money::new(120, Currency::EUR))
                .in_collection("envio"),
            Product::new("m2", "Caja Armario", Money::new(900, Currency::EUR))
                .in_collection("mudanza"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let result = filter_products(&products(), "", None);
        assert_eq!(ids(&result), vec!["m1", "e1", "m2"]);
    }

    #[test]
    fn test_whitespace_term_keeps_everything() {
        let result = filter_products(&products(), "   ", None);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let result = filter_products(&products(), "MUDANZA", None);
        assert_eq!(ids(&result), vec!["m1"]);
    }

    #[test]
    fn test_text_matches_description() {
        let result = filter_products(&products(), "libros", None);
        assert_eq!(ids(&result), vec!["m1"]);
    }

    #[test]
    fn test_collection_restricts_results() {
        let mudanza = CollectionId::new("mudanza");
        let result = filter_products(&products(), "", Some(&mudanza));
        assert_eq!(ids(&result), vec!["m1", "m2"]);

        let result = filter_products(&products(), "armario", Some(&mudanza));
        assert_eq!(ids(&result), vec!["m2"]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_products(&products(), "xyz", None).is_empty());
    }

    #[test]
    fn test_unavailable_products_hidden() {
        let mut list = products();
        list[1].status = ProductStatus::Draft;

        let result = filter_products(&list, "", None);
        assert_eq!(ids(&result), vec!["m1", "m2"]);

        let mut filter = ProductFilter::new("", None);
        filter.include_unavailable = true;
        assert_eq!(filter.apply(&list).len(), 3);
    }
}
