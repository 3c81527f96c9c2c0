//! Where the home page gets its products and collections.

use async_trait::async_trait;
use boxstore_commerce::catalog::{Catalog, Collection, Product};
use boxstore_commerce::CommerceError;

/// Catalog feed bundled with the storefront.
pub const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Supplies catalog data to the index logic.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn load_products(&self) -> Result<Vec<Product>, CommerceError>;

    async fn load_collections(&self) -> Result<Vec<Collection>, CommerceError>;
}

/// Catalog parsed from a JSON feed compiled into the binary.
#[derive(Debug, Clone)]
pub struct EmbeddedCatalog {
    json: &'static str,
}

impl EmbeddedCatalog {
    pub fn new(json: &'static str) -> Self {
        Self { json }
    }

    /// The feed shipped in `data/catalog.json`.
    pub fn bundled() -> Self {
        Self::new(BUNDLED_CATALOG)
    }

    /// Parse and validate the feed.
    pub fn catalog(&self) -> Result<Catalog, CommerceError> {
        Catalog::from_json(self.json)
    }
}

#[async_trait(?Send)]
impl CatalogSource for EmbeddedCatalog {
    async fn load_products(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.catalog()?.products().to_vec())
    }

    async fn load_collections(&self) -> Result<Vec<Collection>, CommerceError> {
        Ok(self.catalog()?.collections().to_vec())
    }
}

/// Catalog held in memory, for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog(pub Catalog);

#[async_trait(?Send)]
impl CatalogSource for StaticCatalog {
    async fn load_products(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.0.products().to_vec())
    }

    async fn load_collections(&self) -> Result<Vec<Collection>, CommerceError> {
        Ok(self.0.collections().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxstore_commerce::{CollectionId, Currency};
    use futures::executor::block_on;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = EmbeddedCatalog::bundled().catalog().unwrap();
        assert!(!catalog.products().is_empty());
        assert_eq!(catalog.collections().len(), 4);
    }

    #[test]
    fn test_bundled_products_reference_known_collections() {
        let catalog = EmbeddedCatalog::bundled().catalog().unwrap();
        for product in catalog.products() {
            for id in &product.collection_ids {
                assert!(
                    catalog.collection(id).is_some(),
                    "{} references unknown collection {}",
                    product.id,
                    id
                );
            }
        }
    }

    #[test]
    fn test_bundled_prices_are_euros() {
        let catalog = EmbeddedCatalog::bundled().catalog().unwrap();
        assert!(catalog
            .products()
            .iter()
            .all(|p| p.price.currency == Currency::EUR && p.price.amount_cents > 0));
    }

    #[test]
    fn test_every_collection_has_products() {
        let catalog = EmbeddedCatalog::bundled().catalog().unwrap();
        for collection in catalog.collections() {
            assert!(!catalog.products_in(&collection.id).is_empty());
        }
        assert!(catalog.collection(&CollectionId::new("mudanza")).is_some());
    }

    #[test]
    fn test_invalid_feed_is_an_error() {
        let source = EmbeddedCatalog::new("\"not a catalog\"");
        assert!(source.catalog().is_err());
        assert!(block_on(source.load_products()).is_err());
    }

    #[test]
    fn test_sources_load_through_trait() {
        let embedded: Box<dyn CatalogSource> = Box::new(EmbeddedCatalog::bundled());
        let products = block_on(embedded.load_products()).unwrap();
        let collections = block_on(embedded.load_collections()).unwrap();
        assert_eq!(collections[0].id, CollectionId::new("mudanza"));

        let fixed = StaticCatalog(Catalog::new(products.clone(), collections).unwrap());
        assert_eq!(block_on(fixed.load_products()).unwrap(), products);
    }

    #[test]
    fn test_static_catalog_default_is_empty() {
        let source = StaticCatalog::default();
        assert!(block_on(source.load_products()).unwrap().is_empty());
        assert!(block_on(source.load_collections()).unwrap().is_empty());
    }
}
