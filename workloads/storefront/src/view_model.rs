//! Rendering decisions for the home page and shell.
//!
//! The components only translate these values into markup, so every branch
//! the pages can take is checked here without a browser.

use boxstore_commerce::cart::badge_label;
use boxstore_commerce::{catalog::Collection, catalog::Product, CollectionId};

/// Heading used when the selected collection id is not in the list.
pub const FALLBACK_COLLECTION_TITLE: &str = "Productos";
/// Heading when no collection is selected.
pub const ALL_PRODUCTS_TITLE: &str = "Productos Destacados";
/// Subtitle when no collection is selected.
pub const ALL_PRODUCTS_SUBTITLE: &str = "Las mejores cajas de cartón para todas tus necesidades";

/// Whether the collections section renders at all.
pub fn show_collections(loading_collections: bool, collections: &[Collection]) -> bool {
    !loading_collections && !collections.is_empty()
}

/// Heading, subtitle and "show all" visibility for the products section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsHeading {
    pub title: String,
    pub subtitle: String,
    pub show_all: bool,
}

impl ProductsHeading {
    pub fn resolve(collections: &[Collection], selected: Option<&CollectionId>) -> Self {
        let Some(selected) = selected else {
            return Self {
                title: ALL_PRODUCTS_TITLE.to_string(),
                subtitle: ALL_PRODUCTS_SUBTITLE.to_string(),
                show_all: false,
            };
        };

        let collection = collections.iter().find(|c| &c.id == selected);
        Self {
            title: collection
                .map(|c| c.name.clone())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| FALLBACK_COLLECTION_TITLE.to_string()),
            subtitle: collection
                .and_then(|c| c.description.clone())
                .unwrap_or_default(),
            show_all: true,
        }
    }
}

/// Message shown when the grid has nothing to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// A search term is active and nothing matched it.
    NoSearchMatch,
    /// The catalog has no products to show.
    NoProducts,
}

impl EmptyState {
    pub fn for_search_term(search_term: &str) -> Self {
        if search_term.is_empty() {
            EmptyState::NoProducts
        } else {
            EmptyState::NoSearchMatch
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoSearchMatch => "No encontramos cajas que coincidan con tu búsqueda",
            EmptyState::NoProducts => "No hay productos disponibles",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoSearchMatch => "Intenta con otros términos de búsqueda",
            EmptyState::NoProducts => "Pronto tendremos más productos disponibles",
        }
    }
}

/// The three mutually exclusive states of the product grid.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductGrid {
    /// Placeholder tiles while products load.
    Loading { tiles: usize },
    /// One card per product, in input order.
    Cards(Vec<Product>),
    /// Nothing to list.
    Empty(EmptyState),
}

impl ProductGrid {
    /// Pick the grid state. Loading wins over any product data.
    pub fn resolve(loading: bool, products: &[Product], search_term: &str, tiles: usize) -> Self {
        if loading {
            ProductGrid::Loading { tiles }
        } else if !products.is_empty() {
            ProductGrid::Cards(products.to_vec())
        } else {
            ProductGrid::Empty(EmptyState::for_search_term(search_term))
        }
    }
}

/// Badge text for the cart trigger, `None` when the cart is empty.
pub fn cart_badge(total_items: u32, cap: u32) -> Option<String> {
    badge_label(total_items, cap)
}

/// Inline style staggering a list entry's entrance animation.
pub fn stagger_delay(index: usize, step_ms: usize) -> String {
    format!("animation-delay: {}ms", index * step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxstore_commerce::{Currency, Money};

    const TILES: usize = 8;

    fn products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| {
                Product::new(
                    format!("caja-{}", i),
                    format!("Caja {}", i),
                    Money::new(100 + i as i64, Currency::EUR),
                )
            })
            .collect()
    }

    fn collections() -> Vec<Collection> {
        vec![
            Collection::new("mudanza", "Cajas de Mudanza")
                .with_description("Resistentes para tus traslados"),
            Collection::new("envio", "Cajas de Envío"),
        ]
    }

    #[test]
    fn test_loading_shows_skeletons_regardless_of_products() {
        for n in [0, 1, 20] {
            assert_eq!(
                ProductGrid::resolve(true, &products(n), "", TILES),
                ProductGrid::Loading { tiles: 8 }
            );
        }
        assert_eq!(
            ProductGrid::resolve(true, &[], "xyz", TILES),
            ProductGrid::Loading { tiles: 8 }
        );
    }

    #[test]
    fn test_cards_preserve_input_order() {
        let list = products(5);
        match ProductGrid::resolve(false, &list, "", TILES) {
            ProductGrid::Cards(cards) => assert_eq!(cards, list),
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[test]
    fn test_cards_ignore_search_term() {
        let list = products(2);
        assert!(matches!(
            ProductGrid::resolve(false, &list, "xyz", TILES),
            ProductGrid::Cards(cards) if cards.len() == 2
        ));
    }

    #[test]
    fn test_empty_without_search_term() {
        let grid = ProductGrid::resolve(false, &[], "", TILES);
        assert_eq!(grid, ProductGrid::Empty(EmptyState::NoProducts));
        assert_eq!(EmptyState::NoProducts.title(), "No hay productos disponibles");
    }

    #[test]
    fn test_empty_with_search_term() {
        let grid = ProductGrid::resolve(false, &[], "xyz", TILES);
        assert_eq!(grid, ProductGrid::Empty(EmptyState::NoSearchMatch));
        assert_eq!(
            EmptyState::NoSearchMatch.title(),
            "No encontramos cajas que coincidan con tu búsqueda"
        );
    }

    #[test]
    fn test_heading_for_selected_collection() {
        let selected = CollectionId::new("mudanza");
        let heading = ProductsHeading::resolve(&collections(), Some(&selected));

        assert_eq!(heading.title, "Cajas de Mudanza");
        assert_eq!(heading.subtitle, "Resistentes para tus traslados");
        assert!(heading.show_all);
    }

    #[test]
    fn test_heading_for_collection_without_description() {
        let selected = CollectionId::new("envio");
        let heading = ProductsHeading::resolve(&collections(), Some(&selected));

        assert_eq!(heading.title, "Cajas de Envío");
        assert_eq!(heading.subtitle, "");
    }

    #[test]
    fn test_heading_for_unknown_collection_falls_back() {
        let selected = CollectionId::new("desconocida");
        let heading = ProductsHeading::resolve(&collections(), Some(&selected));

        assert_eq!(heading.title, FALLBACK_COLLECTION_TITLE);
        assert_eq!(heading.subtitle, "");
        assert!(heading.show_all);
    }

    #[test]
    fn test_heading_without_selection() {
        let heading = ProductsHeading::resolve(&collections(), None);

        assert_eq!(heading.title, ALL_PRODUCTS_TITLE);
        assert_eq!(heading.subtitle, ALL_PRODUCTS_SUBTITLE);
        assert!(!heading.show_all);
    }

    #[test]
    fn test_collections_section_visibility() {
        let list = collections();
        assert!(show_collections(false, &list));
        assert!(!show_collections(true, &list));
        assert!(!show_collections(false, &[]));
        assert!(!show_collections(true, &[]));
    }

    #[test]
    fn test_cart_badge() {
        assert_eq!(cart_badge(0, 99), None);
        assert_eq!(cart_badge(5, 99).as_deref(), Some("5"));
        assert_eq!(cart_badge(150, 99).as_deref(), Some("99+"));
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 100), "animation-delay: 0ms");
        assert_eq!(stagger_delay(3, 50), "animation-delay: 150ms");
    }
}
