//! Home page state: catalog loading, search and collection selection.

use std::rc::Rc;

use boxstore_commerce::catalog::{Collection, Product};
use boxstore_commerce::search::filter_products;
use boxstore_commerce::{CollectionId, CommerceError};
use boxstore_observability::StructuredLogger;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::CatalogSource;

/// Everything `StorefrontHomeView` renders from.
#[derive(Clone, Copy)]
pub struct IndexLogic {
    pub collections: Signal<Vec<Collection>>,
    /// True until products have been loaded.
    pub loading: Signal<bool>,
    /// True until collections have been loaded.
    pub loading_collections: Signal<bool>,
    pub search_term: Signal<String>,
    pub selected_collection_id: Signal<Option<CollectionId>>,
    /// Products after search and collection filtering, in catalog order.
    pub filtered_products: Signal<Vec<Product>>,
    pub set_search_term: Callback<String>,
    pub handle_view_collection_products: Callback<Collection>,
    pub handle_show_all_products: Callback<()>,
}

/// Signals behind an `IndexLogic`.
///
/// Catalog lists start as `None` and are filled once by `apply_products` and
/// `apply_collections`.
#[derive(Clone, Copy)]
pub struct IndexState {
    products: RwSignal<Option<Vec<Product>>>,
    collections: RwSignal<Option<Vec<Collection>>>,
    search_term: RwSignal<String>,
    selected: RwSignal<Option<CollectionId>>,
    logger: StoredValue<StructuredLogger>,
}

impl IndexState {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(None),
            collections: RwSignal::new(None),
            search_term: RwSignal::new(String::new()),
            selected: RwSignal::new(None),
            logger: StoredValue::new(StructuredLogger::new("index")),
        }
    }

    /// Store loaded products. A failed load leaves an empty list.
    pub fn apply_products(&self, result: Result<Vec<Product>, CommerceError>) {
        let products = self.settle("products", result);
        self.products.set(Some(products));
    }

    /// Store loaded collections. A failed load leaves an empty list.
    pub fn apply_collections(&self, result: Result<Vec<Collection>, CommerceError>) {
        let collections = self.settle("collections", result);
        self.collections.set(Some(collections));
    }

    fn settle<T>(&self, what: &str, result: Result<Vec<T>, CommerceError>) -> Vec<T> {
        self.logger.with_value(|logger| match result {
            Ok(items) => {
                logger
                    .info_builder(format!("{} loaded", what))
                    .field_i64("count", items.len() as i64)
                    .emit();
                items
            }
            Err(e) => {
                logger
                    .error_builder(format!("failed to load {}", what))
                    .field("error", e.to_string())
                    .emit();
                Vec::new()
            }
        })
    }

    pub fn logic(&self) -> IndexLogic {
        let Self {
            products,
            collections,
            search_term,
            selected,
            logger,
        } = *self;

        let filtered = Memo::new(move |_| {
            let term = search_term.get();
            let selected = selected.get();
            products.with(|products| {
                products
                    .as_deref()
                    .map(|products| filter_products(products, &term, selected.as_ref()))
                    .unwrap_or_default()
            })
        });

        IndexLogic {
            collections: Signal::derive(move || collections.get().unwrap_or_default()),
            loading: Signal::derive(move || products.with(Option::is_none)),
            loading_collections: Signal::derive(move || collections.with(Option::is_none)),
            search_term: search_term.into(),
            selected_collection_id: selected.into(),
            filtered_products: filtered.into(),
            set_search_term: Callback::new(move |term: String| search_term.set(term)),
            handle_view_collection_products: Callback::new(move |collection: Collection| {
                logger.with_value(|logger| {
                    logger
                        .debug_builder("collection selected")
                        .field("collection_id", collection.id.as_str())
                        .emit()
                });
                selected.set(Some(collection.id));
                search_term.set(String::new());
            }),
            handle_show_all_products: Callback::new(move |_: ()| selected.set(None)),
        }
    }
}

impl Default for IndexState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the home page logic and start loading the catalog from `source`.
pub fn use_index_logic(source: Rc<dyn CatalogSource>) -> IndexLogic {
    let state = IndexState::new();

    let products_source = Rc::clone(&source);
    spawn_local(async move {
        state.apply_products(products_source.load_products().await);
    });
    spawn_local(async move {
        state.apply_collections(source.load_collections().await);
    });

    state.logic()
}
