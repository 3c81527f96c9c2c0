//! The home page body: hero with search, collections, products, trust strip.

use leptos::prelude::*;

use crate::components::{CollectionCard, Icon, IconKind, ProductCard};
use crate::config::use_store_config;
use crate::logic::IndexLogic;
use crate::view_model::{show_collections, stagger_delay, ProductGrid, ProductsHeading};

/// Stagger between collection cards.
const COLLECTION_STAGGER_MS: usize = 100;
/// Stagger between product cards.
const PRODUCT_STAGGER_MS: usize = 50;

/// Renders the home page from `logic`. Holds no state of its own.
#[component]
pub fn StorefrontHomeView(logic: IndexLogic) -> impl IntoView {
    view! {
        <HeroSection logic=logic/>
        <CollectionsSection logic=logic/>
        <ProductsSection logic=logic/>
        <TrustSection/>
    }
}

#[component]
fn HeroSection(logic: IndexLogic) -> impl IntoView {
    let features = [
        (IconKind::Truck, "Envío Rápido", "Entrega en 24-48h en toda España"),
        (IconKind::Shield, "Calidad Garantizada", "Cartón corrugado de alta resistencia"),
        (IconKind::Star, "Mejor Precio", "Precios competitivos sin comprometer calidad"),
    ];

    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title">
                    "Cajas de Cartón "
                    <span class="hero-accent">"Profesionales"</span>
                </h1>
                <p class="hero-subtitle">
                    "Soluciones de embalaje de alta calidad para mudanzas, envíos y almacenamiento. "
                    "Resistentes, económicas y amigables con el medio ambiente."
                </p>

                <div class="search-box">
                    <Icon kind=IconKind::Search class="search-icon"/>
                    <input
                        type="search"
                        placeholder="Buscar cajas..."
                        prop:value=move || logic.search_term.get()
                        on:input=move |ev| logic.set_search_term.run(event_target_value(&ev))
                    />
                </div>

                <div class="feature-grid">
                    {features
                        .into_iter()
                        .map(|(icon, title, text)| view! {
                            <div class="feature-card">
                                <Icon kind=icon class="feature-icon"/>
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CollectionsSection(logic: IndexLogic) -> impl IntoView {
    let visible = move || {
        logic
            .collections
            .with(|collections| show_collections(logic.loading_collections.get(), collections))
    };

    view! {
        <Show when=visible>
            <section class="collections">
                <div class="container">
                    <h2 class="section-title">"Nuestras Categorías"</h2>
                    <p class="section-subtitle">
                        "Encuentra la caja perfecta para cada necesidad"
                    </p>
                    <div class="collection-grid">
                        <For
                            each=move || logic.collections.get().into_iter().enumerate()
                            key=|(_, collection)| collection.id.clone()
                            children=move |(index, collection)| view! {
                                <div class="fade-in" style=stagger_delay(index, COLLECTION_STAGGER_MS)>
                                    <CollectionCard
                                        collection=collection
                                        on_view_products=logic.handle_view_collection_products
                                    />
                                </div>
                            }
                        />
                    </div>
                </div>
            </section>
        </Show>
    }
}

#[component]
fn ProductsSection(logic: IndexLogic) -> impl IntoView {
    let skeleton_tiles = use_store_config().catalog.skeleton_tiles;

    let heading = Memo::new(move |_| {
        let selected = logic.selected_collection_id.get();
        logic
            .collections
            .with(|collections| ProductsHeading::resolve(collections, selected.as_ref()))
    });

    let grid = move || {
        let search_term = logic.search_term.get();
        let state = logic.filtered_products.with(|products| {
            ProductGrid::resolve(logic.loading.get(), products, &search_term, skeleton_tiles)
        });

        match state {
            ProductGrid::Loading { tiles } => view! {
                <div class="product-grid">
                    {(0..tiles).map(|_| view! { <ProductSkeleton/> }).collect_view()}
                </div>
            }
            .into_any(),
            ProductGrid::Cards(products) => view! {
                <div class="product-grid">
                    {products
                        .into_iter()
                        .enumerate()
                        .map(|(index, product)| view! {
                            <div class="fade-in" style=stagger_delay(index, PRODUCT_STAGGER_MS)>
                                <ProductCard product=product/>
                            </div>
                        })
                        .collect_view()}
                </div>
            }
            .into_any(),
            ProductGrid::Empty(empty) => view! {
                <div class="empty-state">
                    <Icon kind=IconKind::Package class="empty-icon"/>
                    <h3>{empty.title()}</h3>
                    <p>{empty.hint()}</p>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <section class="products">
            <div class="container">
                <div class="products-header">
                    <div>
                        <h2 class="section-title">{move || heading.get().title}</h2>
                        <p class="section-subtitle">{move || heading.get().subtitle}</p>
                    </div>
                    <Show when=move || heading.get().show_all>
                        <button
                            class="btn-outline"
                            on:click=move |_| logic.handle_show_all_products.run(())
                        >
                            "Ver Todos los Productos"
                        </button>
                    </Show>
                </div>
                {grid}
            </div>
        </section>
    }
}

#[component]
fn ProductSkeleton() -> impl IntoView {
    view! {
        <div class="product-card skeleton" aria-hidden="true">
            <div class="skeleton-image"></div>
            <div class="product-body">
                <div class="skeleton-line"></div>
                <div class="skeleton-line short"></div>
            </div>
        </div>
    }
}

#[component]
fn TrustSection() -> impl IntoView {
    let items = [
        (IconKind::Package, "Resistencia Superior", "Cartón corrugado de alta calidad que soporta hasta 30kg"),
        (IconKind::Truck, "Entrega Garantizada", "Envío gratuito en pedidos superiores a 50€"),
        (IconKind::Shield, "100% Reciclable", "Comprometidos con el medio ambiente"),
        (IconKind::Star, "Satisfacción Total", "Garantía de devolución si no estás satisfecho"),
    ];

    view! {
        <section class="trust">
            <div class="container">
                <h2 class="section-title">"¿Por qué elegir nuestras cajas?"</h2>
                <p class="section-subtitle">
                    "Más de 10 años de experiencia en soluciones de embalaje"
                </p>
                <div class="trust-grid">
                    {items
                        .into_iter()
                        .map(|(icon, title, text)| view! {
                            <div class="trust-item">
                                <span class="trust-icon">
                                    <Icon kind=icon/>
                                </span>
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
