//! Application root and routes.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::cart::{CartDrawer, CartProvider};
use crate::catalog::EmbeddedCatalog;
use crate::components::{PageLayout, StorefrontHomeView, StorefrontShell};
use crate::config::{load_store_config, store_currency};
use crate::logic::use_index_logic;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_store_config();
    let currency = store_currency(&config);
    let title = format!("{} - {}", config.brand.name, config.brand.tagline);
    provide_context(config);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Title text=title/>
        <Meta
            name="description"
            content="Cajas de cartón para mudanza, envío y almacenamiento"
        />

        <CartProvider currency=currency>
            <Router>
                <Routes fallback>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </Router>
            <CartDrawer/>
        </CartProvider>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let logic = use_index_logic(Rc::new(EmbeddedCatalog::bundled()));

    view! {
        <StorefrontShell layout=PageLayout::FullWidth>
            <StorefrontHomeView logic=logic/>
        </StorefrontShell>
    }
}

/// Anything without a route, including the blog link.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <StorefrontShell layout=PageLayout::Centered>
            <div class="not-found">
                <h1>"404"</h1>
                <p>"Página no encontrada"</p>
                <A href="/">
                    <span class="btn">"Volver al inicio"</span>
                </A>
            </div>
        </StorefrontShell>
    }
}
