//! Floating cart button, visible once something is in the cart.

use leptos::prelude::*;

use crate::cart::{use_cart, use_cart_ui};
use crate::components::{Icon, IconKind};
use crate::config::use_store_config;
use crate::view_model::cart_badge;

#[component]
pub fn FloatingCart() -> impl IntoView {
    let cart = use_cart();
    let ui = use_cart_ui();
    let badge_cap = use_store_config().cart.badge_cap;

    let badge = move || cart_badge(cart.total_items(), badge_cap);

    view! {
        <Show when=move || badge().is_some()>
            <button
                class="floating-cart"
                aria-label="Abrir carrito"
                on:click=move |_| ui.open_cart()
            >
                <Icon kind=IconKind::ShoppingCart/>
                <span class="cart-badge">{move || badge().unwrap_or_default()}</span>
            </button>
        </Show>
    }
}
