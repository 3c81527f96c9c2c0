//! Slide-over cart panel.

use boxstore_commerce::cart::{LineItem, MAX_QUANTITY_PER_ITEM};
use leptos::prelude::*;

use crate::cart::{use_cart, use_cart_ui, use_cart_writer};
use crate::components::{Icon, IconKind};

#[component]
pub fn CartDrawer() -> impl IntoView {
    let cart = use_cart();
    let writer = use_cart_writer();
    let ui = use_cart_ui();

    view! {
        <Show when=move || ui.is_open()>
            <div class="cart-overlay" on:click=move |_| ui.close_cart()></div>
            <aside class="cart-drawer" role="dialog" aria-label="Carrito">
                <header class="cart-drawer-header">
                    <h2>"Tu Carrito"</h2>
                    <button
                        class="icon-button"
                        aria-label="Cerrar carrito"
                        on:click=move |_| ui.close_cart()
                    >
                        <Icon kind=IconKind::Close/>
                    </button>
                </header>

                <Show
                    when=move || !cart.is_empty()
                    fallback=|| view! {
                        <div class="cart-empty">
                            <Icon kind=IconKind::ShoppingCart class="cart-empty-icon"/>
                            <p>"Tu carrito está vacío"</p>
                        </div>
                    }
                >
                    <ul class="cart-lines">
                        <For
                            each=move || cart.items()
                            key=|item| (item.product_id.clone(), item.quantity)
                            children=move |item| view! { <CartLine item=item/> }
                        />
                    </ul>

                    <footer class="cart-drawer-footer">
                        <div class="cart-subtotal">
                            <span>"Subtotal"</span>
                            <strong>
                                {move || cart.subtotal().map(|m| m.display()).unwrap_or_default()}
                            </strong>
                        </div>
                        <button class="btn-outline" on:click=move |_| writer.clear()>
                            "Vaciar carrito"
                        </button>
                    </footer>
                </Show>
            </aside>
        </Show>
    }
}

#[component]
fn CartLine(item: LineItem) -> impl IntoView {
    let writer = use_cart_writer();
    let quantity = item.quantity;
    let line_total = item.total().map(|m| m.display()).unwrap_or_default();

    let decrement_id = item.product_id.clone();
    let increment_id = item.product_id.clone();
    let remove_id = item.product_id.clone();

    view! {
        <li class="cart-line">
            <div class="cart-line-info">
                <p class="cart-line-title">{item.title}</p>
                <p class="cart-line-price">{item.unit_price.display()}</p>
            </div>
            <div class="cart-line-quantity">
                <button
                    class="icon-button"
                    aria-label="Quitar una unidad"
                    on:click=move |_| {
                        let _ = writer.set_quantity(&decrement_id, quantity.saturating_sub(1));
                    }
                >
                    <Icon kind=IconKind::Minus/>
                </button>
                <span>{quantity}</span>
                <button
                    class="icon-button"
                    aria-label="Añadir una unidad"
                    disabled={quantity >= MAX_QUANTITY_PER_ITEM}
                    on:click=move |_| {
                        let _ = writer.set_quantity(&increment_id, quantity + 1);
                    }
                >
                    <Icon kind=IconKind::Plus/>
                </button>
            </div>
            <div class="cart-line-total">
                <strong>{line_total}</strong>
                <button class="link-button" on:click=move |_| {
                    writer.remove(&remove_id);
                }>
                    "Eliminar"
                </button>
            </div>
        </li>
    }
}
