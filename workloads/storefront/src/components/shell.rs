//! Page chrome shared by every storefront page.

use boxstore_core::{FooterColumn, FooterItem, StoreConfig};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::cart::{use_cart, use_cart_ui, FloatingCart};
use crate::components::{Icon, IconKind};
use crate::config::use_store_config;
use crate::view_model::cart_badge;

/// Width of the main content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageLayout {
    #[default]
    Default,
    FullWidth,
    Centered,
}

impl PageLayout {
    pub fn main_class(&self) -> &'static str {
        match self {
            PageLayout::Default => "page-main container",
            PageLayout::FullWidth => "page-main",
            PageLayout::Centered => "page-main container page-centered",
        }
    }
}

/// Header, page content and footer.
#[component]
pub fn StorefrontShell(
    children: Children,
    /// Secondary heading rendered under the header row.
    #[prop(optional, into)]
    page_title: Option<String>,
    /// Show the header cart button and the floating cart.
    #[prop(default = true)]
    show_cart: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] header_class: String,
    #[prop(optional, into)] footer_class: String,
    #[prop(optional)] layout: PageLayout,
) -> impl IntoView {
    let config = use_store_config();

    view! {
        <div class=format!("storefront {}", class)>
            <StoreHeader
                config=config.clone()
                show_cart=show_cart
                page_title=page_title
                class=header_class
            />
            <main class=layout.main_class()>{children()}</main>
            <StoreFooter config=config class=footer_class/>
            {show_cart.then(|| view! { <FloatingCart/> })}
        </div>
    }
}

#[component]
fn StoreHeader(
    config: StoreConfig,
    show_cart: bool,
    page_title: Option<String>,
    class: String,
) -> impl IntoView {
    let badge_cap = config.cart.badge_cap;
    let nav = config
        .nav
        .into_iter()
        .map(|link| {
            view! {
                <A href=link.href>
                    <span class="nav-link">{link.label}</span>
                </A>
            }
        })
        .collect_view();

    view! {
        <header class=format!("site-header {}", class)>
            <div class="container header-row">
                <A href="/">
                    <span class="brand">
                        <span class="brand-mark">
                            <Icon kind=IconKind::Package/>
                        </span>
                        <span class="brand-text">
                            <strong>{config.brand.name}</strong>
                            <small>{config.brand.tagline}</small>
                        </span>
                    </span>
                </A>

                <nav class="main-nav">{nav}</nav>

                {show_cart.then(|| view! { <CartButton badge_cap=badge_cap/> })}
            </div>

            {page_title.map(|title| view! {
                <div class="container page-title">
                    <h1>{title}</h1>
                </div>
            })}
        </header>
    }
}

#[component]
fn CartButton(badge_cap: u32) -> impl IntoView {
    let cart = use_cart();
    let ui = use_cart_ui();

    view! {
        <button
            class="cart-button"
            aria-label="Abrir carrito"
            on:click=move |_| ui.open_cart()
        >
            <Icon kind=IconKind::ShoppingCart/>
            {move || {
                cart_badge(cart.total_items(), badge_cap)
                    .map(|label| view! { <span class="cart-badge">{label}</span> })
            }}
        </button>
    }
}

#[component]
fn StoreFooter(config: StoreConfig, class: String) -> impl IntoView {
    let footer = config.footer;
    let columns = footer
        .columns
        .into_iter()
        .map(|column| view! { <FooterLinks column=column/> })
        .collect_view();
    let legal = footer
        .legal
        .into_iter()
        .map(|item| view! { <FooterEntry item=item/> })
        .collect_view();

    view! {
        <footer class=format!("site-footer {}", class)>
            <div class="container footer-grid">
                <div class="footer-brand">
                    <div class="brand">
                        <span class="brand-mark">
                            <Icon kind=IconKind::Package/>
                        </span>
                        <span class="brand-text">
                            <strong>{config.brand.name}</strong>
                            <small>{config.brand.footer_tagline}</small>
                        </span>
                    </div>
                    <p>{config.brand.blurb}</p>
                </div>
                {columns}
            </div>

            <div class="container footer-bottom">
                <p>{footer.copyright}</p>
                <div class="footer-legal">{legal}</div>
            </div>
        </footer>
    }
}

#[component]
fn FooterLinks(column: FooterColumn) -> impl IntoView {
    let items = column
        .items
        .into_iter()
        .map(|item| view! { <li><FooterEntry item=item/></li> })
        .collect_view();

    view! {
        <div class="footer-column">
            <h4>{column.title}</h4>
            <ul>{items}</ul>
        </div>
    }
}

/// A routed link, or plain text for items without a destination.
#[component]
fn FooterEntry(item: FooterItem) -> impl IntoView {
    match item.href {
        Some(href) => view! {
            <A href=href>
                <span class="footer-link">{item.label}</span>
            </A>
        }
        .into_any(),
        None => view! { <p class="footer-text">{item.label}</p> }.into_any(),
    }
}
