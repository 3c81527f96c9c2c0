//! Inline SVG icons (Lucide outlines).

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Package,
    Truck,
    Shield,
    Star,
    Search,
    ShoppingCart,
    Close,
    Minus,
    Plus,
}

#[component]
pub fn Icon(kind: IconKind, #[prop(optional, into)] class: String) -> impl IntoView {
    let body = match kind {
        IconKind::Package => view! {
            <path d="m7.5 4.27 9 5.15"/>
            <path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"/>
            <path d="m3.3 7 8.7 5 8.7-5"/>
            <path d="M12 22V12"/>
        }
        .into_any(),
        IconKind::Truck => view! {
            <path d="M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2"/>
            <path d="M15 18H9"/>
            <path d="M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14"/>
            <circle cx="17" cy="18" r="2"/>
            <circle cx="7" cy="18" r="2"/>
        }
        .into_any(),
        IconKind::Shield => view! {
            <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>
        }
        .into_any(),
        IconKind::Star => view! {
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>
        }
        .into_any(),
        IconKind::Search => view! {
            <circle cx="11" cy="11" r="8"/>
            <path d="m21 21-4.3-4.3"/>
        }
        .into_any(),
        IconKind::ShoppingCart => view! {
            <circle cx="8" cy="21" r="1"/>
            <circle cx="19" cy="21" r="1"/>
            <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"/>
        }
        .into_any(),
        IconKind::Close => view! {
            <path d="M18 6 6 18"/>
            <path d="m6 6 12 12"/>
        }
        .into_any(),
        IconKind::Minus => view! { <path d="M5 12h14"/> }.into_any(),
        IconKind::Plus => view! {
            <path d="M5 12h14"/>
            <path d="M12 5v14"/>
        }
        .into_any(),
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=format!("icon {}", class)
        >
            {body}
        </svg>
    }
}
