//! Product and collection cards.

use boxstore_commerce::catalog::{Collection, Product};
use leptos::prelude::*;

use crate::cart::use_cart_writer;
use crate::components::{Icon, IconKind};

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let writer = use_cart_writer();
    let (feedback, set_feedback) = signal(None::<String>);

    let available = product.is_available();
    let price = product.price.display();
    let compare_at = product.discounted_from().map(|m| m.display());
    let image = product.image_url.clone();
    let title = product.title.clone();
    let description = product.description.clone().unwrap_or_default();
    let product = StoredValue::new(product);

    let add_to_cart = move |_| {
        let outcome = product.with_value(|p| writer.add(p, 1));
        set_feedback.set(match outcome {
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        });
    };

    view! {
        <article class="product-card">
            <div class="product-image">
                {match image {
                    Some(src) => view! { <img src=src alt=title.clone() loading="lazy"/> }.into_any(),
                    None => view! {
                        <div class="image-placeholder">
                            <Icon kind=IconKind::Package/>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
            <div class="product-body">
                <h3>{title}</h3>
                <p class="product-description">{description}</p>
                <div class="product-footer">
                    <div class="price">
                        <span class="price-current">{price}</span>
                        {compare_at.map(|old| view! { <s class="price-compare">{old}</s> })}
                    </div>
                    <button class="btn" disabled=!available on:click=add_to_cart>
                        {if available { "Añadir" } else { "Agotado" }}
                    </button>
                </div>
                {move || feedback.get().map(|msg| view! { <p class="card-error">{msg}</p> })}
            </div>
        </article>
    }
}

#[component]
pub fn CollectionCard(
    collection: Collection,
    /// Invoked with this card's collection when "Ver productos" is clicked.
    on_view_products: Callback<Collection>,
) -> impl IntoView {
    let name = collection.name.clone();
    let description = collection.description.clone().unwrap_or_default();
    let image = collection.image_url.clone();
    let collection = StoredValue::new(collection);

    view! {
        <article class="collection-card">
            <div class="collection-image">
                {match image {
                    Some(src) => view! { <img src=src alt=name.clone() loading="lazy"/> }.into_any(),
                    None => view! {
                        <div class="image-placeholder">
                            <Icon kind=IconKind::Package/>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
            <div class="collection-body">
                <h3>{name}</h3>
                <p>{description}</p>
                <button
                    class="btn-outline"
                    on:click=move |_| on_view_products.run(collection.get_value())
                >
                    "Ver productos"
                </button>
            </div>
        </article>
    }
}
