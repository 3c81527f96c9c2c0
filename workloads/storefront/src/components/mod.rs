//! Storefront components.

mod cards;
mod home;
mod icons;
mod shell;

pub use cards::{CollectionCard, ProductCard};
pub use home::StorefrontHomeView;
pub use icons::{Icon, IconKind};
pub use shell::{PageLayout, StorefrontShell};
