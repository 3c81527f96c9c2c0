//! Store configuration.
//!
//! Every section has a default, so a config file only needs the keys it
//! overrides. `StoreConfig::default()` is the BoxStore storefront itself.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of placeholder tiles shown while products load.
pub const DEFAULT_SKELETON_TILES: usize = 8;

/// Default cart badge cap.
pub const DEFAULT_BADGE_CAP: u32 = 99;

/// Storefront configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Brand mark and copy.
    #[serde(default)]
    pub brand: BrandConfig,

    /// Primary navigation links.
    #[serde(default = "default_nav")]
    pub nav: Vec<NavLink>,

    /// Footer columns and legal notice.
    #[serde(default)]
    pub footer: FooterConfig,

    /// Catalog display settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Cart display settings.
    #[serde(default)]
    pub cart: CartConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            brand: BrandConfig::default(),
            nav: default_nav(),
            footer: FooterConfig::default(),
            catalog: CatalogConfig::default(),
            cart: CartConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Parse and validate a TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file, picking the format from the extension.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            Self::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Check values the views rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brand.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "brand.name",
                reason: "must not be empty".to_string(),
            });
        }

        if self.catalog.skeleton_tiles == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.skeleton_tiles",
                reason: "must be at least 1".to_string(),
            });
        }

        let code = &self.catalog.currency;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidValue {
                field: "catalog.currency",
                reason: format!("'{}' is not a currency code", code),
            });
        }

        if self.cart.badge_cap == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cart.badge_cap",
                reason: "must be at least 1".to_string(),
            });
        }

        for link in &self.nav {
            if !link.href.starts_with('/') && !link.href.starts_with("http") {
                return Err(ConfigError::InvalidValue {
                    field: "nav.href",
                    reason: format!("'{}' is neither a path nor a URL", link.href),
                });
            }
        }

        Ok(())
    }
}

/// Brand mark and copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    /// Store name shown in header and footer.
    pub name: String,
    /// Short line under the header brand mark.
    #[serde(default)]
    pub tagline: String,
    /// Line under the footer brand mark.
    #[serde(default)]
    pub footer_tagline: String,
    /// Footer paragraph.
    #[serde(default)]
    pub blurb: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "BoxStore".to_string(),
            tagline: "Cajas de Cartón".to_string(),
            footer_tagline: "Cajas de Cartón Profesionales".to_string(),
            blurb: "Especialistas en soluciones de embalaje desde 2014. Ofrecemos cajas de \
                    cartón de alta calidad para mudanzas, envíos y almacenamiento."
                .to_string(),
        }
    }
}

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

fn default_nav() -> Vec<NavLink> {
    vec![NavLink::new("Inicio", "/"), NavLink::new("Blog", "/blog")]
}

/// A footer entry. Without `href` it renders as inert text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl FooterItem {
    /// An item with no route yet.
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }
}

/// A titled column of footer items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FooterItem>,
}

/// Footer content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterConfig {
    #[serde(default)]
    pub columns: Vec<FooterColumn>,
    /// Copyright line, printed as-is.
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub legal: Vec<FooterItem>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                FooterColumn {
                    title: "Productos".to_string(),
                    items: vec![
                        FooterItem::text("Cajas de Mudanza"),
                        FooterItem::text("Cajas de Envío"),
                        FooterItem::text("Cajas de Almacenamiento"),
                        FooterItem::text("Cajas Industriales"),
                    ],
                },
                FooterColumn {
                    title: "Soporte".to_string(),
                    items: vec![
                        FooterItem::link("Blog", "/blog"),
                        FooterItem::text("Contacto"),
                        FooterItem::text("Envíos"),
                        FooterItem::text("Devoluciones"),
                    ],
                },
            ],
            copyright: "© 2024 BoxStore. Todos los derechos reservados.".to_string(),
            legal: vec![
                FooterItem::text("Política de Privacidad"),
                FooterItem::text("Términos de Servicio"),
            ],
        }
    }
}

/// Catalog display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// ISO currency code for prices and the cart.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Placeholder tiles shown while products load.
    #[serde(default = "default_skeleton_tiles")]
    pub skeleton_tiles: usize,
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_skeleton_tiles() -> usize {
    DEFAULT_SKELETON_TILES
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            skeleton_tiles: DEFAULT_SKELETON_TILES,
        }
    }
}

/// Cart display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Counts above this print as "{cap}+".
    #[serde(default = "default_badge_cap")]
    pub badge_cap: u32,
}

fn default_badge_cap() -> u32 {
    DEFAULT_BADGE_CAP
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            badge_cap: DEFAULT_BADGE_CAP,
        }
    }
}
