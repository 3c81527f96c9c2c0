//! The storefront's shipped config must load through every entry point.

use boxstore_core::{StoreConfig, DEFAULT_BADGE_CAP, DEFAULT_SKELETON_TILES};

const STOREFRONT_CONFIG: &str = include_str!("../../../workloads/storefront/boxstore.toml");

fn storefront_config_path() -> String {
    format!(
        "{}/../../workloads/storefront/boxstore.toml",
        env!("CARGO_MANIFEST_DIR")
    )
}

#[test]
fn test_bundled_toml_parses() {
    let config = StoreConfig::from_toml_str(STOREFRONT_CONFIG).unwrap();
    assert_eq!(config.brand.name, "BoxStore");
    assert_eq!(config.catalog.skeleton_tiles, DEFAULT_SKELETON_TILES);
    assert_eq!(config.cart.badge_cap, DEFAULT_BADGE_CAP);
}

#[test]
fn test_bundled_toml_has_home_and_blog_links() {
    let config = StoreConfig::from_toml_str(STOREFRONT_CONFIG).unwrap();
    let hrefs: Vec<&str> = config.nav.iter().map(|l| l.href.as_str()).collect();
    assert_eq!(hrefs, vec!["/", "/blog"]);
}

#[test]
fn test_bundled_footer_placeholders_are_inert() {
    let config = StoreConfig::from_toml_str(STOREFRONT_CONFIG).unwrap();
    let links: Vec<&str> = config
        .footer
        .columns
        .iter()
        .flat_map(|c| &c.items)
        .filter(|item| item.is_link())
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(links, vec!["Blog"]);
    assert!(config.footer.legal.iter().all(|item| !item.is_link()));
}

#[test]
fn test_load_from_disk() {
    let config = StoreConfig::load(&storefront_config_path()).unwrap();
    assert_eq!(config, StoreConfig::default());
}

#[test]
fn test_load_missing_file_reports_path() {
    let err = StoreConfig::load("/nonexistent/boxstore.toml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/boxstore.toml"));
}

#[test]
fn test_json_round_trip_of_bundled_config() {
    let config = StoreConfig::from_toml_str(STOREFRONT_CONFIG).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(StoreConfig::from_json_str(&json).unwrap(), config);
}
