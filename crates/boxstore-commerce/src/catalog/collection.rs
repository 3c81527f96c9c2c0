//! Collections group products into browsable categories.

use crate::ids::CollectionId;
use serde::{Deserialize, Serialize};

/// A named grouping of products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Unique collection identifier.
    pub id: CollectionId,
    /// Collection name.
    pub name: String,
    /// Collection description.
    #[serde(default)]
    pub description: Option<String>,
    /// Collection image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Sort order position.
    #[serde(default)]
    pub position: i32,
}

impl Collection {
    /// Create a collection with no description or image.
    pub fn new(id: impl Into<CollectionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            image_url: None,
            position: 0,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
