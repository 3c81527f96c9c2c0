//! Newtype IDs for type-safe identifiers.
//!
//! Product and collection ids come from the catalog feed, so they are plain
//! strings wrapped to keep the two from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        /// A catalog identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CollectionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("caja-mudanza-m");
        assert_eq!(id.as_str(), "caja-mudanza-m");
    }

    #[test]
    fn test_id_from_str() {
        let id: CollectionId = "mudanza".into();
        assert_eq!(id.to_string(), "mudanza");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = CollectionId::new("envio");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"envio\"");

        let parsed: CollectionId = serde_json::from_str("\"envio\"").unwrap();
        assert_eq!(parsed, id);
    }
}
