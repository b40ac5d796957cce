//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a VariantId where an OfferId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

// Define all ID types
define_id!(DraftId);
define_id!(ProductId);
define_id!(CategoryId);
define_id!(SubCategoryId);
define_id!(CountryId);
define_id!(VariantId);
define_id!(MediaId);
define_id!(SpecEntryId);
define_id!(DeliveryCountryId);
define_id!(OfferId);

/// Source of fresh identifiers for wizard-created records.
///
/// Every variant, media, specification, delivery-country, and offer id is
/// minted through one injected provider, so record creation can be made
/// deterministic under test.
pub trait IdProvider {
    /// Produce the next unique id string.
    fn next_id(&mut self) -> String;
}

/// Time-and-counter derived ids for production use.
#[derive(Debug, Default)]
pub struct SystemIds;

impl IdProvider for SystemIds {
    fn next_id(&mut self) -> String {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::time::{SystemTime, UNIX_EPOCH};

        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);

        // Combine timestamp with atomic counter for uniqueness
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

        // Also add memory address for extra entropy
        let ptr = Box::new(0u8);
        let addr = &*ptr as *const u8 as u64;

        let combined = timestamp as u64 ^ counter ^ addr;
        format!("{:x}", combined)
    }
}

/// Prefixed sequential ids, stable across runs.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Create a provider that yields `prefix-1`, `prefix-2`, ...
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = VariantId::new("var-123");
        assert_eq!(id.as_str(), "var-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: OfferId = "offer-456".into();
        assert_eq!(id.as_str(), "offer-456");
    }

    #[test]
    fn test_id_display() {
        let id = MediaId::new("media-789");
        assert_eq!(format!("{}", id), "media-789");
    }

    #[test]
    fn test_id_equality() {
        let id1 = ProductId::new("same");
        let id2 = ProductId::new("same");
        let id3 = ProductId::new("different");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_system_ids_unique() {
        let mut ids = SystemIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sequential_ids_deterministic() {
        let mut ids = SequentialIds::new("var");
        assert_eq!(ids.next_id(), "var-1");
        assert_eq!(ids.next_id(), "var-2");
        assert_eq!(ids.next_id(), "var-3");
    }
}
