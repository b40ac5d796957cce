//! Step 3: descriptive content.

use serde::{Deserialize, Serialize};

use crate::ids::SpecEntryId;

/// Maximum number of specification rows.
pub const MAX_SPECIFICATIONS: usize = 50;

/// A key/value specification row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Specification {
    /// Unique row identifier.
    pub id: SpecEntryId,
    /// Attribute name (e.g. "Material").
    pub key: String,
    /// Attribute value (e.g. "Cotton").
    pub value: String,
}

/// Step 3 of the listing draft: highlights, description, specs, notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentInfo {
    /// Bullet-point highlights, in display order.
    pub highlights: Vec<String>,
    /// Full free-text description.
    pub full_description: String,
    /// Specification rows, in display order. Duplicate keys are allowed.
    pub specifications: Vec<Specification>,
    /// Free-text notes from the seller to the marketplace.
    pub seller_notes: Vec<String>,
}

impl ContentInfo {
    /// Append a highlight line; blank lines are ignored.
    pub fn add_highlight(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.trim().is_empty() {
            return false;
        }
        self.highlights.push(text);
        true
    }

    /// Remove a highlight by position.
    pub fn remove_highlight(&mut self, index: usize) -> bool {
        if index < self.highlights.len() {
            self.highlights.remove(index);
            true
        } else {
            false
        }
    }

    /// Append a specification row.
    ///
    /// Refused when the table already holds [`MAX_SPECIFICATIONS`] rows or
    /// either side is blank. Duplicate keys are not rejected.
    pub fn add_specification(
        &mut self,
        id: SpecEntryId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<SpecEntryId> {
        let key = key.into();
        let value = value.into();
        if self.specifications.len() >= MAX_SPECIFICATIONS
            || key.trim().is_empty()
            || value.trim().is_empty()
        {
            return None;
        }
        self.specifications.push(Specification {
            id: id.clone(),
            key,
            value,
        });
        Some(id)
    }

    /// Remove a specification row by id.
    pub fn remove_specification(&mut self, id: &SpecEntryId) -> bool {
        let len_before = self.specifications.len();
        self.specifications.retain(|s| &s.id != id);
        self.specifications.len() < len_before
    }

    /// Append a seller note; blank notes are ignored.
    pub fn add_note(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.trim().is_empty() {
            return false;
        }
        self.seller_notes.push(text);
        true
    }

    /// Remove a seller note by position.
    pub fn remove_note(&mut self, index: usize) -> bool {
        if index < self.seller_notes.len() {
            self.seller_notes.remove(index);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_id(n: u64) -> SpecEntryId {
        SpecEntryId::new(format!("spec-{}", n))
    }

    #[test]
    fn test_highlights() {
        let mut content = ContentInfo::default();
        assert!(content.add_highlight("Water resistant"));
        assert!(!content.add_highlight("   "));
        assert_eq!(content.highlights.len(), 1);

        assert!(content.remove_highlight(0));
        assert!(!content.remove_highlight(0));
    }

    #[test]
    fn test_specifications() {
        let mut content = ContentInfo::default();
        let added = content.add_specification(spec_id(1), "Material", "Cotton");
        assert!(added.is_some());

        // Duplicate keys are allowed
        assert!(content
            .add_specification(spec_id(2), "Material", "Polyester")
            .is_some());
        assert_eq!(content.specifications.len(), 2);

        // Blank sides are refused
        assert!(content.add_specification(spec_id(3), "", "x").is_none());
        assert!(content.add_specification(spec_id(4), "x", " ").is_none());
    }

    #[test]
    fn test_specification_cap() {
        let mut content = ContentInfo::default();
        for n in 0..MAX_SPECIFICATIONS as u64 {
            assert!(content
                .add_specification(spec_id(n), format!("key-{}", n), "value")
                .is_some());
        }
        assert!(content
            .add_specification(spec_id(999), "overflow", "value")
            .is_none());
        assert_eq!(content.specifications.len(), MAX_SPECIFICATIONS);
    }

    #[test]
    fn test_remove_specification() {
        let mut content = ContentInfo::default();
        content.add_specification(spec_id(1), "Material", "Cotton");
        assert!(content.remove_specification(&spec_id(1)));
        assert!(!content.remove_specification(&spec_id(1)));
    }

    #[test]
    fn test_notes() {
        let mut content = ContentInfo::default();
        assert!(content.add_note("Ships in plain packaging"));
        assert!(!content.add_note(""));
        assert!(content.remove_note(0));
        assert!(!content.remove_note(5));
    }
}
