//! Catalog entry types.
//!
//! An [`Entry`] is the only persisted entity: a named instrument with a
//! description and a display image. Entries are created from a [`NewEntry`],
//! which carries the field limits the store enforces.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Maximum length of an entry name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Maximum length of an image reference, in characters.
pub const MAX_IMAGE_REFERENCE_CHARS: usize = 300;

// ============================================================================
// EntryId
// ============================================================================

/// Store-assigned identifier of an entry.
///
/// Assigned once on creation and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    /// Creates an entry ID from its raw value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntryId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EntryId> for i64 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

impl std::str::FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

// ============================================================================
// Entry
// ============================================================================

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier.
    pub id: EntryId,
    /// Unique display name.
    pub name: String,
    /// Full description text.
    pub description: String,
    /// Address or path of the display image.
    pub image_reference: String,
}

// ============================================================================
// NewEntry
// ============================================================================

/// Field values for an entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Unique display name.
    pub name: String,
    /// Full description text.
    pub description: String,
    /// Address or path of the display image.
    pub image_reference: String,
}

impl NewEntry {
    /// Creates a new, unvalidated entry.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image_reference: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_reference: image_reference.into(),
        }
    }

    /// Checks that every field is non-blank and within its length limit.
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name, Some(MAX_NAME_CHARS))?;
        require_text("description", &self.description, None)?;
        require_text(
            "image_reference",
            &self.image_reference,
            Some(MAX_IMAGE_REFERENCE_CHARS),
        )?;
        Ok(())
    }

    /// Attaches a store-assigned ID.
    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry {
            id,
            name: self.name,
            description: self.description,
            image_reference: self.image_reference,
        }
    }
}

fn require_text(field: &'static str, value: &str, max_chars: Option<usize>) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    if let Some(max) = max_chars {
        let len = value.chars().count();
        if len > max {
            return Err(Error::validation(
                field,
                format!("must be at most {max} characters (got {len})"),
            ));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn angklung() -> NewEntry {
        NewEntry::new("Angklung", "Bamboo tubes.", "https://example.org/a.png")
    }

    #[test]
    fn test_entry_id_display_and_parse() {
        let id = EntryId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<EntryId>().unwrap(), id);
        assert!("abc".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_entry_id_serializes_as_number() {
        let json = serde_json::to_string(&EntryId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_validate_accepts_well_formed_entry() {
        assert!(angklung().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut entry = angklung();
        entry.name = "   ".to_string();
        let Err(Error::Validation { field, .. }) = entry.validate() else {
            unreachable!("Expected Validation error");
        };
        assert_eq!(field, "name");

        let mut entry = angklung();
        entry.description = String::new();
        assert!(entry.validate().is_err());

        let mut entry = angklung();
        entry.image_reference = String::new();
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_validate_name_length_counts_characters() {
        let mut entry = angklung();
        entry.name = "é".repeat(MAX_NAME_CHARS);
        assert!(entry.validate().is_ok());

        entry.name.push('é');
        let err = entry.validate().unwrap_err();
        assert!(err.to_string().contains("at most 100"));
    }

    #[test]
    fn test_validate_image_reference_length() {
        let mut entry = angklung();
        entry.image_reference = "x".repeat(MAX_IMAGE_REFERENCE_CHARS + 1);
        let Err(Error::Validation { field, .. }) = entry.validate() else {
            unreachable!("Expected Validation error");
        };
        assert_eq!(field, "image_reference");
    }

    #[test]
    fn test_description_is_unbounded() {
        let mut entry = angklung();
        entry.description = "a".repeat(10_000);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_into_entry_keeps_fields() {
        let entry = angklung().into_entry(EntryId::new(1));
        assert_eq!(entry.id.get(), 1);
        assert_eq!(entry.name, "Angklung");
        assert_eq!(entry.image_reference, "https://example.org/a.png");
    }
}
