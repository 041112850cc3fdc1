// crates/petstore-contract/src/types.rs
// ============================================================================
// Module: Pet Store Types
// Description: Typed wire shapes for the Pet Store API.
// Purpose: Provide canonical Pet, Category, Tag, and status types.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Typed wire shapes for the Pet Store API. Field names follow the service
//! contract (`photoUrls` on the wire), and optional fields are omitted from
//! serialized payloads when unset so that minimal payloads stay minimal.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Status
// ============================================================================

/// Status values accepted by the Pet Store service.
///
/// # Invariants
/// - Wire strings are stable: `available`, `pending`, `sold`, and the empty
///   string for [`PetStatus::Unspecified`].
/// - Only [`PetStatus::SEARCHABLE`] values are legal search filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    /// Pet is available for purchase.
    Available,
    /// Pet is pending a sale.
    Pending,
    /// Pet has been sold.
    Sold,
    /// Status was supplied as the empty string.
    #[serde(rename = "")]
    Unspecified,
}

impl PetStatus {
    /// Status values the service accepts as search filters.
    pub const SEARCHABLE: [Self; 3] = [Self::Available, Self::Pending, Self::Sold];

    /// Returns the canonical wire string for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
            Self::Unspecified => "",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Nested References
// ============================================================================

/// Category reference attached to a pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub id: u64,
    /// Category display name.
    pub name: String,
}

impl Category {
    /// Creates a category reference.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Tag reference attached to a pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag identifier.
    pub id: u64,
    /// Tag display name.
    pub name: String,
}

impl Tag {
    /// Creates a tag reference.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// ============================================================================
// SECTION: Pet
// ============================================================================

/// Pet entity as carried on the wire.
///
/// # Invariants
/// - `id` is bounded to the unsigned 64-bit range by the service contract.
/// - `id`, `name`, and `photo_urls` are required by the service; the
///   remaining fields are optional and omitted from payloads when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Pet identifier.
    pub id: u64,
    /// Optional category reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Pet display name.
    pub name: String,
    /// Ordered photo URL strings.
    #[serde(rename = "photoUrls")]
    pub photo_urls: Vec<String>,
    /// Optional tag references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Optional status value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
}

impl Pet {
    /// Creates a pet with only the required fields set.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, photo_urls: Vec<String>) -> Self {
        Self {
            id,
            category: None,
            name: name.into(),
            photo_urls,
            tags: None,
            status: None,
        }
    }

    /// Attaches a category reference.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Attaches tag references.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Attaches a status value.
    #[must_use]
    pub fn with_status(mut self, status: PetStatus) -> Self {
        self.status = Some(status);
        self
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
