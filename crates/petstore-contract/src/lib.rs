// crates/petstore-contract/src/lib.rs
// ============================================================================
// Module: Pet Store Contract
// Description: Shared data model and wire schema for the Pet Store API.
// Purpose: Provide canonical shapes for payload building and response checks.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This crate defines the typed wire shapes for the external Pet Store HTTP
//! API: the `Pet` entity with its nested `Category` and `Tag` references, the
//! closed `PetStatus` value set, and the JSON Schema describing the `Pet`
//! payload. The status set is declared exactly once here so that valid-case
//! payloads and invalid-case payloads are derived from the same source.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod schema;
mod types;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use types::Category;
pub use types::Pet;
pub use types::PetStatus;
pub use types::Tag;
