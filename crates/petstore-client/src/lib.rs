// crates/petstore-client/src/lib.rs
// ============================================================================
// Module: Pet Store Client
// Description: HTTP client for the external Pet Store API.
// Purpose: Issue pet operations against a target base URL with transcripts.
// Dependencies: petstore-contract, reqwest, serde
// ============================================================================

//! ## Overview
//! HTTP client for the external Pet Store API. Each call performs exactly one
//! round trip with an explicit timeout and returns the status/body envelope,
//! so callers can assert on failure statuses as data rather than errors.
//! Transport failures (connect errors, timeouts, malformed bodies) surface as
//! typed errors distinct from any expectation checking done by callers.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod client;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use client::ApiOutcome;
pub use client::PetStoreClient;
pub use client::PetStoreClientError;
pub use client::TranscriptEntry;
