// crates/petstore-contract/src/schema.rs
// ============================================================================
// Module: Pet Wire Schema
// Description: JSON Schema for the Pet payload shape.
// Purpose: Provide a single schema used for response-shape validation.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Draft 2020-12 JSON Schema describing the `Pet` wire shape. The conformance
//! suite compiles this schema to validate response bodies wherever a body
//! shape is asserted, instead of re-stating field checks per case.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Schema
// ============================================================================

/// Returns the JSON Schema for the `Pet` wire shape.
#[must_use]
pub fn pet_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "https://petstore.invalid/schemas/pet.json",
        "title": "Pet",
        "type": "object",
        "required": ["id", "name", "photoUrls"],
        "properties": {
            "id": {
                "type": "integer",
                "minimum": 0,
                "maximum": u64::MAX,
            },
            "category": {"$ref": "#/$defs/category"},
            "name": {"type": "string"},
            "photoUrls": {
                "type": "array",
                "items": {"type": "string"},
            },
            "tags": {
                "type": "array",
                "items": {"$ref": "#/$defs/tag"},
            },
            "status": {"enum": ["available", "pending", "sold", ""]},
        },
        "$defs": {
            "category": {
                "type": "object",
                "required": ["id", "name"],
                "properties": {
                    "id": {"type": "integer", "minimum": 0},
                    "name": {"type": "string"},
                },
            },
            "tag": {
                "type": "object",
                "required": ["id", "name"],
                "properties": {
                    "id": {"type": "integer", "minimum": 0},
                    "name": {"type": "string"},
                },
            },
        },
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
