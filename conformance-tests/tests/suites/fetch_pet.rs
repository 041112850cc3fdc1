// conformance-tests/tests/suites/fetch_pet.rs
// ============================================================================
// Module: Fetch Pet Tests
// Description: Conformance cases for GET /pet/{petId}.
// Purpose: Ensure retrieval returns schema-valid pets and fails closed otherwise.
// Dependencies: conformance-tests helpers, jsonschema, petstore-contract
// ============================================================================

//! ## Overview
//! Conformance cases for `GET /pet/{petId}`. The happy path validates the
//! returned body against the Pet wire schema rather than re-stating field
//! checks. Malformed identifiers must answer 400 and unknown identifiers 404.

use helpers::artifacts::TestReporter;
use helpers::case::CaseExpectation;
use helpers::case::check_case;
use helpers::fixtures::NON_EXISTENT_PET_ID;
use helpers::fixtures::ensure_pet;
use helpers::fixtures::full_pet;
use helpers::readiness::wait_for_target_ready;
use helpers::target::resolve_target;
use helpers::timeouts::DEFAULT_REQUEST_TIMEOUT;
use jsonschema::Draft;
use jsonschema::Validator;
use petstore_contract::schema::pet_schema;
use serde_json::Value;

use crate::helpers;

/// Fixture id for the happy-path fetch case.
const FETCH_PET_ID: u64 = 334_441;

fn compile_pet_schema() -> Result<Validator, Box<dyn std::error::Error>> {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&pet_schema())
        .map_err(|err| err.to_string().into())
}

fn assert_matches_schema(
    validator: &Validator,
    instance: &Value,
    label: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let messages: Vec<String> =
        validator.iter_errors(instance).map(|err| err.to_string()).collect();
    if messages.is_empty() {
        Ok(())
    } else {
        Err(format!("schema validation failed ({label}): {}", messages.join("; ")).into())
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_existing_pet_returns_schema_valid_body() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("fetch_existing_pet_returns_schema_valid_body")?;
    let target = resolve_target().await?;
    let client = target.client(DEFAULT_REQUEST_TIMEOUT)?;
    wait_for_target_ready(&client, DEFAULT_REQUEST_TIMEOUT).await?;

    ensure_pet(&client, &full_pet(FETCH_PET_ID)).await?;
    let outcome = client.fetch_pet(FETCH_PET_ID).await?;
    check_case("fetch existing pet", &outcome, &CaseExpectation::status_with_body(200))?;

    let validator = compile_pet_schema()?;
    let Some(body) = outcome.body.as_ref() else {
        return Err("fetch existing pet: body vanished after presence check".into());
    };
    assert_matches_schema(&validator, body, "fetched pet")?;

    reporter.artifacts().write_json("http_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec!["fetch returned a schema-valid pet body".to_string()],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "http_transcript.json".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_unknown_pet_reports_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("fetch_unknown_pet_reports_not_found")?;
    let target = resolve_target().await?;
    let client = target.client(DEFAULT_REQUEST_TIMEOUT)?;
    wait_for_target_ready(&client, DEFAULT_REQUEST_TIMEOUT).await?;

    let outcome = client.fetch_pet(NON_EXISTENT_PET_ID).await?;
    check_case("fetch unknown pet", &outcome, &CaseExpectation::status(404))?;

    reporter.artifacts().write_json("http_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec!["fetch answered 404 for a never-created id".to_string()],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "http_transcript.json".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_negative_id_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("fetch_negative_id_is_rejected")?;
    let target = resolve_target().await?;
    let client = target.client(DEFAULT_REQUEST_TIMEOUT)?;
    wait_for_target_ready(&client, DEFAULT_REQUEST_TIMEOUT).await?;

    let outcome = client.fetch_pet_raw("-1").await?;
    check_case("fetch negative id", &outcome, &CaseExpectation::status(400))?;

    reporter.artifacts().write_json("http_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec!["fetch rejected a negative identifier".to_string()],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "http_transcript.json".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_non_numeric_id_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("fetch_non_numeric_id_is_rejected")?;
    let target = resolve_target().await?;
    let client = target.client(DEFAULT_REQUEST_TIMEOUT)?;
    wait_for_target_ready(&client, DEFAULT_REQUEST_TIMEOUT).await?;

    let outcome = client.fetch_pet_raw("abc").await?;
    check_case("fetch non-numeric id", &outcome, &CaseExpectation::status(400))?;

    reporter.artifacts().write_json("http_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec!["fetch rejected a non-numeric identifier".to_string()],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "http_transcript.json".to_string(),
        ],
    )?;
    drop(reporter);
    Ok(())
}
