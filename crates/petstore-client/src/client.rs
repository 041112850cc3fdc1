// crates/petstore-client/src/client.rs
// ============================================================================
// Module: Pet Store HTTP Client
// Description: Request execution and transcript capture for pet operations.
// Purpose: Provide typed and raw-JSON access to the five pet endpoints.
// Dependencies: petstore-contract, reqwest, serde, url
// ============================================================================

//! ## Overview
//! Request execution for the five pet endpoints. Typed methods serialize
//! contract types; `_raw` variants accept arbitrary JSON payloads or path
//! segments so conformance cases can exercise invalid inputs. Every call is
//! recorded into a shared transcript for artifact output. No retries: a send
//! failure is reported once and fails the call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use petstore_contract::Pet;
use petstore_contract::PetStatus;
use reqwest::Client;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors produced by the Pet Store client.
///
/// Transport failures indicate service unavailability and are distinct from
/// any expectation mismatch a caller derives from an [`ApiOutcome`].
#[derive(Debug, Error)]
pub enum PetStoreClientError {
    /// Client configuration error.
    #[error("pet store client config error: {0}")]
    Config(String),
    /// Transport failure (connect error, timeout, interrupted body).
    #[error("pet store transport error: {0}")]
    Transport(String),
    /// JSON serialization failure or malformed response body.
    #[error("pet store json error: {0}")]
    Json(String),
}

// ============================================================================
// SECTION: Types
// ============================================================================

/// Recorded request/response pair for one pet operation.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// 1-based sequence number within the client transcript.
    pub sequence: u64,
    /// HTTP method issued.
    pub method: String,
    /// Request path relative to the base URL.
    pub path: String,
    /// Request payload, or `Value::Null` when the call carried no body.
    pub request: Value,
    /// Response status code when a response arrived.
    pub status: Option<u16>,
    /// Response body, or `Value::Null` when empty or absent.
    pub response: Value,
    /// Transport or decode error message when the call failed.
    pub error: Option<String>,
}

/// Status/body envelope returned by every pet operation.
///
/// Non-2xx statuses are data here: conformance cases assert on expected
/// failure codes, so the client never maps them to errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiOutcome {
    /// HTTP status code of the response.
    pub status: u16,
    /// Parsed response body, or `None` when the body was empty.
    pub body: Option<Value>,
}

impl ApiOutcome {
    /// Looks up a body value by JSON pointer (for example `/category/id`).
    #[must_use]
    pub fn field(&self, pointer: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.pointer(pointer))
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Pet Store HTTP client with transcript capture.
#[derive(Debug, Clone)]
pub struct PetStoreClient {
    base_url: String,
    client: Client,
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl PetStoreClient {
    /// Creates a client for the target base URL with an explicit timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PetStoreClientError::Config`] when the base URL is not a
    /// valid `http`/`https` URL or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PetStoreClientError> {
        let parsed = Url::parse(base_url)
            .map_err(|err| PetStoreClientError::Config(format!("invalid base url: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PetStoreClientError::Config(format!(
                "unsupported base url scheme: {}",
                parsed.scheme()
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PetStoreClientError::Config(format!("failed to build http client: {err}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            transcript: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a snapshot of the transcript entries.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Creates a pet (`POST /pet`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed response body.
    pub async fn create_pet(&self, pet: &Pet) -> Result<ApiOutcome, PetStoreClientError> {
        let payload = to_payload(pet)?;
        self.create_pet_raw(&payload).await
    }

    /// Creates a pet from an arbitrary JSON payload (`POST /pet`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed response body.
    pub async fn create_pet_raw(&self, payload: &Value) -> Result<ApiOutcome, PetStoreClientError> {
        self.execute(Method::POST, "/pet", Some(payload)).await
    }

    /// Updates a pet (`PUT /pet`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed response body.
    pub async fn update_pet(&self, pet: &Pet) -> Result<ApiOutcome, PetStoreClientError> {
        let payload = to_payload(pet)?;
        self.update_pet_raw(&payload).await
    }

    /// Updates a pet from an arbitrary JSON payload (`PUT /pet`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed response body.
    pub async fn update_pet_raw(&self, payload: &Value) -> Result<ApiOutcome, PetStoreClientError> {
        self.execute(Method::PUT, "/pet", Some(payload)).await
    }

    /// Fetches a pet by id (`GET /pet/{petId}`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed response body.
    pub async fn fetch_pet(&self, pet_id: u64) -> Result<ApiOutcome, PetStoreClientError> {
        self.fetch_pet_raw(&pet_id.to_string()).await
    }

    /// Fetches a pet by a raw path identifier (`GET /pet/{petId}`).
    ///
    /// The identifier is used verbatim, so cases can send negative or
    /// non-numeric values.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed response body.
    pub async fn fetch_pet_raw(&self, pet_id: &str) -> Result<ApiOutcome, PetStoreClientError> {
        self.execute(Method::GET, &format!("/pet/{pet_id}"), None).await
    }

    /// Deletes a pet by id (`DELETE /pet/{petId}`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed response body.
    pub async fn delete_pet(&self, pet_id: u64) -> Result<ApiOutcome, PetStoreClientError> {
        self.delete_pet_raw(&pet_id.to_string()).await
    }

    /// Deletes a pet by a raw path identifier (`DELETE /pet/{petId}`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed response body.
    pub async fn delete_pet_raw(&self, pet_id: &str) -> Result<ApiOutcome, PetStoreClientError> {
        self.execute(Method::DELETE, &format!("/pet/{pet_id}"), None).await
    }

    /// Searches pets by status (`GET /pet/findByStatus`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed response body.
    pub async fn find_by_status(&self, status: PetStatus) -> Result<ApiOutcome, PetStoreClientError> {
        let filter = json!({"status": status.as_str()});
        self.find_by_status_raw(&filter).await
    }

    /// Searches pets with an arbitrary JSON status filter.
    ///
    /// The filter is carried as the request body per the service contract,
    /// which lets cases send non-string filter values.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a malformed response body.
    pub async fn find_by_status_raw(&self, filter: &Value) -> Result<ApiOutcome, PetStoreClientError> {
        self.execute(Method::GET, "/pet/findByStatus", Some(filter)).await
    }

    /// Performs one round trip and records it into the transcript.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<ApiOutcome, PetStoreClientError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.request(method.clone(), url.as_str());
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let kind = if err.is_timeout() { "timed out" } else { "failed" };
                let message = format!("{method} {path} {kind}: {err}");
                self.record(&method, path, payload, None, Value::Null, Some(message.clone()));
                return Err(PetStoreClientError::Transport(message));
            }
        };

        let status = response.status().as_u16();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                let message = format!("{method} {path} body read failed: {err}");
                self.record(&method, path, payload, Some(status), Value::Null, Some(message.clone()));
                return Err(PetStoreClientError::Transport(message));
            }
        };

        let body = if bytes.is_empty() {
            None
        } else {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(value) => Some(value),
                Err(err) => {
                    let message = format!("{method} {path} returned a malformed body: {err}");
                    self.record(&method, path, payload, Some(status), Value::Null, Some(message.clone()));
                    return Err(PetStoreClientError::Json(message));
                }
            }
        };

        self.record(&method, path, payload, Some(status), body.clone().unwrap_or(Value::Null), None);
        Ok(ApiOutcome {
            status,
            body,
        })
    }

    /// Appends one transcript entry; a poisoned lock drops the entry.
    fn record(
        &self,
        method: &Method,
        path: &str,
        request: Option<&Value>,
        status: Option<u16>,
        response: Value,
        error: Option<String>,
    ) {
        let Ok(mut guard) = self.transcript.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        guard.push(TranscriptEntry {
            sequence,
            method: method.to_string(),
            path: path.to_string(),
            request: request.cloned().unwrap_or(Value::Null),
            status,
            response,
            error,
        });
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Serializes a contract type into a JSON payload.
fn to_payload<T: Serialize>(value: &T) -> Result<Value, PetStoreClientError> {
    serde_json::to_value(value)
        .map_err(|err| PetStoreClientError::Json(format!("payload serialization failed: {err}")))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
