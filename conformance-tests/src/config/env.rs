// conformance-tests/src/config/env.rs
// ============================================================================
// Module: Conformance Test Environment
// Description: Environment-backed configuration for conformance tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8, empty values, and unparseable URLs or
//! timeouts fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for conformance test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConformanceEnv {
    /// Optional base URL of the external Pet Store target.
    TargetUrl,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Optional artifact run root override.
    RunRoot,
}

impl ConformanceEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TargetUrl => "PETSTORE_CONFORMANCE_TARGET_URL",
            Self::TimeoutSeconds => "PETSTORE_CONFORMANCE_TIMEOUT_SEC",
            Self::RunRoot => "PETSTORE_CONFORMANCE_RUN_ROOT",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed conformance test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConformanceConfig {
    /// Optional base URL of the external Pet Store target. When unset the
    /// suites run against the in-process reference stub.
    pub target_url: Option<String>,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
    /// Optional artifact run root override.
    pub run_root: Option<PathBuf>,
}

impl ConformanceConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (an unparseable target URL or an invalid
    /// timeout value).
    pub fn load() -> Result<Self, String> {
        let target_url = read_env_nonempty(ConformanceEnv::TargetUrl.as_str())?
            .map(|value| parse_target_url(ConformanceEnv::TargetUrl.as_str(), &value))
            .transpose()?;
        let timeout = read_env_nonempty(ConformanceEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(ConformanceEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let run_root = read_env_nonempty(ConformanceEnv::RunRoot.as_str())?.map(PathBuf::from);
        Ok(Self {
            target_url,
            timeout,
            run_root,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses and validates a target base URL from an environment variable.
///
/// # Errors
///
/// Returns an error when the value is not a valid `http`/`https` URL.
fn parse_target_url(name: &str, raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|err| format!("{name} is not a valid URL: {err}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("{name} must use the http or https scheme"));
    }
    Ok(trimmed.to_string())
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
