// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: stellar-burgers-api, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 and empty values fail closed. Unset values
//! fall back to the public service and a 202 delete status.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use stellar_burgers_api::DEFAULT_BASE_URL;
use stellar_burgers_api::DEFAULT_DELETE_STATUS;
use url::Url;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional service base URL override.
    BaseUrl,
    /// Optional per-request timeout in seconds (positive integer).
    TimeoutSeconds,
    /// Optional run root override.
    RunRoot,
    /// Optional expected delete-account status (2xx).
    DeleteStatus,
}

impl SystemTestEnv {
    /// All configuration keys.
    pub const ALL: [Self; 4] =
        [Self::BaseUrl, Self::TimeoutSeconds, Self::RunRoot, Self::DeleteStatus];

    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "STELLAR_BURGERS_SYSTEM_TEST_BASE_URL",
            Self::TimeoutSeconds => "STELLAR_BURGERS_SYSTEM_TEST_TIMEOUT_SEC",
            Self::RunRoot => "STELLAR_BURGERS_SYSTEM_TEST_RUN_ROOT",
            Self::DeleteStatus => "STELLAR_BURGERS_SYSTEM_TEST_DELETE_STATUS",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemTestConfig {
    /// Service base URL.
    pub base_url: String,
    /// Optional per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Optional run root override.
    pub run_root: Option<PathBuf>,
    /// Status the delete-account call must return.
    pub delete_status: u16,
}

impl Default for SystemTestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            run_root: None,
            delete_status: DEFAULT_DELETE_STATUS,
        }
    }
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, a non-http base URL, an invalid
    /// timeout, or a delete status outside 2xx).
    pub fn load() -> Result<Self, String> {
        let defaults = Self::default();
        let base_url = read_env_nonempty(SystemTestEnv::BaseUrl.as_str())?
            .map(|value| parse_base_url(SystemTestEnv::BaseUrl.as_str(), &value))
            .transpose()?
            .unwrap_or(defaults.base_url);
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let delete_status = read_env_nonempty(SystemTestEnv::DeleteStatus.as_str())?
            .map(|value| parse_delete_status(SystemTestEnv::DeleteStatus.as_str(), &value))
            .transpose()?
            .unwrap_or(defaults.delete_status);
        Ok(Self {
            base_url,
            timeout,
            run_root,
            delete_status,
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

/// Parses an absolute http(s) base URL.
///
/// # Errors
///
/// Returns an error when the value is not an absolute http or https URL.
fn parse_base_url(name: &str, raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|err| format!("{name} must be a valid URL: {err}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("{name} must use http or https"));
    }
    if url.host_str().is_none() {
        return Err(format!("{name} must include a host"));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
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

/// Parses a 2xx HTTP status code.
///
/// # Errors
///
/// Returns an error when the value is non-numeric or outside 200..=299.
fn parse_delete_status(name: &str, raw: &str) -> Result<u16, String> {
    let status: u16 =
        raw.trim().parse().map_err(|_| format!("{name} must be an HTTP status code"))?;
    if !(200..300).contains(&status) {
        return Err(format!("{name} must be a 2xx status, got {status}"));
    }
    Ok(status)
}
