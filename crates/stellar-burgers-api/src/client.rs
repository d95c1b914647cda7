// crates/stellar-burgers-api/src/client.rs
// ============================================================================
// Module: API Client
// Description: Blocking HTTP client for the Stellar Burgers REST API.
// Purpose: Send one request per documented operation and capture transcripts.
// Dependencies: reqwest, serde, serde_json, tracing, url
// ============================================================================

//! ## Overview
//! [`ApiClient`] maps each documented operation onto one blocking HTTP call.
//! Calls never retry; a transport failure is returned as-is. Every exchange is
//! appended to a shared transcript with passwords redacted.
//! Invariants:
//! - Credentials are sent verbatim as the `Authorization` header value.
//! - Non-JSON bodies (for example HTML error pages) decode to `null` while the
//!   raw text is kept for diagnostics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::contract::ContractViolation;
use crate::contract::Expectation;
use crate::credential::Credential;
use crate::error::ApiError;
use crate::models::LoginRequest;
use crate::models::Operation;
use crate::models::OrderRequest;
use crate::models::ProfileUpdate;
use crate::models::RegisterRequest;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Public Stellar Burgers deployment.
pub const DEFAULT_BASE_URL: &str = "https://stellarburgers.nomoreparties.site";

/// Placeholder written to transcripts in place of secrets.
const REDACTED: &str = "<redacted>";

// ============================================================================
// SECTION: Transcript
// ============================================================================

/// One recorded request/response exchange.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// 1-based position in the transcript.
    pub sequence: u64,
    /// Operation issued.
    pub operation: Operation,
    /// HTTP method.
    pub method: String,
    /// Request path.
    pub path: String,
    /// Whether an `Authorization` header was sent.
    pub authorized: bool,
    /// Request body with secrets redacted.
    pub request: Value,
    /// Response status, absent on transport failure.
    pub status: Option<u16>,
    /// Parsed response body.
    pub response: Value,
    /// Transport error, when the call failed.
    pub error: Option<String>,
}

// ============================================================================
// SECTION: Response
// ============================================================================

/// Observed response of one operation.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Operation that produced the response.
    operation: Operation,
    /// HTTP status code.
    status: u16,
    /// Parsed JSON body, `null` when the body is not JSON.
    body: Value,
    /// Raw body text.
    raw: String,
}

impl ApiResponse {
    /// Builds a response from its parts.
    #[must_use]
    pub fn new(operation: Operation, status: u16, raw: String) -> Self {
        let body = serde_json::from_str(&raw).unwrap_or(Value::Null);
        Self {
            operation,
            status,
            body,
            raw,
        }
    }

    /// Returns the operation.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the parsed body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Returns the raw body text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the `message` field, when present.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Returns the `accessToken` field as a credential, when present.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.body
            .get("accessToken")
            .and_then(Value::as_str)
            .map(Credential::new)
            .filter(|credential| !credential.is_empty())
    }

    /// Verifies the response against an expectation.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContractViolation`].
    pub fn expect(&self, expectation: &Expectation) -> Result<&Self, ContractViolation> {
        expectation.verify(self.operation, self.status, &self.body, &self.raw)?;
        Ok(self)
    }

    /// Decodes the body into a typed response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.raw).map_err(|err| ApiError::Decode {
            operation: self.operation.as_str(),
            status: self.status,
            message: err.to_string(),
        })
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Blocking Stellar Burgers API client with transcript capture.
#[derive(Clone)]
pub struct ApiClient {
    /// Base URL without a trailing slash.
    base_url: String,
    /// Underlying HTTP client.
    http: Client,
    /// Shared transcript across clones.
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl ApiClient {
    /// Creates a client for the base URL. `None` disables the request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::ClientBuild(err.to_string()))?;
        Self::with_client(base_url, http)
    }

    /// Creates a client from an existing reqwest client.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is invalid.
    pub fn with_client(base_url: &str, http: Client) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            http,
            transcript: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the full URL of an operation.
    #[must_use]
    pub fn endpoint(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    /// Returns a snapshot of the transcript.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Issues `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be encoded or sent.
    pub fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, ApiError> {
        self.send(Operation::Register, None, Some(encode(Operation::Register, request)?))
    }

    /// Issues `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be encoded or sent.
    pub fn login(&self, request: &LoginRequest) -> Result<ApiResponse, ApiError> {
        self.send(Operation::Login, None, Some(encode(Operation::Login, request)?))
    }

    /// Issues `PATCH /api/auth/user`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be encoded or sent.
    pub fn update_profile(
        &self,
        credential: Option<&Credential>,
        update: &ProfileUpdate,
    ) -> Result<ApiResponse, ApiError> {
        let body = encode(Operation::UpdateProfile, update)?;
        self.send(Operation::UpdateProfile, credential, Some(body))
    }

    /// Issues `POST /api/orders`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be encoded or sent.
    pub fn create_order(
        &self,
        credential: Option<&Credential>,
        order: &OrderRequest,
    ) -> Result<ApiResponse, ApiError> {
        let body = encode(Operation::CreateOrder, order)?;
        self.send(Operation::CreateOrder, credential, Some(body))
    }

    /// Issues `GET /api/orders`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be sent.
    pub fn list_orders(&self, credential: Option<&Credential>) -> Result<ApiResponse, ApiError> {
        self.send(Operation::ListOrders, credential, None)
    }

    /// Issues `DELETE /api/auth/user`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be sent.
    pub fn delete_account(&self, credential: &Credential) -> Result<ApiResponse, ApiError> {
        self.send(Operation::DeleteAccount, Some(credential), None)
    }

    /// Sends one request and records the exchange.
    fn send(
        &self,
        operation: Operation,
        credential: Option<&Credential>,
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        let mut request = self.http.request(operation.method(), self.endpoint(operation));
        if let Some(credential) = credential {
            request = request.header(AUTHORIZATION, credential.header_value());
        }
        if let Some(body) = &body {
            request = request.json(body);
        }
        let redacted_body = body.as_ref().map_or(Value::Null, redact_secrets);
        let authorized = credential.is_some();

        let outcome = request.send().and_then(|response| {
            let status = response.status().as_u16();
            response.text().map(|raw| (status, raw))
        });
        let (status, raw) = match outcome {
            Ok(parts) => parts,
            Err(err) => {
                let message = err.to_string();
                tracing::debug!(
                    operation = operation.as_str(),
                    error = %message,
                    "api call failed before a response"
                );
                self.record(
                    operation,
                    authorized,
                    redacted_body,
                    None,
                    Value::Null,
                    Some(message.clone()),
                );
                return Err(ApiError::Transport {
                    operation: operation.as_str(),
                    message,
                });
            }
        };

        let response = ApiResponse::new(operation, status, raw);
        tracing::debug!(
            operation = operation.as_str(),
            method = %operation.method(),
            path = operation.path(),
            status,
            "api call completed"
        );
        self.record(
            operation,
            authorized,
            redacted_body,
            Some(status),
            redact_secrets(response.body()),
            None,
        );
        Ok(response)
    }

    /// Appends an exchange to the transcript.
    fn record(
        &self,
        operation: Operation,
        authorized: bool,
        request: Value,
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
            operation,
            method: operation.method().to_string(),
            path: operation.path().to_string(),
            authorized,
            request,
            status,
            response,
            error,
        });
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates the base URL and strips trailing slashes.
fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let parsed = Url::parse(raw.trim())
        .map_err(|err| ApiError::InvalidBaseUrl(format!("{raw}: {err}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl(format!("{raw}: scheme must be http or https")));
    }
    if parsed.host_str().is_none() {
        return Err(ApiError::InvalidBaseUrl(format!("{raw}: missing host")));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ApiError::InvalidBaseUrl(format!("{raw}: query and fragment are not allowed")));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Serializes a request body.
fn encode<T: Serialize>(operation: Operation, value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|err| ApiError::Encode {
        operation: operation.as_str(),
        message: err.to_string(),
    })
}

/// Replaces password and token fields for transcript output.
fn redact_secrets(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, inner)| {
                    let redacted = match key.as_str() {
                        "password" | "accessToken" | "refreshToken" => {
                            Value::String(REDACTED.to_string())
                        }
                        _ => redact_secrets(inner),
                    };
                    (key.clone(), redacted)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(redact_secrets).collect()),
        other => other.clone(),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
