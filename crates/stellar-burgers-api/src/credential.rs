// crates/stellar-burgers-api/src/credential.rs
// ============================================================================
// Module: Bearer Credential
// Description: Opaque access token returned by register and login.
// Purpose: Carry the token into authenticated calls without leaking it in logs.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The service returns an `accessToken` string that already carries its
//! `Bearer ` prefix. [`Credential`] keeps that string opaque and sends it as
//! the raw `Authorization` header value.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Opaque bearer credential bound to one test account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wraps a raw credential string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the header value sent with authenticated requests.
    #[must_use]
    pub fn header_value(&self) -> &str {
        &self.0
    }

    /// Returns true when the credential carries no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&redacted(&self.0)).finish()
    }
}

/// Keeps the scheme and the first characters of a token for log correlation.
fn redacted(raw: &str) -> String {
    let (scheme, token) = raw.split_once(' ').unwrap_or(("", raw));
    let visible: String = token.chars().take(6).collect();
    if scheme.is_empty() { format!("{visible}…") } else { format!("{scheme} {visible}…") }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[path = "credential_tests.rs"]
mod tests;
