// crates/stellar-burgers-api/src/error.rs
// ============================================================================
// Module: API Driver Errors
// Description: Error taxonomy for the request/assertion driver.
// Purpose: Separate harness faults from expected contract failures.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! [`ApiError`] covers everything that stops a test: transport failures,
//! undecodable bodies, setup calls that did not succeed, teardown mismatches
//! and contract violations surfaced by [`crate::Expectation`].

use thiserror::Error;

use crate::contract::ContractViolation;

/// Errors raised by the API driver.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL could not be parsed or joined.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    /// HTTP client construction failed.
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
    /// Request body serialization failed.
    #[error("{operation} request serialization failed: {message}")]
    Encode {
        /// Operation label.
        operation: &'static str,
        /// Serializer message.
        message: String,
    },
    /// The request never produced a response.
    #[error("{operation} transport failure: {message}")]
    Transport {
        /// Operation label.
        operation: &'static str,
        /// Transport error message.
        message: String,
    },
    /// A response body did not match the requested type.
    #[error("{operation} response decode failed (status {status}): {message}")]
    Decode {
        /// Operation label.
        operation: &'static str,
        /// Observed status code.
        status: u16,
        /// Decoder message.
        message: String,
    },
    /// A setup call (register/login) did not succeed; the test cannot proceed.
    #[error("{operation} setup failed with status {status}: {body}")]
    Setup {
        /// Operation label.
        operation: &'static str,
        /// Observed status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// Account deletion did not return the expected status.
    #[error("account teardown expected status {expected}, got {actual}: {body}")]
    Teardown {
        /// Configured delete status.
        expected: u16,
        /// Observed status code.
        actual: u16,
        /// Raw response body.
        body: String,
    },
    /// A response broke its documented contract.
    #[error(transparent)]
    Contract(#[from] ContractViolation),
}
