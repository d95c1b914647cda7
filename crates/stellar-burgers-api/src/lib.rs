// crates/stellar-burgers-api/src/lib.rs
// ============================================================================
// Module: Stellar Burgers API Driver Library
// Description: Request/assertion driver for the Stellar Burgers HTTP API.
// Purpose: Send documented requests and verify their observable contracts.
// Dependencies: reqwest, serde, serde_json, jsonschema, thiserror, tracing
// ============================================================================

//! ## Overview
//! This crate drives the Stellar Burgers REST API through its documented
//! request/response cycles. [`ApiClient`] issues one blocking HTTP call per
//! operation and returns an [`ApiResponse`] that can be checked against an
//! [`Expectation`]. [`TestAccount`] scopes the lifetime of a throwaway remote
//! account so it is deleted on every exit path.
//! Invariants:
//! - Request bodies are built from plain structs with known JSON shapes.
//! - Credentials are sent verbatim as the `Authorization` header value.
//! - Accounts provisioned through [`TestAccount`] are deleted on drop.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod account;
pub mod client;
pub mod contract;
pub mod credential;
pub mod error;
pub mod models;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use account::AccountSpec;
pub use account::AccountState;
pub use account::DEFAULT_DELETE_STATUS;
pub use account::TestAccount;
pub use account::unique_email;
pub use client::ApiClient;
pub use client::ApiResponse;
pub use client::DEFAULT_BASE_URL;
pub use client::TranscriptEntry;
pub use contract::ContractViolation;
pub use contract::Expectation;
pub use contract::expectations;
pub use contract::messages;
pub use credential::Credential;
pub use error::ApiError;
pub use models::AccountField;
pub use models::AuthResponse;
pub use models::ErrorBody;
pub use models::IngredientId;
pub use models::LoginRequest;
pub use models::Operation;
pub use models::OrderCreated;
pub use models::OrderList;
pub use models::OrderRecord;
pub use models::OrderRequest;
pub use models::ProfileResponse;
pub use models::ProfileUpdate;
pub use models::RegisterRequest;
pub use models::UserView;
pub use schema::ResponseSchemas;
pub use schema::SchemaKind;
