// crates/stellar-burgers-api/src/contract.rs
// ============================================================================
// Module: Response Contracts
// Description: Expected status/body contracts for API responses.
// Purpose: Verify observed responses and report the first mismatch.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! An [`Expectation`] pins the status code and a handful of JSON fields
//! (addressed by JSON pointer) that a response must carry. Verification stops
//! at the first mismatch and reports it as a [`ContractViolation`].
//! [`expectations`] holds the canned contracts of every documented operation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::models::Operation;
use crate::schema;
use crate::schema::SchemaKind;

// ============================================================================
// SECTION: Messages
// ============================================================================

/// Failure messages the service returns verbatim.
pub mod messages {
    /// Duplicate registration.
    pub const USER_ALREADY_EXISTS: &str = "User already exists";
    /// Registration with a missing field.
    pub const REQUIRED_FIELDS: &str = "Email, password and name are required fields";
    /// Login mismatch; identical for bad email and bad password.
    pub const INCORRECT_CREDENTIALS: &str = "email or password are incorrect";
    /// Missing or invalid bearer credential.
    pub const UNAUTHORISED: &str = "You should be authorised";
    /// Order without ingredients.
    pub const INGREDIENTS_REQUIRED: &str = "Ingredient ids must be provided";
}

// ============================================================================
// SECTION: Violations
// ============================================================================

/// First observed mismatch between a response and its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// Status code differs.
    #[error("{operation}: expected status {expected}, got {actual} (body: {body})")]
    Status {
        /// Operation label.
        operation: &'static str,
        /// Expected status.
        expected: u16,
        /// Observed status.
        actual: u16,
        /// Raw body for diagnostics.
        body: String,
    },
    /// A field holds a different value.
    #[error("{operation}: field {pointer} expected {expected}, got {actual}")]
    Field {
        /// Operation label.
        operation: &'static str,
        /// JSON pointer of the field.
        pointer: String,
        /// Expected JSON value.
        expected: String,
        /// Observed JSON value.
        actual: String,
    },
    /// A field is absent or null.
    #[error("{operation}: field {pointer} is missing or null")]
    MissingField {
        /// Operation label.
        operation: &'static str,
        /// JSON pointer of the field.
        pointer: String,
    },
    /// The body does not satisfy the response schema.
    #[error("{operation}: body violates {schema} schema: {details}")]
    Schema {
        /// Operation label.
        operation: &'static str,
        /// Schema label.
        schema: &'static str,
        /// Joined validator messages.
        details: String,
    },
}

// ============================================================================
// SECTION: Expectation
// ============================================================================

/// Single field assertion.
#[derive(Debug, Clone, PartialEq)]
enum FieldCheck {
    /// Field equals the value.
    Equals {
        /// JSON pointer.
        pointer: String,
        /// Expected value.
        value: Value,
    },
    /// Field exists and is not null.
    Present {
        /// JSON pointer.
        pointer: String,
    },
}

/// Expected response contract: status code plus body checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Expectation {
    /// Expected status code.
    status: u16,
    /// Field checks in evaluation order.
    checks: Vec<FieldCheck>,
    /// Optional schema the body must satisfy.
    schema: Option<SchemaKind>,
}

impl Expectation {
    /// Starts an expectation for the given status code.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self {
            status,
            checks: Vec::new(),
            schema: None,
        }
    }

    /// Requires `success` to equal the flag.
    #[must_use]
    pub fn success(self, flag: bool) -> Self {
        self.field("/success", Value::Bool(flag))
    }

    /// Requires `message` to equal the text.
    #[must_use]
    pub fn message(self, text: &str) -> Self {
        self.field("/message", Value::String(text.to_string()))
    }

    /// Requires the field at `pointer` to equal `value`.
    #[must_use]
    pub fn field(mut self, pointer: &str, value: impl Into<Value>) -> Self {
        self.checks.push(FieldCheck::Equals {
            pointer: pointer.to_string(),
            value: value.into(),
        });
        self
    }

    /// Requires the field at `pointer` to be present and non-null.
    #[must_use]
    pub fn present(mut self, pointer: &str) -> Self {
        self.checks.push(FieldCheck::Present {
            pointer: pointer.to_string(),
        });
        self
    }

    /// Requires the body to satisfy a response schema.
    #[must_use]
    pub const fn schema(mut self, kind: SchemaKind) -> Self {
        self.schema = Some(kind);
        self
    }

    /// Verifies an observed response.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContractViolation`] found: status, then field
    /// checks in insertion order, then the schema.
    pub fn verify(
        &self,
        operation: Operation,
        status: u16,
        body: &Value,
        raw: &str,
    ) -> Result<(), ContractViolation> {
        let label = operation.as_str();
        if status != self.status {
            return Err(ContractViolation::Status {
                operation: label,
                expected: self.status,
                actual: status,
                body: raw.to_string(),
            });
        }
        for check in &self.checks {
            match check {
                FieldCheck::Equals {
                    pointer,
                    value,
                } => {
                    let actual = body.pointer(pointer);
                    if actual != Some(value) {
                        return Err(ContractViolation::Field {
                            operation: label,
                            pointer: pointer.clone(),
                            expected: value.to_string(),
                            actual: actual.map_or_else(|| "<absent>".to_string(), Value::to_string),
                        });
                    }
                }
                FieldCheck::Present {
                    pointer,
                } => {
                    if body.pointer(pointer).is_none_or(Value::is_null) {
                        return Err(ContractViolation::MissingField {
                            operation: label,
                            pointer: pointer.clone(),
                        });
                    }
                }
            }
        }
        if let Some(kind) = self.schema {
            schema::check(operation, kind, body)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Canned Contracts
// ============================================================================

/// Documented contracts for each operation and failure mode.
pub mod expectations {
    use super::Expectation;
    use super::messages;
    use crate::schema::SchemaKind;

    /// Successful registration.
    #[must_use]
    pub fn registered() -> Expectation {
        Expectation::status(200).success(true).present("/accessToken").schema(SchemaKind::Auth)
    }

    /// Registration with an email that already exists.
    #[must_use]
    pub fn duplicate_user() -> Expectation {
        Expectation::status(403)
            .success(false)
            .message(messages::USER_ALREADY_EXISTS)
            .schema(SchemaKind::Error)
    }

    /// Registration with a missing field, whichever it is.
    #[must_use]
    pub fn missing_required_field() -> Expectation {
        Expectation::status(403)
            .success(false)
            .message(messages::REQUIRED_FIELDS)
            .schema(SchemaKind::Error)
    }

    /// Successful login echoing the account email.
    #[must_use]
    pub fn logged_in(email: &str) -> Expectation {
        Expectation::status(200)
            .success(true)
            .field("/user/email", email)
            .present("/accessToken")
            .schema(SchemaKind::Auth)
    }

    /// Login rejected without revealing which field was wrong.
    #[must_use]
    pub fn incorrect_credentials() -> Expectation {
        Expectation::status(401)
            .success(false)
            .message(messages::INCORRECT_CREDENTIALS)
            .schema(SchemaKind::Error)
    }

    /// Successful profile update.
    #[must_use]
    pub fn profile_updated() -> Expectation {
        Expectation::status(200).success(true).schema(SchemaKind::Profile)
    }

    /// Authenticated call made without a valid credential.
    #[must_use]
    pub fn unauthorised() -> Expectation {
        Expectation::status(401)
            .success(false)
            .message(messages::UNAUTHORISED)
            .schema(SchemaKind::Error)
    }

    /// Successful order creation.
    #[must_use]
    pub fn order_created() -> Expectation {
        Expectation::status(200).success(true).schema(SchemaKind::OrderCreated)
    }

    /// Order without ingredients.
    #[must_use]
    pub fn ingredients_required() -> Expectation {
        Expectation::status(400)
            .success(false)
            .message(messages::INGREDIENTS_REQUIRED)
            .schema(SchemaKind::Error)
    }

    /// Order with an ingredient id the service cannot resolve.
    #[must_use]
    pub const fn unknown_ingredient() -> Expectation {
        Expectation::status(500)
    }

    /// Successful order listing.
    #[must_use]
    pub fn orders_listed() -> Expectation {
        Expectation::status(200).success(true).present("/orders").schema(SchemaKind::OrderList)
    }

    /// Account deletion with the configured status.
    #[must_use]
    pub fn account_deleted(status: u16) -> Expectation {
        Expectation::status(status)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[path = "contract_tests.rs"]
mod tests;
