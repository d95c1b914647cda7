// crates/stellar-burgers-api/src/schema.rs
// ============================================================================
// Module: Response Schemas
// Description: JSON Schema documents for Stellar Burgers response bodies.
// Purpose: Validate body shape in addition to pinned field values.
// Dependencies: jsonschema, serde_json
// ============================================================================

//! ## Overview
//! Each documented response shape has a Draft 2020-12 schema. Schemas require
//! the fields the contracts rely on and tolerate any extra properties the
//! service adds. Validators compile once per process.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

use jsonschema::Draft;
use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

use crate::contract::ContractViolation;
use crate::models::Operation;

// ============================================================================
// SECTION: Schema Kinds
// ============================================================================

/// Response shapes with a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// Register/login success.
    Auth,
    /// Profile update success.
    Profile,
    /// Order creation success.
    OrderCreated,
    /// Order listing success.
    OrderList,
    /// Any failure body with a message.
    Error,
}

impl SchemaKind {
    /// All schema kinds.
    pub const ALL: [Self; 5] =
        [Self::Auth, Self::Profile, Self::OrderCreated, Self::OrderList, Self::Error];

    /// Returns a stable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Profile => "profile",
            Self::OrderCreated => "order_created",
            Self::OrderList => "order_list",
            Self::Error => "error",
        }
    }

    /// Returns the schema document.
    #[must_use]
    pub fn document(self) -> Value {
        match self {
            Self::Auth => json!({
                "type": "object",
                "required": ["success", "user", "accessToken"],
                "properties": {
                    "success": { "const": true },
                    "user": user_schema(),
                    "accessToken": { "type": "string", "minLength": 1 },
                    "refreshToken": { "type": "string" }
                }
            }),
            Self::Profile => json!({
                "type": "object",
                "required": ["success", "user"],
                "properties": {
                    "success": { "const": true },
                    "user": user_schema()
                }
            }),
            Self::OrderCreated => json!({
                "type": "object",
                "required": ["success"],
                "properties": {
                    "success": { "const": true },
                    "name": { "type": "string" },
                    "order": {
                        "type": "object",
                        "required": ["number"],
                        "properties": { "number": { "type": "integer", "minimum": 0 } }
                    }
                }
            }),
            Self::OrderList => json!({
                "type": "object",
                "required": ["success", "orders"],
                "properties": {
                    "success": { "const": true },
                    "orders": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "ingredients": {
                                    "type": "array",
                                    "items": { "type": "string" }
                                },
                                "status": { "type": "string" },
                                "number": { "type": "integer" }
                            }
                        }
                    },
                    "total": { "type": "integer" },
                    "totalToday": { "type": "integer" }
                }
            }),
            Self::Error => json!({
                "type": "object",
                "required": ["message"],
                "properties": {
                    "success": { "const": false },
                    "message": { "type": "string" }
                }
            }),
        }
    }
}

/// Shared `user` object schema.
fn user_schema() -> Value {
    json!({
        "type": "object",
        "required": ["email", "name"],
        "properties": {
            "email": { "type": "string" },
            "name": { "type": "string" }
        }
    })
}

// ============================================================================
// SECTION: Compiled Schemas
// ============================================================================

/// Compiled validators for every [`SchemaKind`].
pub struct ResponseSchemas {
    /// Validators indexed in [`SchemaKind::ALL`] order.
    validators: Vec<(SchemaKind, Validator)>,
}

impl ResponseSchemas {
    /// Compiles every schema document.
    ///
    /// # Errors
    ///
    /// Returns an error message when a schema document fails to compile.
    pub fn compile() -> Result<Self, String> {
        let mut validators = Vec::with_capacity(SchemaKind::ALL.len());
        for kind in SchemaKind::ALL {
            let validator = jsonschema::options()
                .with_draft(Draft::Draft202012)
                .build(&kind.document())
                .map_err(|err| format!("{} schema failed to compile: {err}", kind.as_str()))?;
            validators.push((kind, validator));
        }
        Ok(Self {
            validators,
        })
    }

    /// Returns the process-wide compiled schemas.
    ///
    /// # Errors
    ///
    /// Returns the compile error recorded on first use.
    pub fn global() -> Result<&'static Self, String> {
        static SCHEMAS: OnceLock<Result<ResponseSchemas, String>> = OnceLock::new();
        SCHEMAS.get_or_init(Self::compile).as_ref().map_err(Clone::clone)
    }

    /// Returns every validation message for the body.
    #[must_use]
    pub fn errors(&self, kind: SchemaKind, body: &Value) -> Vec<String> {
        self.validators
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map_or_else(
                || vec![format!("no validator for {}", kind.as_str())],
                |(_, validator)| validator.iter_errors(body).map(|err| err.to_string()).collect(),
            )
    }
}

/// Validates a body against the global schema for `kind`.
///
/// # Errors
///
/// Returns [`ContractViolation::Schema`] when the body does not conform or the
/// schemas failed to compile.
pub fn check(operation: Operation, kind: SchemaKind, body: &Value) -> Result<(), ContractViolation> {
    let messages = match ResponseSchemas::global() {
        Ok(schemas) => schemas.errors(kind, body),
        Err(err) => vec![err],
    };
    if messages.is_empty() {
        return Ok(());
    }
    Err(ContractViolation::Schema {
        operation: operation.as_str(),
        schema: kind.as_str(),
        details: messages.join("; "),
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
