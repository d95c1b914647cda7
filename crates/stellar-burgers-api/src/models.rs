// crates/stellar-burgers-api/src/models.rs
// ============================================================================
// Module: API Models
// Description: Request and response shapes for the Stellar Burgers API.
// Purpose: Map plain structs to the JSON documents the service exchanges.
// Dependencies: reqwest, serde
// ============================================================================

//! ## Overview
//! Request bodies serialize to flat JSON objects; optional fields are omitted
//! when unset so "missing field" cases are expressed by leaving them out.
//! Response types are lenient about extra fields and decode only what the
//! contracts assert on.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;
use serde::Deserialize;
use serde::Serialize;

use crate::credential::Credential;

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Documented API operations exercised by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `POST /api/auth/register`.
    Register,
    /// `POST /api/auth/login`.
    Login,
    /// `PATCH /api/auth/user`.
    UpdateProfile,
    /// `POST /api/orders`.
    CreateOrder,
    /// `GET /api/orders`.
    ListOrders,
    /// `DELETE /api/auth/user`.
    DeleteAccount,
}

impl Operation {
    /// Returns a stable label for logs and transcripts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::UpdateProfile => "update_profile",
            Self::CreateOrder => "create_order",
            Self::ListOrders => "list_orders",
            Self::DeleteAccount => "delete_account",
        }
    }

    /// Returns the path relative to the service base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Register => "/api/auth/register",
            Self::Login => "/api/auth/login",
            Self::UpdateProfile | Self::DeleteAccount => "/api/auth/user",
            Self::CreateOrder | Self::ListOrders => "/api/orders",
        }
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Register | Self::Login | Self::CreateOrder => Method::POST,
            Self::UpdateProfile => Method::PATCH,
            Self::ListOrders => Method::GET,
            Self::DeleteAccount => Method::DELETE,
        }
    }
}

// ============================================================================
// SECTION: Requests
// ============================================================================

/// Registration field selector used to build "missing field" requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    /// The `email` field.
    Email,
    /// The `password` field.
    Password,
    /// The `name` field.
    Name,
}

impl AccountField {
    /// All registration fields in request order.
    pub const ALL: [Self; 3] = [Self::Email, Self::Password, Self::Name];

    /// Returns the JSON field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Name => "name",
        }
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    /// Account email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Account password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RegisterRequest {
    /// Builds a complete registration request.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
            name: Some(name.into()),
        }
    }

    /// Returns a copy of the request with one field left out.
    #[must_use]
    pub fn without(mut self, field: AccountField) -> Self {
        match field {
            AccountField::Email => self.email = None,
            AccountField::Password => self.password = None,
            AccountField::Name => self.name = None,
        }
        self
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl LoginRequest {
    /// Builds a login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `PATCH /api/auth/user`; any subset of fields may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the password.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// Opaque menu item identifier resolved server-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(String);

impl IngredientId {
    /// Wraps a raw ingredient hash.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw hash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    /// Ingredient identifiers; may be empty to exercise validation.
    pub ingredients: Vec<IngredientId>,
}

impl OrderRequest {
    /// Builds an order from raw ingredient hashes.
    #[must_use]
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(IngredientId::new).collect(),
        }
    }

    /// Builds an order with no ingredients.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ingredients: Vec::new(),
        }
    }
}

// ============================================================================
// SECTION: Responses
// ============================================================================

/// User fields echoed by auth and profile responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserView {
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
}

/// Success body of register and login.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Success flag.
    pub success: bool,
    /// Echoed user.
    pub user: UserView,
    /// Access credential.
    #[serde(rename = "accessToken")]
    pub access_token: Credential,
    /// Refresh token, when issued.
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
}

/// Success body of a profile update.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    /// Success flag.
    pub success: bool,
    /// Updated user.
    pub user: UserView,
}

/// Order number assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderNumber {
    /// Sequential order number.
    pub number: u64,
}

/// Success body of order creation.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreated {
    /// Success flag.
    pub success: bool,
    /// Burger name composed by the service.
    #[serde(default)]
    pub name: Option<String>,
    /// Assigned order number.
    #[serde(default)]
    pub order: Option<OrderNumber>,
}

/// One entry of an order listing.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    /// Server identifier.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Ingredients in the order.
    #[serde(default)]
    pub ingredients: Vec<IngredientId>,
    /// Order status label.
    #[serde(default)]
    pub status: Option<String>,
    /// Order number.
    #[serde(default)]
    pub number: Option<u64>,
}

/// Success body of `GET /api/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderList {
    /// Success flag.
    pub success: bool,
    /// Orders placed by the account.
    pub orders: Vec<OrderRecord>,
    /// Total order count across the service.
    #[serde(default)]
    pub total: Option<u64>,
    /// Orders placed today across the service.
    #[serde(rename = "totalToday", default)]
    pub total_today: Option<u64>,
}

/// Failure body shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    /// Always false on failures.
    #[serde(default)]
    pub success: bool,
    /// Human-readable failure message.
    pub message: String,
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
