// crates/stellar-burgers-api/src/account.rs
// ============================================================================
// Module: Scoped Test Accounts
// Description: Provisioning and guaranteed teardown of throwaway accounts.
// Purpose: Bound remote account growth by deleting on every exit path.
// Dependencies: rand, tracing
// ============================================================================

//! ## Overview
//! A [`TestAccount`] walks `Unregistered → Registered → Authenticated →
//! Deleted`. Provisioning failures are harness faults: the test stops before
//! the action under test. Teardown verifies the configured delete status;
//! when a test exits early (panic or `?`), `Drop` still deletes the account.
//! Invariants:
//! - An account holding a credential is deleted exactly once.
//! - Generated emails are unique within the process and salted across
//!   processes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use rand::Rng;

use crate::client::ApiClient;
use crate::contract::ContractViolation;
use crate::contract::expectations;
use crate::credential::Credential;
use crate::error::ApiError;
use crate::models::LoginRequest;
use crate::models::Operation;
use crate::models::ProfileUpdate;
use crate::models::RegisterRequest;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Delete-account status expected by most suites.
pub const DEFAULT_DELETE_STATUS: u16 = 202;
/// Default password for provisioned accounts.
pub const DEFAULT_PASSWORD: &str = "validpassword";
/// Default display name for provisioned accounts.
pub const DEFAULT_NAME: &str = "Valid User";

/// Process-local email sequence.
static EMAIL_SEQUENCE: AtomicU64 = AtomicU64::new(0);

// ============================================================================
// SECTION: Account Spec
// ============================================================================

/// Returns a fresh `user<ms>-<seq>-<salt>@example.com` address.
#[must_use]
pub fn unique_email() -> String {
    let millis = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
    let sequence = EMAIL_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let salt: u32 = rand::thread_rng().r#gen();
    format!("user{millis}-{sequence}-{salt:08x}@example.com")
}

/// Credentials and display name of a test account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSpec {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Display name.
    pub name: String,
}

impl AccountSpec {
    /// Builds a spec from explicit values.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    /// Builds a spec with a fresh email and the default password and name.
    #[must_use]
    pub fn generate() -> Self {
        Self::new(unique_email(), DEFAULT_PASSWORD, DEFAULT_NAME)
    }

    /// Returns the registration body for this account.
    #[must_use]
    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest::new(&self.email, &self.password, &self.name)
    }

    /// Returns the login body for this account.
    #[must_use]
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest::new(&self.email, &self.password)
    }
}

// ============================================================================
// SECTION: Account State
// ============================================================================

/// Lifecycle of a test account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    /// Not yet registered.
    Unregistered,
    /// Registered; holds the registration credential.
    Registered,
    /// Logged in; holds a login credential.
    Authenticated,
    /// Deleted on the remote service.
    Deleted,
}

// ============================================================================
// SECTION: Test Account
// ============================================================================

/// Remote account scoped to one test.
pub struct TestAccount<'a> {
    /// Client used for every account call.
    client: &'a ApiClient,
    /// Current credentials and name.
    spec: AccountSpec,
    /// Credential used for authenticated calls and teardown.
    credential: Option<Credential>,
    /// Lifecycle state.
    state: AccountState,
    /// Status the delete call must return.
    delete_status: u16,
    /// Status observed by the last delete attempt.
    observed_delete_status: Option<u16>,
}

impl<'a> TestAccount<'a> {
    /// Registers the account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Setup`] when registration does not return 200 with
    /// an access token, or a transport error.
    pub fn provision(
        client: &'a ApiClient,
        spec: AccountSpec,
        delete_status: u16,
    ) -> Result<Self, ApiError> {
        let response = client.register(&spec.register_request())?;
        let credential = match response.credential() {
            Some(credential) if response.status() == 200 => credential,
            _ => {
                return Err(ApiError::Setup {
                    operation: Operation::Register.as_str(),
                    status: response.status(),
                    body: response.raw().to_string(),
                });
            }
        };
        tracing::info!(email = %spec.email, "test account provisioned");
        Ok(Self {
            client,
            spec,
            credential: Some(credential),
            state: AccountState::Registered,
            delete_status,
            observed_delete_status: None,
        })
    }

    /// Takes ownership of an account created outside [`Self::provision`], for
    /// example by a negative-path registration that unexpectedly succeeded.
    #[must_use]
    pub fn adopt(
        client: &'a ApiClient,
        spec: AccountSpec,
        credential: Credential,
        delete_status: u16,
    ) -> Self {
        Self {
            client,
            spec,
            credential: Some(credential),
            state: AccountState::Registered,
            delete_status,
            observed_delete_status: None,
        }
    }

    /// Logs in and replaces the held credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Setup`] when login does not return 200 with an
    /// access token, or a transport error.
    pub fn authenticate(&mut self) -> Result<&Credential, ApiError> {
        let response = self.client.login(&self.spec.login_request())?;
        let credential = match response.credential() {
            Some(credential) if response.status() == 200 => credential,
            _ => {
                return Err(ApiError::Setup {
                    operation: Operation::Login.as_str(),
                    status: response.status(),
                    body: response.raw().to_string(),
                });
            }
        };
        self.state = AccountState::Authenticated;
        Ok(self.credential.insert(credential))
    }

    /// Returns the account spec.
    #[must_use]
    pub const fn spec(&self) -> &AccountSpec {
        &self.spec
    }

    /// Returns the current credential, absent once deleted.
    #[must_use]
    pub const fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> AccountState {
        self.state
    }

    /// Returns the configured delete status.
    #[must_use]
    pub const fn delete_status(&self) -> u16 {
        self.delete_status
    }

    /// Returns the status observed by the last delete attempt.
    #[must_use]
    pub const fn observed_delete_status(&self) -> Option<u16> {
        self.observed_delete_status
    }

    /// Applies a successful profile update to the local spec so later logins
    /// use the new credentials.
    pub fn record_profile_change(&mut self, update: &ProfileUpdate) {
        if let Some(name) = &update.name {
            self.spec.name.clone_from(name);
        }
        if let Some(email) = &update.email {
            self.spec.email.clone_from(email);
        }
        if let Some(password) = &update.password {
            self.spec.password.clone_from(password);
        }
    }

    /// Deletes the account and verifies the configured status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Teardown`] when the delete status differs from the
    /// configured one, [`ApiError::Contract`] for any other broken delete
    /// contract, or a transport error. The account counts as torn down either
    /// way.
    pub fn teardown(mut self) -> Result<u16, ApiError> {
        self.delete()
    }

    /// Issues the delete call once and moves to `Deleted`.
    fn delete(&mut self) -> Result<u16, ApiError> {
        let Some(credential) = self.credential.take() else {
            self.state = AccountState::Deleted;
            return Ok(self.observed_delete_status.unwrap_or(self.delete_status));
        };
        self.state = AccountState::Deleted;
        let response = self.client.delete_account(&credential)?;
        let status = response.status();
        self.observed_delete_status = Some(status);
        response.expect(&expectations::account_deleted(self.delete_status)).map_err(
            |violation| match violation {
                ContractViolation::Status {
                    expected,
                    actual,
                    body,
                    ..
                } => ApiError::Teardown {
                    expected,
                    actual,
                    body,
                },
                other => ApiError::Contract(other),
            },
        )?;
        tracing::info!(email = %self.spec.email, status, "test account deleted");
        Ok(status)
    }
}

impl Drop for TestAccount<'_> {
    fn drop(&mut self) {
        if self.credential.is_none() {
            return;
        }
        let unwinding = std::thread::panicking();
        if let Err(err) = self.delete() {
            tracing::warn!(
                email = %self.spec.email,
                unwinding,
                error = %err,
                "test account cleanup on drop failed"
            );
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[path = "account_tests.rs"]
mod tests;
