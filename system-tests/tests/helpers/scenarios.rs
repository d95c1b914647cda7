// system-tests/tests/helpers/scenarios.rs
// ============================================================================
// Module: Contract Scenarios
// Description: One function per documented request/response contract.
// Purpose: Share scenario bodies between the live and offline suites.
// Dependencies: stellar-burgers-api
// ============================================================================

//! ## Overview
//! Every scenario provisions its own accounts through the [`TestContext`],
//! performs the action under test, checks the canned expectation, and tears
//! the accounts down. Returned notes end up in the test summary.

use stellar_burgers_api::AccountField;
use stellar_burgers_api::AccountSpec;
use stellar_burgers_api::ApiError;
use stellar_burgers_api::ApiResponse;
use stellar_burgers_api::AuthResponse;
use stellar_burgers_api::Credential;
use stellar_burgers_api::ErrorBody;
use stellar_burgers_api::OrderCreated;
use stellar_burgers_api::OrderList;
use stellar_burgers_api::OrderRequest;
use stellar_burgers_api::ProfileResponse;
use stellar_burgers_api::ProfileUpdate;
use stellar_burgers_api::TestAccount;
use stellar_burgers_api::expectations;
use stellar_burgers_api::unique_email;

use super::context::TestContext;
use super::context::TestError;

/// Ingredient id present on the live menu.
pub const KNOWN_INGREDIENT: &str = "61c0c5a71d1f82001bdaaa6d";
/// Id that resolves to no menu item.
pub const UNKNOWN_INGREDIENT: &str = "invalidIngredientHash";
/// Credential string the service cannot resolve.
pub const INVALID_CREDENTIAL: &str = "null";

/// Notes collected by a scenario.
pub type ScenarioResult = Result<Vec<String>, TestError>;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Takes ownership of an account a negative-path registration created anyway.
fn adopt_stray<'a>(
    ctx: &'a TestContext,
    spec: &AccountSpec,
    response: &ApiResponse,
) -> Option<TestAccount<'a>> {
    let credential = response.credential()?;
    tracing::warn!(email = %spec.email, "negative-path registration created an account");
    Some(TestAccount::adopt(ctx.client(), spec.clone(), credential, ctx.delete_status()))
}

/// Deletes the account and records the observed status.
fn teardown(account: TestAccount<'_>, notes: &mut Vec<String>) -> Result<(), ApiError> {
    let status = account.teardown()?;
    notes.push(format!("account deleted with status {status}"));
    Ok(())
}

/// Credentials an authenticated route must reject: none, and one the service
/// cannot resolve.
fn rejected_credentials() -> [(&'static str, Option<Credential>); 2] {
    [("no credential", None), ("invalid credential", Some(Credential::new(INVALID_CREDENTIAL)))]
}

/// Checks a 401 rejection and returns its decoded message.
fn expect_unauthorised(response: &ApiResponse) -> Result<String, TestError> {
    response.expect(&expectations::unauthorised())?;
    let body: ErrorBody = response.decode()?;
    Ok(body.message)
}

/// Builds an update that changes only `field`.
fn update_for(field: AccountField) -> ProfileUpdate {
    match field {
        AccountField::Email => ProfileUpdate::default().email(unique_email()),
        AccountField::Password => ProfileUpdate::default().password("newpassword"),
        AccountField::Name => ProfileUpdate::default().name("Updated User"),
    }
}

// ============================================================================
// SECTION: Registration
// ============================================================================

/// A fresh email registers and returns a credential.
pub fn register_unique_user(ctx: &TestContext) -> ScenarioResult {
    let spec = AccountSpec::generate();
    let response = ctx.client().register(&spec.register_request())?;
    let account = adopt_stray(ctx, &spec, &response);
    response.expect(
        &expectations::registered()
            .field("/user/email", spec.email.as_str())
            .field("/user/name", spec.name.as_str()),
    )?;
    let auth: AuthResponse = response.decode()?;
    let account = account.ok_or("registration returned no credential")?;
    let mut notes = vec![format!("registered {}", auth.user.email)];
    teardown(account, &mut notes)?;
    Ok(notes)
}

/// A second registration with the same email is rejected.
pub fn register_duplicate_user(ctx: &TestContext) -> ScenarioResult {
    let account = ctx.provision()?;
    let response = ctx.client().register(&account.spec().register_request())?;
    response.expect(&expectations::duplicate_user())?;
    let mut notes = vec!["duplicate registration rejected".to_string()];
    teardown(account, &mut notes)?;
    Ok(notes)
}

/// Registration without `field` is rejected with the shared message.
pub fn register_without_field(ctx: &TestContext, field: AccountField) -> ScenarioResult {
    let spec = AccountSpec::generate();
    let response = ctx.client().register(&spec.register_request().without(field))?;
    let _stray = adopt_stray(ctx, &spec, &response);
    response.expect(&expectations::missing_required_field())?;
    Ok(vec![format!("registration without {} rejected", field.as_str())])
}

// ============================================================================
// SECTION: Login
// ============================================================================

/// Valid credentials log in and echo the email.
pub fn login_valid_user(ctx: &TestContext) -> ScenarioResult {
    let account = ctx.provision()?;
    let response = ctx.client().login(&account.spec().login_request())?;
    response.expect(&expectations::logged_in(&account.spec().email))?;
    let mut notes = vec!["login accepted".to_string()];
    teardown(account, &mut notes)?;
    Ok(notes)
}

/// An unknown email is rejected with the generic message.
pub fn login_wrong_email(ctx: &TestContext) -> ScenarioResult {
    let account = ctx.provision()?;
    let mut request = account.spec().login_request();
    request.email = unique_email();
    ctx.client().login(&request)?.expect(&expectations::incorrect_credentials())?;
    let mut notes = vec!["login with unknown email rejected".to_string()];
    teardown(account, &mut notes)?;
    Ok(notes)
}

/// A wrong password is rejected with the same generic message.
pub fn login_wrong_password(ctx: &TestContext) -> ScenarioResult {
    let account = ctx.provision()?;
    let mut request = account.spec().login_request();
    request.password = "wrongpassword".to_string();
    ctx.client().login(&request)?.expect(&expectations::incorrect_credentials())?;
    let mut notes = vec!["login with wrong password rejected".to_string()];
    teardown(account, &mut notes)?;
    Ok(notes)
}

// ============================================================================
// SECTION: Profile
// ============================================================================

/// An authenticated update of `field` succeeds and later logins see it.
pub fn update_profile_authorised(ctx: &TestContext, field: AccountField) -> ScenarioResult {
    let mut account = ctx.provision_authenticated()?;
    let update = update_for(field);
    let response = ctx.client().update_profile(account.credential(), &update)?;
    let mut expectation = expectations::profile_updated();
    if let Some(name) = &update.name {
        expectation = expectation.field("/user/name", name.as_str());
    }
    if let Some(email) = &update.email {
        expectation = expectation.field("/user/email", email.as_str());
    }
    response.expect(&expectation)?;
    let updated: ProfileResponse = response.decode()?;
    account.record_profile_change(&update);

    let login = ctx.client().login(&account.spec().login_request())?;
    login.expect(&expectations::logged_in(&account.spec().email))?;
    let mut notes =
        vec![format!("profile {} updated for {}", field.as_str(), updated.user.email)];
    teardown(account, &mut notes)?;
    Ok(notes)
}

/// An update of `field` without a valid credential is rejected.
pub fn update_profile_unauthorised(ctx: &TestContext, field: AccountField) -> ScenarioResult {
    let account = ctx.provision()?;
    let mut notes = Vec::new();
    for (label, credential) in rejected_credentials() {
        let response = ctx.client().update_profile(credential.as_ref(), &update_for(field))?;
        let message = expect_unauthorised(&response)?;
        notes.push(format!("{} update with {label} rejected: {message}", field.as_str()));
    }
    teardown(account, &mut notes)?;
    Ok(notes)
}

// ============================================================================
// SECTION: Orders
// ============================================================================

/// An authenticated order with a known ingredient succeeds.
pub fn create_order_authorised(ctx: &TestContext) -> ScenarioResult {
    let account = ctx.provision_authenticated()?;
    let response =
        ctx.client().create_order(account.credential(), &OrderRequest::new([KNOWN_INGREDIENT]))?;
    response.expect(&expectations::order_created())?;
    let created: OrderCreated = response.decode()?;
    let mut notes = Vec::new();
    if let Some(order) = created.order {
        notes.push(format!("order {} created", order.number));
    }
    teardown(account, &mut notes)?;
    Ok(notes)
}

/// An order without a valid credential is rejected whatever it contains.
pub fn create_order_unauthorised(ctx: &TestContext) -> ScenarioResult {
    let mut notes = Vec::new();
    for (label, credential) in rejected_credentials() {
        for order in [OrderRequest::new([KNOWN_INGREDIENT]), OrderRequest::empty()] {
            expect_unauthorised(&ctx.client().create_order(credential.as_ref(), &order)?)?;
        }
        notes.push(format!("orders with {label} rejected"));
    }
    Ok(notes)
}

/// An order with no ingredients is rejected.
pub fn create_order_without_ingredients(ctx: &TestContext) -> ScenarioResult {
    let account = ctx.provision_authenticated()?;
    let response = ctx.client().create_order(account.credential(), &OrderRequest::empty())?;
    response.expect(&expectations::ingredients_required())?;
    let mut notes = vec!["empty order rejected".to_string()];
    teardown(account, &mut notes)?;
    Ok(notes)
}

/// An order with an unknown ingredient fails server-side.
pub fn create_order_unknown_ingredient(ctx: &TestContext) -> ScenarioResult {
    let account = ctx.provision_authenticated()?;
    let response =
        ctx.client().create_order(account.credential(), &OrderRequest::new([UNKNOWN_INGREDIENT]))?;
    response.expect(&expectations::unknown_ingredient())?;
    let mut notes = vec!["unknown ingredient produced a server error".to_string()];
    teardown(account, &mut notes)?;
    Ok(notes)
}

/// Orders placed by an account are listed for it.
pub fn list_orders_authorised(ctx: &TestContext) -> ScenarioResult {
    let account = ctx.provision_authenticated()?;
    ctx.client()
        .create_order(account.credential(), &OrderRequest::new([KNOWN_INGREDIENT]))?
        .expect(&expectations::order_created())?;
    let response = ctx.client().list_orders(account.credential())?;
    response.expect(&expectations::orders_listed())?;
    let listed: OrderList = response.decode()?;
    let mut notes = vec![format!("{} order(s) listed", listed.orders.len())];
    teardown(account, &mut notes)?;
    Ok(notes)
}

/// Listing orders without a valid credential is rejected.
pub fn list_orders_unauthorised(ctx: &TestContext) -> ScenarioResult {
    let mut notes = Vec::new();
    for (label, credential) in rejected_credentials() {
        let message = expect_unauthorised(&ctx.client().list_orders(credential.as_ref())?)?;
        notes.push(format!("order listing with {label} rejected: {message}"));
    }
    Ok(notes)
}

// ============================================================================
// SECTION: End To End
// ============================================================================

/// Register, log in, order one burger, delete.
pub fn register_login_order_delete(ctx: &TestContext) -> ScenarioResult {
    let account = ctx.provision()?;
    let email = account.spec().email.clone();
    let login = ctx.client().login(&account.spec().login_request())?;
    login.expect(&expectations::logged_in(&email))?;
    let credential = login.credential().ok_or("login returned no credential")?;
    ctx.client()
        .create_order(Some(&credential), &OrderRequest::new([KNOWN_INGREDIENT]))?
        .expect(&expectations::order_created())?;
    let mut notes = vec![format!("{email} placed an order")];
    teardown(account, &mut notes)?;
    Ok(notes)
}
