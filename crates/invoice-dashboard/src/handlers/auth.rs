//! Sign-in handler.

use axum::{extract::State, response::Redirect, Form};

use crate::error::AppResult;
use crate::forms::RawLoginForm;
use crate::services::AuthService;

/// Page a successful sign-in lands on.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Sign in with email and password.
///
/// `POST /login`
///
/// - `303` to `/dashboard` on success
/// - `401 {"error": "Invalid credentials."}` on a credential mismatch
/// - `500 {"error": "Something went wrong."}` otherwise
pub async fn login(
    State(service): State<AuthService>,
    Form(form): Form<RawLoginForm>,
) -> AppResult<Redirect> {
    service.authenticate(form).await?;
    Ok(Redirect::to(DASHBOARD_PATH))
}
