//! Login, signup and logout.
//!
//! These are the only flows that write the session token. Login stores it only
//! after the server answered `ok` with a non-empty token; any failure leaves the
//! session exactly as it was.

use store::{Session, TokenStore};

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::forms::{LoginForm, SignupForm};

/// Shown after signup when the server does not send its own message.
pub const SIGNUP_SUCCESS_FALLBACK: &str = "Account created successfully";

/// Validate, authenticate, and store the returned token.
pub async fn login<S: TokenStore>(
    client: &ApiClient,
    session: &Session<S>,
    form: &LoginForm,
) -> Result<(), ApiError> {
    let credentials = form.validate()?;
    let token = client.login(&credentials).await?;
    session.set_token(&token)?;
    tracing::info!("Logged in");
    Ok(())
}

/// Validate and create an account. Does not log the new user in.
///
/// Returns the message to show in the success notification.
pub async fn signup(client: &ApiClient, form: &SignupForm) -> Result<String, ApiError> {
    let user = form.validate()?;
    let message = client.create_user(&user).await?;
    tracing::info!("Account created");
    Ok(message.unwrap_or_else(|| SIGNUP_SUCCESS_FALLBACK.to_string()))
}

/// Forget the session token.
pub fn logout<S: TokenStore>(session: &Session<S>) -> Result<(), ApiError> {
    session.clear_token()?;
    tracing::info!("Logged out");
    Ok(())
}
