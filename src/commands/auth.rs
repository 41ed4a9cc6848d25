use crate::api::ApiClient;
use crate::api_error::ApiError;
use crate::models::user::{login as post_login, signup as post_signup, Credentials};
use crate::render::Renderer;

pub const SIGNUP_SUCCESS: &str = "Signup successful. You can now login.";

pub enum AuthOutcome {
    Success(String),
    /// The server-provided message, rendered inline instead of propagating.
    Failure(String),
}

/// Creates the account. Success does NOT log the user in.
pub async fn signup(client: &ApiClient, creds: &Credentials) -> AuthOutcome {
    match post_signup(client, creds).await {
        Ok(_) => AuthOutcome::Success(SIGNUP_SUCCESS.to_string()),
        Err(err) => AuthOutcome::Failure(message_or(err, "Signup failed")),
    }
}

/// Logs in: persists the returned access token plus the submitted username,
/// then re-renders the auth indicator.
pub async fn login(
    client: &mut ApiClient,
    renderer: &Renderer,
    creds: &Credentials,
) -> Result<AuthOutcome, ApiError> {
    match post_login(client, creds).await {
        Ok(pair) => {
            client.session_mut().save(&pair.access, &creds.username)?;
            Ok(AuthOutcome::Success(renderer.status(client.session())?))
        }
        Err(err) => Ok(AuthOutcome::Failure(message_or(err, "Login failed"))),
    }
}

/// Drops the stored session and re-renders the auth indicator.
pub fn logout(client: &mut ApiClient, renderer: &Renderer) -> Result<String, ApiError> {
    client.session_mut().clear()?;
    Ok(renderer.status(client.session())?)
}

// The original fell back to a fixed label when the server message was blank.
fn message_or(err: ApiError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
