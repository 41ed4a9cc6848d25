use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::ApiClient;
use crate::api_error::ApiError;

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// JWT pair returned by `/login`. Only `access` gets persisted; the refresh
/// token is decoded and dropped, since the client does no token refresh.
#[derive(Debug, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: Option<String>,
}

/// What `/signup` echoes back for the created account.
#[derive(Debug, Deserialize)]
pub struct SignupReceipt {
    pub id: i64,
    pub username: String,
}

pub async fn signup(client: &ApiClient, creds: &Credentials) -> Result<SignupReceipt, ApiError> {
    client
        .post(
            "/signup",
            Some(json!({ "username": creds.username, "password": creds.password })),
        )
        .await
}

pub async fn login(client: &ApiClient, creds: &Credentials) -> Result<TokenPair, ApiError> {
    client
        .post(
            "/login",
            Some(json!({ "username": creds.username, "password": creds.password })),
        )
        .await
}
