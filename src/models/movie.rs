use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::api_error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub duration_minutes: u32,
}

/// Every movie currently on sale. Fetched fresh on each run, never cached.
pub async fn list_movies(client: &ApiClient) -> Result<Vec<Movie>, ApiError> {
    client.get("/movies/").await
}
