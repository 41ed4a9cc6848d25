use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::api_error::ApiError;
use crate::models::movie::Movie;

/// A scheduled screening of a movie at a given date/time and screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub movie: Movie,
    pub screen_name: String,
    pub date_time: DateTime<Utc>,
    pub total_seats: u32,
}

/// Shows for one movie, ordered by date/time on the server.
pub async fn list_shows(client: &ApiClient, movie_id: i64) -> Result<Vec<Show>, ApiError> {
    client.get(&format!("/movies/{}/shows/", movie_id)).await
}
