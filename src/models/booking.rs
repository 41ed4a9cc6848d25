use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::ApiClient;
use crate::api_error::ApiError;
use crate::models::show::Show;

pub const STATUS_BOOKED: &str = "booked";
pub const STATUS_CANCELLED: &str = "cancelled";

/// A reservation of one seat on one show. The status is authoritative on the
/// server and only displayed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub show: Show,
    pub seat_number: u32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CancelConfirmation {
    pub detail: String,
}

/// Reserves a seat. The seat number is sent as chosen; the server validates
/// range, double booking, and capacity.
pub async fn book_seat(
    client: &ApiClient,
    show_id: i64,
    seat_number: u32,
) -> Result<Booking, ApiError> {
    client
        .post(
            &format!("/shows/{}/book/", show_id),
            Some(json!({ "seat_number": seat_number })),
        )
        .await
}

/// The current user's bookings, newest first on the server.
pub async fn my_bookings(client: &ApiClient) -> Result<Vec<Booking>, ApiError> {
    client.get("/my-bookings/").await
}

pub async fn cancel_booking(
    client: &ApiClient,
    booking_id: i64,
) -> Result<CancelConfirmation, ApiError> {
    client
        .post(&format!("/bookings/{}/cancel/", booking_id), None)
        .await
}
