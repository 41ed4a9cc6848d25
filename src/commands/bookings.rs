use crate::api::ApiClient;
use crate::api_error::ApiError;
use crate::models::booking::{cancel_booking, my_bookings};
use crate::render::Renderer;

/// The my-bookings list. Any fetch failure (typically an unauthenticated
/// request) renders the fixed placeholder row instead of propagating.
pub async fn list(client: &ApiClient, renderer: &Renderer) -> Result<String, ApiError> {
    match my_bookings(client).await {
        Ok(bookings) => Ok(renderer.bookings(&bookings)?),
        Err(err) => {
            tracing::debug!("bookings fetch failed: {}", err);
            Ok(renderer.bookings_placeholder())
        }
    }
}

/// Cancels one booking, then re-fetches and re-renders the whole list, the
/// way the original page reloaded itself. The cancel request itself
/// propagates failures.
pub async fn cancel(
    client: &ApiClient,
    renderer: &Renderer,
    booking_id: i64,
) -> Result<String, ApiError> {
    cancel_booking(client, booking_id).await?;
    list(client, renderer).await
}
