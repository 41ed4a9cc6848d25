use crate::api::ApiClient;
use crate::api_error::ApiError;
use crate::models::booking::book_seat;
use crate::models::show::list_shows;
use crate::render::Renderer;

pub enum BookOutcome {
    Booked(String),
    /// No token stored: nothing was sent, the user is told how to log in.
    LoginRequired(String),
}

/// The show list for one movie: date/time, screen, seat range, book hint.
/// Fetch failures propagate to the caller.
pub async fn list(
    client: &ApiClient,
    renderer: &Renderer,
    movie_id: i64,
) -> Result<String, ApiError> {
    let shows = list_shows(client, movie_id).await?;
    Ok(renderer.shows(&shows)?)
}

/// Books a seat on a show. Without a stored token no request is issued at
/// all. The seat number goes out as chosen; the server validates it.
pub async fn book(
    client: &ApiClient,
    renderer: &Renderer,
    show_id: i64,
    seat_number: u32,
) -> Result<BookOutcome, ApiError> {
    if !client.session().is_logged_in() {
        return Ok(BookOutcome::LoginRequired(renderer.login_required()));
    }
    let booking = book_seat(client, show_id, seat_number).await?;
    Ok(BookOutcome::Booked(renderer.booking_confirmation(&booking)?))
}
