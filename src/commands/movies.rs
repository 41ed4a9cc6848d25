use crate::api::ApiClient;
use crate::api_error::ApiError;
use crate::models::movie::list_movies;
use crate::render::Renderer;

/// The movie grid: one card per movie with a book hint for its shows.
/// Fetch failures propagate to the caller.
pub async fn grid(client: &ApiClient, renderer: &Renderer) -> Result<String, ApiError> {
    let movies = list_movies(client).await?;
    Ok(renderer.movies(&movies)?)
}
