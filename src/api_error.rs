use reqwest::StatusCode;
use std::fmt;

// Errors surfaced by the HTTP layer. `Request` is the server saying no: it
// carries the raw response body so callers can show the server's own message.
#[derive(Debug)]
pub enum ApiError {
    Request { status: StatusCode, message: String },

    // Wrap anyhow errors (transport, decode, persistence)
    Anyhow(anyhow::Error),
}

impl ApiError {
    /// HTTP status of a server-reported failure, if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            ApiError::Anyhow(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request { message, .. } => write!(f, "{}", message),
            ApiError::Anyhow(err) => write!(f, "{}", err),
        }
    }
}

// This enables using `?` on functions that return `Result<_, anyhow::Error>` to turn them into
// `Result<_, ApiError>`. That way you don't need to do that manually.
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        ApiError::Anyhow(err.into())
    }
}
