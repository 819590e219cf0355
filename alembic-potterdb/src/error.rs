use thiserror::Error;

#[derive(Debug, Error)]
pub enum PotterDbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
