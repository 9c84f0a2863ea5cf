use thiserror::Error;

/// Errors from the Kodi HTTP client.
#[derive(Debug, Error)]
pub enum KodiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}
