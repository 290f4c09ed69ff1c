use thiserror::Error;

/// Failure of a search round trip. None of these are fatal to the session.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not read response file: {0}")]
    Io(#[from] std::io::Error),

    /// The backend answered with `success=false`.
    #[error("{0}")]
    Rejected(String),
}
