use thiserror::Error;

/// Errors returned by the announce and scrape handlers.
///
/// The display text is what the client receives as `failure reason`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("{0}")]
    BadRequest(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("encoding failed: {0}")]
    Encoding(String),
}
