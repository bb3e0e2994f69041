use thiserror::Error;

/// Everything that can go wrong between the search form and the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The backend could not be reached at all.
    #[error("Cannot reach the server. Check that the backend ({base_url}) is running.")]
    Network { base_url: String },

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("{0}")]
    Transport(String),

    /// Cancelled because a newer request replaced it.
    #[error("Request was cancelled")]
    Aborted,
}
