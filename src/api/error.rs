//! Error taxonomy for the prediction API boundary

use thiserror::Error;

/// Failure modes of a prediction request
///
/// Both variants are recovered at the submission boundary and shown to
/// the user as a single failure message; neither is fatal.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with an explicit `error` field
    #[error("{0}")]
    Application(String),
    /// Network failure, non-JSON body, or any other transport problem
    #[error("Failed to connect to the prediction API: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response decoded but carried neither a prediction nor an error
    #[error("Malformed response from the prediction API")]
    MalformedResponse,
}
