use thiserror::Error;

/// Failure of a single Directory call.
///
/// Every variant is recovered locally by the resolver: it is logged and the
/// turn falls through to the fallback response.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Directory request timed out: {0}")]
    Timeout(String),

    #[error("Directory transport error: {0}")]
    Transport(String),

    #[error("Directory returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed directory payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid directory URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DirectoryError::Timeout(err.to_string())
        } else {
            DirectoryError::Transport(err.to_string())
        }
    }
}

/// Main error type for Rutabot
#[derive(Error, Debug)]
pub enum RutabotError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    DirectoryError(#[from] DirectoryError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
