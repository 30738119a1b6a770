use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Short message suitable for an inline error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "The requested content could not be found.",
            Error::Serialization(_) | Error::MalformedResponse(_) => {
                "The server sent an unexpected response. Please try again later."
            }
            _ => "Failed to load content. Please try again later.",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
