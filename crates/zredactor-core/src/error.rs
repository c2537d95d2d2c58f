use thiserror::Error;

/// Failure of a single Zendesk API call
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{code} {reason} for url: {url}")]
    Status {
        code: u16,
        reason: String,
        url: String,
        body: String,
    },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors that abort a redaction flow
#[derive(Error, Debug)]
pub enum RedactError {
    #[error("Failed to get ticket comments: {0}")]
    FetchComments(#[source] ApiError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RedactError>;
