use thiserror::Error;

pub type Result<T, E = UncurlError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum UncurlError {
    #[error("header fragment has no `-H ` prefix: {0:?}")]
    MissingHeaderFlag(String),

    #[error("no url argument found in command: {0:?}")]
    MissingUrl(String),

    #[error("failed to parse {0}")]
    Parse(String),

    #[error("`--data-raw` body is not valid JSON: {0}")]
    Body(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
