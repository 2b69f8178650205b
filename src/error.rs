use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{0}")]
    Config(String),

    #[error("Invalid configuration: {0}")]
    Settings(#[from] ::config::ConfigError),

    #[error("{0}")]
    Parse(String),

    #[error("HTTP request failed: {0}")]
    Network(reqwest::Error),

    #[error("Form returned code {status}, body: {body}")]
    Submission { status: u16, body: String },
}

// Request URLs carry the list password in the query string
impl From<reqwest::Error> for CheckError {
    fn from(e: reqwest::Error) -> Self {
        CheckError::Network(e.without_url())
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
