use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("URL must start with http:// or https://: {0}")]
    InvalidUrl(String),
}
