use thiserror::Error;

pub type Result<T> = std::result::Result<T, MultiSzError>;

#[derive(Debug, Error)]
pub enum MultiSzError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("multi-string format error: {0}")]
    Format(String),

    #[error("utf-16 error: {0}")]
    Utf16(#[from] std::string::FromUtf16Error),
}
