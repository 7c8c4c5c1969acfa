use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid OCR output: {0}")]
    InvalidOcrOutput(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<serde_json::Error> for PassportError {
    fn from(err: serde_json::Error) -> Self {
        PassportError::Serialization(err.to_string())
    }
}
