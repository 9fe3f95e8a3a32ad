//! Error types for the SVM front end

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SVMError {
    #[error("Invalid vector: {0}")]
    InvalidVector(String),

    #[error("Training failed: {0}")]
    Training(String),

    #[error("Resource failure: {0}")]
    Resource(String),

    #[error("Model has been closed")]
    ModelClosed,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, SVMError>;
