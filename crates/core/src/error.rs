use docgen_api::{BoxError, DocError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Doc(#[from] DocError),
    #[error("Unable to load model {}", path.display())]
    Model {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
    #[error("Unknown model type: {0}")]
    UnknownType(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Output file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

impl DocgenError {
    pub fn model(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        DocgenError::Model {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocgenError>;
