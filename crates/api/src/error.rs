pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("content generation failed for node '{label}' ({id})")]
    Content {
        label: String,
        id: String,
        #[source]
        source: BoxError,
    },
    #[error("unable to create documentation node for {object}")]
    Factory {
        object: String,
        #[source]
        source: BoxError,
    },
    #[error("Invalid model: {0}")]
    Model(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DocError {
    /// Wraps an arbitrary failure raised while rendering `label`/`id`.
    pub fn content(label: impl Into<String>, id: Option<String>, source: impl Into<BoxError>) -> Self {
        DocError::Content {
            label: label.into(),
            id: id.unwrap_or_else(|| "<root>".to_string()),
            source: source.into(),
        }
    }
}

pub type DocResult<T> = std::result::Result<T, DocError>;
