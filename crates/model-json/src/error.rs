use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed model: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Type '{0}' is not of the form namespace#name")]
    InvalidTypeRef(String),
    #[error("Type {0} is declared more than once")]
    DuplicateType(String),
    #[error("Type {ty} names undeclared supertype {supertype}")]
    UnknownSupertype { ty: String, supertype: String },
    #[error("Object '{object}' has undeclared type {ty}")]
    UnknownType { object: String, ty: String },
    #[error("Object id '{0}' is used more than once")]
    DuplicateId(String),
    #[error("Property '{property}' of '{object}' refers to unknown object '{target}'")]
    DanglingReference {
        object: String,
        property: String,
        target: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
