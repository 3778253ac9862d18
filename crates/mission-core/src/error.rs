use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum MissionError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(Uuid),

    #[error("Id mismatch: path id {path} does not match body id {body}")]
    IdMismatch { path: Uuid, body: Uuid },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MissionError {
    pub fn not_found(kind: &str, id: Uuid) -> Self {
        Self::NotFound(format!("{} {}", kind, id))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
