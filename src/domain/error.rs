use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Spawn error: {0}")]
    Spawn(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Probe error: {0}")]
    Probe(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn spawn(msg: impl Into<String>) -> Self {
        Self::Spawn(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn probe(msg: impl Into<String>) -> Self {
        Self::Probe(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_spawn(&self) -> bool {
        matches!(self, Self::Spawn(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
