use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("settings store error: {0}")]
    Store(String),
    #[error("secure random source unavailable: {0}")]
    Entropy(String),
}

impl ServiceError {
    pub fn store(e: impl std::fmt::Display) -> Self {
        Self::Store(e.to_string())
    }
}
