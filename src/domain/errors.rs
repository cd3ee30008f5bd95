use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Unauthenticated(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Raised by repositories when a write would give two users the same email.
#[derive(Debug, Error)]
#[error("email {0} is already taken")]
pub struct EmailTaken(pub String);

impl DomainError {
    pub fn user_not_found() -> Self {
        DomainError::NotFound("User not found".to_string())
    }

    pub fn user_exists() -> Self {
        DomainError::AlreadyExists("User already exists".to_string())
    }

    /// Maps a failed repository write, turning [`EmailTaken`] into `conflict`.
    pub fn from_write(err: anyhow::Error, conflict: fn() -> DomainError) -> Self {
        if err.is::<EmailTaken>() {
            conflict()
        } else {
            DomainError::Other(err)
        }
    }
}
