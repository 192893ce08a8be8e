use thiserror::Error;

/// Failures raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The seed file could not be read.
    #[error("failed to read catalog seed: {0}")]
    Io(#[from] std::io::Error),
    /// The seed file is not a valid catalog document.
    #[error("failed to parse catalog seed: {0}")]
    Parse(#[from] serde_json::Error),
    /// A writer panicked while holding the listing lock.
    #[error("catalog lock poisoned")]
    LockPoisoned,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
