// Application error type and result alias, built on thiserror.
use thiserror::Error;

pub mod response;

#[derive(Error, Debug)]
pub enum AppError {
    // sqlx errors cover connectivity, pool checkout and constraint violations alike.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Blocking task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),

    #[error("Template error: {path}: {source}")]
    Template {
        path: String,
        source: std::io::Error,
    },
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
