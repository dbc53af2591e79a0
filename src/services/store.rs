use async_trait::async_trait;
use thiserror::Error;
use crate::models::{MenteeProfile, MentorProfile};

/// Errors raised by a profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

/// Read access to mentee and mentor profiles
///
/// Implementations are created once at startup and shared across
/// requests; callers never manage connection state.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Look up the mentee profile owned by `user_id`
    async fn find_mentee(&self, user_id: &str) -> Result<Option<MenteeProfile>, StoreError>;

    /// Look up the mentor profile owned by `user_id`
    async fn find_mentor(&self, user_id: &str) -> Result<Option<MentorProfile>, StoreError>;

    /// List the full mentor pool in a stable order
    async fn list_mentors(&self) -> Result<Vec<MentorProfile>, StoreError>;

    /// Whether the backing store is reachable
    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
