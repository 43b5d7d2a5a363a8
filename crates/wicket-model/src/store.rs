use async_trait::async_trait;
use thiserror::Error;
use wicket_api_types::error::RegisterUserFailed;
use wicket_api_types::{Error as ApiError, ErrorCategory};

use crate::user::{InsertUser, User};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The email uniqueness invariant would be violated. Also raised for
    /// races where two inserts with the same email pass the caller's
    /// earlier lookup; the store is the single enforcement point.
    #[error("Email is already taken by another user")]
    EmailTaken,
    #[error("User store is unavailable")]
    Unavailable,
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::EmailTaken => ApiError::new(ErrorCategory::RegisterUserFailed(
                RegisterUserFailed::EmailTaken,
            ))
            .message("Email already in use"),
            StoreError::Unavailable => ApiError::unknown(),
        }
    }
}

/// Persistence contract for user records, keyed by email.
///
/// Implementations must make [`insert`](UserStore::insert) an atomic
/// check-then-insert: under concurrent callers, at most one insert per
/// distinct email may succeed regardless of what the callers looked up
/// beforehand.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Looks up a user by email, case-insensitively. Absence is `None`,
    /// not a fault.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Persists a new user record and assigns its id.
    async fn insert(&self, new_user: InsertUser<'_>) -> Result<User, StoreError>;
}
