use bon::Builder;
use chrono::NaiveDateTime;
use wicket_api_types::Role;

use crate::id::UserId;

/// A stored user record.
///
/// Created exactly once at signup, never updated or deleted afterwards;
/// read again at login for credential comparison and token claims.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub created: NaiveDateTime,
    pub name: String,
    /// Unique across all users; uniqueness is case-insensitive while the
    /// stored value keeps the caller's casing.
    pub email: String,
    /// PHC-formatted argon2id hash. The plaintext never reaches a record.
    pub password_hash: String,
    pub role: Role,
}

/// Parameters for inserting a fresh user record; the store assigns the
/// id and creation timestamp.
#[derive(Debug, Builder)]
pub struct InsertUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    #[builder(default)]
    pub role: Role,
}
