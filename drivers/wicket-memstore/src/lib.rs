//! In-memory [`UserStore`] driver.
//!
//! Stands in for the external storage engine behind the user store. The
//! uniqueness invariant lives here: `insert` checks and inserts under one
//! lock, so concurrent signups with the same email cannot both succeed.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use wicket_model::{InsertUser, StoreError, User, UserId, UserStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    // keyed by lowercased email
    users: HashMap<String, User>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        // a poisoned lock means a panic mid-insert; treat the store as gone
        self.inner.lock().map_err(|_| StoreError::Unavailable)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    #[tracing::instrument(skip_all, name = "store.users.find_by_email")]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.users.get(&email.to_lowercase()).cloned())
    }

    #[tracing::instrument(skip_all, name = "store.users.insert")]
    async fn insert(&self, new_user: InsertUser<'_>) -> Result<User, StoreError> {
        let mut inner = self.lock()?;

        let key = new_user.email.to_lowercase();
        if inner.users.contains_key(&key) {
            return Err(StoreError::EmailTaken);
        }

        inner.last_id += 1;
        let user = User {
            id: UserId(inner.last_id),
            created: chrono::Utc::now().naive_utc(),
            name: new_user.name.to_string(),
            email: new_user.email.to_string(),
            password_hash: new_user.password_hash.to_string(),
            role: new_user.role,
        };

        inner.users.insert(key, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use wicket_model::InsertUser;

    fn alice() -> InsertUser<'static> {
        InsertUser::builder()
            .name("Alice")
            .email("alice@example.com")
            .password_hash("$argon2id$fake")
            .build()
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_email() {
        let store = MemoryStore::new();
        assert_eq!(
            store.find_by_email("nobody@example.com").await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn should_assign_increasing_ids() {
        let store = MemoryStore::new();
        let alice = store.insert(alice()).await.unwrap();
        let bob = store
            .insert(
                InsertUser::builder()
                    .name("Bob")
                    .email("bob@example.com")
                    .password_hash("$argon2id$fake")
                    .build(),
            )
            .await
            .unwrap();

        assert_eq!(alice.id, UserId(1));
        assert_eq!(bob.id, UserId(2));
    }

    #[tokio::test]
    async fn should_find_case_insensitively_with_original_casing_kept() {
        let store = MemoryStore::new();
        store
            .insert(
                InsertUser::builder()
                    .name("Alice")
                    .email("Alice@Example.com")
                    .password_hash("$argon2id$fake")
                    .build(),
            )
            .await
            .unwrap();

        let found = store
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.email, "Alice@Example.com");
    }

    #[tokio::test]
    async fn should_reject_duplicate_email() {
        let store = MemoryStore::new();
        store.insert(alice()).await.unwrap();

        let duplicate = InsertUser::builder()
            .name("Other Alice")
            .email("ALICE@example.com")
            .password_hash("$argon2id$other")
            .build();
        assert_eq!(
            store.insert(duplicate).await.unwrap_err(),
            StoreError::EmailTaken
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn should_keep_uniqueness_under_concurrent_inserts() {
        let store = Arc::new(MemoryStore::new());

        let mut tasks = Vec::new();
        for n in 0..16 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let name = format!("Racer {n}");
                let new_user = InsertUser::builder()
                    .name(&name)
                    .email("race@example.com")
                    .password_hash("$argon2id$fake")
                    .build();
                store.insert(new_user).await
            }));
        }

        let mut inserted = 0;
        let mut rejected = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(..) => inserted += 1,
                Err(StoreError::EmailTaken) => rejected += 1,
                Err(other) => panic!("unexpected store error: {other}"),
            }
        }

        assert_eq!(inserted, 1);
        assert_eq!(rejected, 15);
    }
}
