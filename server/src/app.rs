use axum::extract::{FromRequestParts, State};
use jsonwebtoken::{DecodingKey, EncodingKey};
use std::fmt::Debug;
use std::ops::Deref;
use std::sync::Arc;
use wicket_model::UserStore;

#[derive(Clone, FromRequestParts)]
#[from_request(via(State))]
#[must_use]
pub struct App(Arc<AppInner>);

impl App {
    /// Creates a new [`App`] from a given [configuration](wicket_config::Server)
    /// and a user store driver.
    pub fn new(config: wicket_config::Server, store: Arc<dyn UserStore>) -> Self {
        let jwt_keys = Keys::from_secret(config.jwt.secret.as_str().as_bytes());
        Self(Arc::new(AppInner {
            config: Arc::new(config),
            store,
            jwt_keys,
        }))
    }

    /// Creates a new [`App`] for testing purposes, backed by a fresh
    /// in-memory store.
    #[cfg(test)]
    pub fn new_for_tests() -> Self {
        Self::new(
            wicket_config::Server::for_tests(),
            Arc::new(wicket_memstore::MemoryStore::new()),
        )
    }
}

impl Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App").field("config", &self.config).finish()
    }
}

impl Deref for App {
    type Target = AppInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Inner type of the [`App`] object.
pub struct AppInner {
    pub config: Arc<wicket_config::Server>,
    pub store: Arc<dyn UserStore>,
    pub jwt_keys: Keys,
}

/// Token signing/verification keys, derived once at startup from the
/// configured secret and read-only afterwards.
pub struct Keys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl Keys {
    #[must_use]
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

impl Debug for Keys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("<hidden>").finish()
    }
}
