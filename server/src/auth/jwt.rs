use chrono::{TimeDelta, Utc};
use jsonwebtoken::{errors::ErrorKind, Algorithm, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;
use wicket_api_types::Role;
use wicket_model::User;

use crate::app::Keys;

static JWT_HEADER: LazyLock<Header> = LazyLock::new(|| Header::new(Algorithm::HS256));
static JWT_LOGIN_ISSUER: &str = "wicket.api.login";

/// Claims of an issued access token. Validity is purely cryptographic
/// and time-based; nothing is stored server-side.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginClaims {
    pub nbf: i64,
    pub exp: i64,
    pub iss: String,
    pub sub: i64,

    pub name: String,
    pub role: Role,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeJwtError {
    #[error("Token is expired")]
    Expired,
    #[error("Failed to decode as a login token")]
    Invalid,
}

#[derive(Debug, Error)]
#[error("Failed to encode login claims as JWT")]
pub struct EncodeJwtError;

impl LoginClaims {
    pub fn generate(user: &User, token_ttl: TimeDelta) -> Self {
        let now = Utc::now();
        Self {
            nbf: now.timestamp(),
            exp: (now + token_ttl).timestamp(),
            iss: JWT_LOGIN_ISSUER.to_string(),
            sub: user.id.0,

            name: user.name.clone(),
            role: user.role,
        }
    }

    pub fn encode(&self, keys: &Keys) -> Result<String, EncodeJwtError> {
        jsonwebtoken::encode(&JWT_HEADER, self, &keys.encoding).map_err(|_| EncodeJwtError)
    }

    pub fn decode(keys: &Keys, token: &str) -> Result<Self, DecodeJwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.set_issuer(&[JWT_LOGIN_ISSUER]);

        let token = token.replace(char::is_whitespace, "");
        match jsonwebtoken::decode(&token, &keys.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(error) => match error.kind() {
                ErrorKind::ExpiredSignature => Err(DecodeJwtError::Expired),
                _ => Err(DecodeJwtError::Invalid),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wicket_model::UserId;

    fn sample_user() -> User {
        User {
            id: UserId(7),
            created: Utc::now().naive_utc(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password_hash: "$argon2id$fake".into(),
            role: Role::Admin,
        }
    }

    #[test]
    fn should_round_trip_claims() {
        let keys = Keys::from_secret(b"test secret");
        let token = LoginClaims::generate(&sample_user(), TimeDelta::days(1))
            .encode(&keys)
            .unwrap();

        let claims = LoginClaims::decode(&keys, &token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.iss, "wicket.api.login");
    }

    #[test]
    fn should_reject_tokens_signed_with_another_secret() {
        let keys = Keys::from_secret(b"test secret");
        let other_keys = Keys::from_secret(b"other secret");

        let token = LoginClaims::generate(&sample_user(), TimeDelta::days(1))
            .encode(&other_keys)
            .unwrap();
        assert_eq!(
            LoginClaims::decode(&keys, &token).unwrap_err(),
            DecodeJwtError::Invalid
        );
    }

    #[test]
    fn should_reject_expired_tokens() {
        let keys = Keys::from_secret(b"test secret");

        // expiry far enough in the past to clear the 30s leeway
        let token = LoginClaims::generate(&sample_user(), TimeDelta::hours(-1))
            .encode(&keys)
            .unwrap();
        assert_eq!(
            LoginClaims::decode(&keys, &token).unwrap_err(),
            DecodeJwtError::Expired
        );
    }
}
