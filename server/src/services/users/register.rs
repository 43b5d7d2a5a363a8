use bon::Builder;
use tokio::task::spawn_blocking;
use tracing::warn;
use wicket_api_types::error::RegisterUserFailed;
use wicket_api_types::{Error as ApiError, ErrorCategory, Role, Sensitive};
use wicket_crypto::argon2;
use wicket_model::{InsertUser, User};

use crate::auth::jwt::LoginClaims;
use crate::App;

#[derive(Debug, Builder)]
pub struct Register<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: Sensitive<&'a str>,
    /// Taken from the request as-is; there is no allow-list and no
    /// privileged-role check on this value.
    #[builder(default)]
    pub role: Role,
}

#[derive(Debug)]
pub struct RegisterResult {
    pub user: User,
    pub token: String,
}

impl Register<'_> {
    #[tracing::instrument(skip(app), name = "services.users.register")]
    pub async fn perform(self, app: &App) -> Result<RegisterResult, ApiError> {
        if !super::is_valid_name(self.name) {
            return Err(ApiError::new(ErrorCategory::InvalidRequest).message("Invalid name."));
        }

        if !super::is_valid_email(self.email) {
            return Err(
                ApiError::new(ErrorCategory::InvalidRequest).message("Invalid email address.")
            );
        }

        if app.store.find_by_email(self.email).await?.is_some() {
            return Err(ApiError::new(ErrorCategory::RegisterUserFailed(
                RegisterUserFailed::EmailTaken,
            ))
            .message("Email already in use"));
        }

        let password = self.password.as_str().as_bytes().to_vec();
        let password_hash = spawn_blocking(move || argon2::hash(password))
            .await
            .map_err(|error| {
                warn!(%error, "password hashing task failed");
                ApiError::unknown()
            })?
            .map_err(|error| {
                warn!(%error, "could not hash password");
                ApiError::unknown()
            })?;

        // the store may still race us past the lookup above; it enforces
        // email uniqueness on its own and surfaces the same error
        let user = app
            .store
            .insert(
                InsertUser::builder()
                    .name(self.name)
                    .email(self.email)
                    .password_hash(&password_hash)
                    .role(self.role)
                    .build(),
            )
            .await?;

        let token = LoginClaims::generate(&user, app.config.jwt.token_ttl)
            .encode(&app.jwt_keys)
            .map_err(|error| {
                warn!(%error, "could not encode login token");
                ApiError::unknown()
            })?;

        Ok(RegisterResult { user, token })
    }
}
