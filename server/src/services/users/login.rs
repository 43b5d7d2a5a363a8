use bon::Builder;
use std::time::Duration;
use tokio::task::spawn_blocking;
use tracing::warn;
use wicket_api_types::error::LoginUserFailed;
use wicket_api_types::{Error as ApiError, ErrorCategory, Sensitive};
use wicket_crypto::argon2;
use wicket_crypto::future::SubtleTimingFutureExt;
use wicket_model::User;

use crate::auth::jwt::LoginClaims;
use crate::App;

// Floor for the credential-check part of a login request, so response
// timing does not tell a caller which step rejected them.
const LOGIN_TIMING_FLOOR: Duration = Duration::from_secs(1);

#[derive(Debug, Builder)]
pub struct Login<'a> {
    pub email: &'a str,
    pub password: Sensitive<&'a str>,
}

#[derive(Debug)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

impl Login<'_> {
    #[tracing::instrument(skip(app), name = "services.users.login")]
    pub async fn perform(self, app: &App) -> Result<LoginResponse, ApiError> {
        let user = async {
            let Some(user) = app.store.find_by_email(self.email).await? else {
                return Err(ApiError::new(ErrorCategory::LoginUserFailed(
                    LoginUserFailed::UserNotFound,
                ))
                .message("User not found"));
            };

            let password = self.password.as_str().as_bytes().to_vec();
            let correct_hash = user.password_hash.clone();

            let is_matched = spawn_blocking(move || argon2::verify(&password, &correct_hash))
                .await
                .map_err(|error| {
                    warn!(%error, "password verification task failed");
                    ApiError::unknown()
                })?
                .map_err(|error| {
                    warn!(%error, "could not verify password");
                    ApiError::unknown()
                })?;

            if !is_matched {
                return Err(ApiError::new(ErrorCategory::LoginUserFailed(
                    LoginUserFailed::InvalidCredentials,
                ))
                .message("Invalid credentials"));
            }

            Ok::<_, ApiError>(user)
        }
        .subtle_timing(LOGIN_TIMING_FLOOR)
        .await?;

        let token = LoginClaims::generate(&user, app.config.jwt.token_ttl)
            .encode(&app.jwt_keys)
            .map_err(|error| {
                warn!(%error, "could not encode login token");
                ApiError::unknown()
            })?;

        Ok(LoginResponse { user, token })
    }
}
