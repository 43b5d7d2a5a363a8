use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wicket_api_types::routes::auth::{AuthResponse, SignupUser};
use wicket_api_types::{Error as ApiError, Sensitive};

use crate::extract::Json;
use crate::services::users::Register;
use crate::App;

#[tracing::instrument(skip(app), name = "api.auth.signup")]
pub async fn register(app: App, Json(form): Json<SignupUser>) -> Result<Response, ApiError> {
    let request = Register::builder()
        .name(&form.name)
        .email(&form.email)
        .password(Sensitive::new(form.password.as_str()))
        .role(form.role)
        .build();

    let data = request.perform(&app).await?;
    let response = AuthResponse { token: data.token };
    Ok((StatusCode::OK, Json(response)).into_response())
}
