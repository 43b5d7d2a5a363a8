use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::category::LoginUserFailed;
use super::{Error, ErrorCategory};

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match &self.category {
            ErrorCategory::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCategory::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::RegisterUserFailed(..) => StatusCode::BAD_REQUEST,
            ErrorCategory::LoginUserFailed(data) => match data {
                LoginUserFailed::UserNotFound => StatusCode::NOT_FOUND,
                LoginUserFailed::InvalidCredentials => StatusCode::UNAUTHORIZED,
            },
        };
        (status_code, Json(self)).into_response()
    }
}
