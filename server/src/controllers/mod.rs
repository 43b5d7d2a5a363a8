use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use wicket_api_types::{Error as ApiError, ErrorCategory};

use crate::App;

pub mod users;

/// Builds an [axum router] with all routes available for the Wicket API.
///
/// [axum router]: axum::Router
pub fn build_axum_router(app: App) -> Router {
    let auth = Router::new()
        .route("/signup", post(self::users::register))
        .route("/login", post(self::users::login));

    Router::new()
        .nest("/api/auth", auth)
        .method_not_allowed_fallback(method_not_allowed_route)
        .fallback(not_found_route)
        .with_state(app)
}

async fn method_not_allowed_route() -> Response {
    ApiError::new(ErrorCategory::InvalidRequest).into_response()
}

async fn not_found_route(method: Method) -> Response {
    match method {
        Method::HEAD => StatusCode::NOT_FOUND.into_response(),
        _ => ApiError::new(ErrorCategory::NotFound).into_response(),
    }
}
