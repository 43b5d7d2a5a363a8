use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wicket_api_types::routes::auth::{AuthResponse, LoginUser};
use wicket_api_types::{Error as ApiError, Sensitive};

use crate::extract::Json;
use crate::services::users::Login;
use crate::App;

#[tracing::instrument(skip(app), name = "api.auth.login")]
pub async fn login(app: App, Json(form): Json<LoginUser>) -> Result<Response, ApiError> {
    let request = Login::builder()
        .email(&form.email)
        .password(Sensitive::new(form.password.as_str()))
        .build();

    let data = request.perform(&app).await?;
    let response = AuthResponse { token: data.token };
    Ok((StatusCode::OK, Json(response)).into_response())
}

#[cfg(test)]
mod tests {
    use crate::utils::test::build_test_server;
    use assert_json_diff::assert_json_include;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use wicket_api_types::routes::auth::{LoginUser, SignupUser};

    use crate::auth::jwt::LoginClaims;

    async fn signup_alice(server: &TestServer) {
        let body = SignupUser::builder()
            .name("Alice")
            .email("alice@example.com")
            .password("pw123".to_string())
            .build();
        server
            .post("/api/auth/signup")
            .json(&body)
            .await
            .assert_status(StatusCode::OK);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn should_login_registered_user() {
        let (server, app) = build_test_server().await;
        signup_alice(&server).await;

        let body = LoginUser::builder()
            .email("alice@example.com")
            .password("pw123".to_string())
            .build();
        let response = server.post("/api/auth/login").json(&body).await;
        response.assert_status(StatusCode::OK);

        let json: Value = response.json();
        assert!(LoginClaims::decode(&app.jwt_keys, json["token"].as_str().unwrap()).is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn should_reject_unknown_email() {
        let (server, _) = build_test_server().await;

        let body = LoginUser::builder()
            .email("nobody@example.com")
            .password("pw123".to_string())
            .build();
        let response = server.post("/api/auth/login").json(&body).await;
        response.assert_status(StatusCode::NOT_FOUND);

        assert_json_include!(
            actual: response.json::<Value>(),
            expected: json!({
                "code": "login_user_failed",
                "subcode": "user_not_found",
            }),
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn should_reject_wrong_password() {
        let (server, _) = build_test_server().await;
        signup_alice(&server).await;

        let body = LoginUser::builder()
            .email("alice@example.com")
            .password("pw124".to_string())
            .build();
        let response = server.post("/api/auth/login").json(&body).await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        assert_json_include!(
            actual: response.json::<Value>(),
            expected: json!({
                "code": "login_user_failed",
                "subcode": "invalid_credentials",
            }),
        );
    }
}
