use serde::{Deserialize, Serialize};

use crate::users::Role;
use crate::util::Sensitive;

/// Sign up to Wicket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, bon::Builder)]
#[builder(on(String, into), on(Sensitive<String>, into))]
pub struct SignupUser {
    pub name: String,
    pub email: String,
    pub password: Sensitive<String>,

    /// Role requested by the caller. Defaults to [`Role::Member`] when
    /// the field is left out of the request body.
    #[serde(default)]
    #[builder(default)]
    pub role: Role,
}

/// Log in as an existing user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, bon::Builder)]
#[builder(on(String, into), on(Sensitive<String>, into))]
pub struct LoginUser {
    pub email: String,
    pub password: Sensitive<String>,
}

/// Response of both successful signup and login: the signed access token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::Role;

    #[test]
    fn should_deserialize_signup_without_role() {
        let form: SignupUser =
            serde_json::from_str(r#"{"name":"Alice","email":"a@x.com","password":"pw123"}"#)
                .unwrap();
        assert_eq!(form.role, Role::Member);
    }

    #[test]
    fn should_deserialize_caller_supplied_role() {
        let form: SignupUser = serde_json::from_str(
            r#"{"name":"Alice","email":"a@x.com","password":"pw123","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(form.role, Role::Admin);
    }

    #[test]
    fn should_not_leak_password_through_debug() {
        let form = LoginUser::builder()
            .email("a@x.com")
            .password("pw123".to_string())
            .build();
        assert!(!format!("{form:?}").contains("pw123"));
    }
}
