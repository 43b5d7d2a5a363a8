pub mod category;
pub use self::category::{ErrorCategory, LoginUserFailed, RegisterUserFailed};

#[cfg(feature = "axum")]
mod axum;

use serde::ser::SerializeStruct;
use serde::Serialize;

/// An error that crosses the API boundary.
///
/// Serialized as `{"code": ..., "subcode": ..., "message": ...}` where
/// `subcode` and `message` are omitted when absent.
#[derive(Debug, Clone)]
#[must_use]
pub struct Error {
    pub category: ErrorCategory,
    pub message: Option<String>,
}

impl Error {
    pub fn new(category: ErrorCategory) -> Self {
        Self {
            category,
            message: None,
        }
    }

    /// An error whose cause is reported on the server side only.
    pub fn unknown() -> Self {
        Self {
            category: ErrorCategory::Unknown,
            message: None,
        }
    }

    pub fn message(self, message: impl Into<String>) -> Self {
        Self {
            category: self.category,
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        self.category.code()
    }

    #[must_use]
    pub fn subcode(&self) -> Option<&'static str> {
        self.category.subcode()
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category
    }
}

impl Eq for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())?;
        if let Some(subcode) = self.subcode() {
            write!(f, "/{subcode}")?;
        }
        if let Some(message) = self.message.as_deref() {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl Serialize for Error {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut fields = 1;
        let subcode = self.subcode();
        if subcode.is_some() {
            fields += 1;
        }
        if self.message.is_some() {
            fields += 1;
        }

        let mut state = serializer.serialize_struct("Error", fields)?;
        state.serialize_field("code", self.code())?;
        if let Some(subcode) = subcode {
            state.serialize_field("subcode", subcode)?;
        }
        if let Some(message) = self.message.as_deref() {
            state.serialize_field("message", message)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_code_only() {
        let error = Error::new(ErrorCategory::InvalidRequest);
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({ "code": "invalid_request" })
        );
    }

    #[test]
    fn should_serialize_subcode_and_message() {
        let error = Error::new(ErrorCategory::RegisterUserFailed(
            RegisterUserFailed::EmailTaken,
        ))
        .message("Email already in use");

        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "code": "register_user_failed",
                "subcode": "email_taken",
                "message": "Email already in use",
            })
        );
    }

    #[test]
    fn should_compare_by_category_only() {
        let left = Error::new(ErrorCategory::NotFound).message("a");
        let right = Error::new(ErrorCategory::NotFound).message("b");
        assert_eq!(left, right);
    }
}
