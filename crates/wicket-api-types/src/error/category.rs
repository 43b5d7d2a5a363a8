/// Broad classification of every error the Wicket API can emit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// We don't know what the cause of this error is, but the error we
    /// have in our server is reported to the operators.
    Unknown,
    InvalidRequest,
    NotFound,

    /// Why registering a user failed. It contains user input only.
    RegisterUserFailed(RegisterUserFailed),

    /// Why logging in as a user failed.
    LoginUserFailed(LoginUserFailed),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterUserFailed {
    EmailTaken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginUserFailed {
    UserNotFound,
    InvalidCredentials,
}

impl ErrorCategory {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
            Self::RegisterUserFailed(..) => "register_user_failed",
            Self::LoginUserFailed(..) => "login_user_failed",
        }
    }

    #[must_use]
    pub fn subcode(&self) -> Option<&'static str> {
        match self {
            Self::Unknown | Self::InvalidRequest | Self::NotFound => None,
            Self::RegisterUserFailed(subcode) => Some(match subcode {
                RegisterUserFailed::EmailTaken => "email_taken",
            }),
            Self::LoginUserFailed(subcode) => Some(match subcode {
                LoginUserFailed::UserNotFound => "user_not_found",
                LoginUserFailed::InvalidCredentials => "invalid_credentials",
            }),
        }
    }
}
