use validator::ValidateEmail;

mod login;
mod register;

pub use self::login::{Login, LoginResponse};
pub use self::register::{Register, RegisterResult};

/// Display names are arbitrary text but must not be blank.
fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Structural email check only; deliverability is not our concern.
fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.validate_email()
}
