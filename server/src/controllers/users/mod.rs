mod login;
mod register;

pub use self::login::login;
pub use self::register::register;
