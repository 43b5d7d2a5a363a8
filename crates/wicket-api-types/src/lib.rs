//! Wire-facing types of the Wicket API.
//!
//! Everything in here is shared between the server and any client that
//! talks to it: request/response bodies, the error schema and the
//! [`Sensitive`] wrapper that keeps credentials out of logs.

pub mod error;
pub mod routes;
pub mod users;
pub mod util;

pub use self::error::{Error, ErrorCategory};
pub use self::users::Role;
pub use self::util::Sensitive;
