//! Process configuration for the Wicket server.
//!
//! Everything is read from environment variables; the variable names live
//! in [`vars`] so that they are documented in one place.

pub mod server;
pub mod vars;

pub use self::server::{Jwt, Server, ServerLoadError};
