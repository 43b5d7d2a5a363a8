//! Environment variables recognized by the Wicket server.

/// IP address the HTTP server binds to. Defaults to `127.0.0.1`.
pub const SERVER_IP: &str = "WICKET_SERVER_IP";

/// Port the HTTP server binds to. Defaults to `8080`.
pub const SERVER_PORT: &str = "WICKET_SERVER_PORT";

/// Secret used to sign and verify access tokens. Required; the server
/// refuses to start without it.
pub const JWT_SECRET: &str = "WICKET_JWT_SECRET";

/// Lifetime of issued access tokens, in seconds. Defaults to one day.
pub const JWT_TOKEN_TTL: &str = "WICKET_JWT_TOKEN_TTL";
