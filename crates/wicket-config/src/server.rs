use chrono::TimeDelta;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;
use wicket_api_types::Sensitive;

use crate::vars;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60 * 24;

#[derive(Debug, Clone)]
pub struct Server {
    /// **Environment variable**: `WICKET_SERVER_IP`
    ///
    /// The default value is `127.0.0.1` if not set.
    pub ip: IpAddr,

    /// **Environment variable**: `WICKET_SERVER_PORT`
    ///
    /// The default value is `8080` if not set.
    pub port: u16,

    pub jwt: Jwt,
}

#[derive(Debug, Clone)]
pub struct Jwt {
    /// **Environment variable**: `WICKET_JWT_SECRET`
    ///
    /// Process-wide signing secret, established once at startup. There is
    /// no default; a missing or empty value fails the load.
    pub secret: Sensitive<String>,

    /// **Environment variable**: `WICKET_JWT_TOKEN_TTL`
    ///
    /// Lifetime of issued tokens. The default value is one day.
    pub token_ttl: TimeDelta,
}

#[derive(Debug, Error)]
pub enum ServerLoadError {
    #[error("`{}` must be set to a non-empty signing secret", vars::JWT_SECRET)]
    MissingJwtSecret,
    #[error("`{var}` has an invalid value: {reason}")]
    InvalidValue {
        var: &'static str,
        reason: &'static str,
    },
}

impl Server {
    /// Loads the server configuration from the program's current
    /// environment variables.
    pub fn from_env() -> Result<Self, ServerLoadError> {
        let ip = match std::env::var(vars::SERVER_IP) {
            Ok(value) => value.parse().map_err(|_| ServerLoadError::InvalidValue {
                var: vars::SERVER_IP,
                reason: "expected an IP address",
            })?,
            Err(..) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match std::env::var(vars::SERVER_PORT) {
            Ok(value) => value.parse().map_err(|_| ServerLoadError::InvalidValue {
                var: vars::SERVER_PORT,
                reason: "expected a port number",
            })?,
            Err(..) => DEFAULT_PORT,
        };

        let secret = std::env::var(vars::JWT_SECRET).unwrap_or_default();
        if secret.is_empty() {
            return Err(ServerLoadError::MissingJwtSecret);
        }

        let token_ttl = match std::env::var(vars::JWT_TOKEN_TTL) {
            Ok(value) => value
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(TimeDelta::seconds)
                .ok_or(ServerLoadError::InvalidValue {
                    var: vars::JWT_TOKEN_TTL,
                    reason: "expected a positive amount of seconds",
                })?,
            Err(..) => TimeDelta::seconds(DEFAULT_TOKEN_TTL_SECS),
        };

        Ok(Self {
            ip,
            port,
            jwt: Jwt {
                secret: Sensitive::new(secret),
                token_ttl,
            },
        })
    }

    /// Loads the server test configuration. Binds to an ephemeral port
    /// and signs with a fixed throwaway secret.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            jwt: Jwt {
                secret: Sensitive::new("wicket-test-secret".into()),
                token_ttl: TimeDelta::seconds(DEFAULT_TOKEN_TTL_SECS),
            },
        }
    }
}
