//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::num::NonZeroUsize;

use crate::error::AppError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Settings for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Maximum number of events held in the booking cache (`CACHE_CAPACITY`).
    pub cache_capacity: NonZeroUsize,
}

impl ServerConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset keys.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16` or
    /// `CACHE_CAPACITY` is not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        let cache_capacity = match lookup("CACHE_CAPACITY") {
            Some(raw) => raw.parse::<NonZeroUsize>().map_err(|e| {
                AppError::Config(format!("CACHE_CAPACITY must be a positive integer: {e}"))
            })?,
            None => NonZeroUsize::new(DEFAULT_CACHE_CAPACITY)
                .ok_or_else(|| AppError::Config("default cache capacity is zero".into()))?,
        };

        Ok(Self {
            host,
            port,
            cache_capacity,
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a valid address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
