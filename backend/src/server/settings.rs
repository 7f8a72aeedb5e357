//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EVENTS_*` environment variables, and an
//! optional configuration file, in that order of precedence.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 8080;

/// Startup configuration for the event API server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EVENTS")]
pub struct ServerSettings {
    /// Interface to listen on.
    pub bind_host: Option<String>,
    /// Port to listen on.
    pub bind_port: Option<u16>,
    /// PostgreSQL URL; in-memory stores are used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub database_max_connections: Option<u32>,
    /// Address of the administrator account seeded at startup.
    pub admin_email: Option<String>,
    /// Password of the administrator account seeded at startup.
    pub admin_password: Option<String>,
    /// Apply pending schema migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// Interface to listen on, defaulting to all interfaces.
    pub fn bind_host(&self) -> &str {
        self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    /// Port to listen on, defaulting to 8080.
    pub fn bind_port(&self) -> u16 {
        self.bind_port.unwrap_or(DEFAULT_BIND_PORT)
    }

    /// Socket address built from the host and port.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let host: IpAddr = self.bind_host().parse()?;
        Ok(SocketAddr::new(host, self.bind_port()))
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, defaulting to the pool's own default.
    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
            .unwrap_or(event_api::outbound::persistence::DEFAULT_MAX_CONNECTIONS)
    }

    /// Administrator credentials when both halves are configured.
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        match (self.admin_email.as_deref(), self.admin_password.as_deref()) {
            (Some(email), Some(password)) => Some((email, password)),
            _ => None,
        }
    }
}
