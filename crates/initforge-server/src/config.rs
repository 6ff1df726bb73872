//! Server configuration from environment variables

use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, read once at startup.
///
/// Every knob has a default so the server starts with no environment at all;
/// `INITFORGE_AUTH_TOKEN` left unset means the API is open.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Bound on the whole render-and-archive pipeline per request
    pub request_timeout: Duration,
    /// CORS origins; `["*"]` mirrors the request origin
    pub allowed_origins: Vec<String>,
    /// Static bearer credential required on `/api/v1/*` when set
    pub auth_token: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("INITFORGE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_or_default("INITFORGE_PORT", DEFAULT_PORT),
            request_timeout: Duration::from_secs(parse_or_default(
                "INITFORGE_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            allowed_origins: std::env::var("INITFORGE_ALLOWED_ORIGINS")
                .map(|v| split_origins(&v))
                .unwrap_or_else(|_| vec!["*".to_string()]),
            auth_token: std::env::var("INITFORGE_AUTH_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            allowed_origins: vec!["*".to_string()],
            auth_token: None,
        }
    }
}

fn parse_or_default<T: std::str::FromStr>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(var, value, "unparseable value, using default");
            default
        }),
        Err(_) => default,
    }
}

fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_origins_trims_and_drops_empties() {
        assert_eq!(
            split_origins("https://a.example, https://b.example,,"),
            ["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_defaults_are_open() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.allowed_origins, ["*"]);
        assert!(config.auth_token.is_none());
    }
}
