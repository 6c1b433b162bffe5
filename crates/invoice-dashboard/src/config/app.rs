//! Application configuration for the Invoice Dashboard server.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Environment variables are prefixed with `DASHBOARD_`:
/// - `DASHBOARD_HOST`: Server bind address (default: "0.0.0.0")
/// - `DASHBOARD_PORT`: Server port (default: 3000)
/// - `DASHBOARD_DEBUG`: Enable debug mode (default: false)
/// - `DASHBOARD_SERVER_NAME`: Server name for identification
/// - `DASHBOARD_ALLOWED_ORIGIN`: CORS origin (default: any)
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable debug mode
    #[serde(default)]
    pub debug: bool,

    /// Server name for identification
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Single origin allowed by CORS; any origin when unset
    #[serde(default)]
    pub allowed_origin: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_server_name() -> String {
    "invoice-dashboard".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `DASHBOARD_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("DASHBOARD_").from_env::<AppConfig>()
    }

    /// Get the server bind address as a string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            server_name: default_server_name(),
            allowed_origin: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(!config.debug);
        assert!(config.allowed_origin.is_none());
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..AppConfig::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_deserialize_from_pairs() {
        let vars = vec![
            ("PORT".to_string(), "4000".to_string()),
            ("DEBUG".to_string(), "true".to_string()),
        ];
        let config: AppConfig = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 4000);
        assert!(config.debug);
        assert_eq!(config.server_name, "invoice-dashboard");
    }
}
