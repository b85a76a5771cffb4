use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory with the built frontend bundle
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base of the login service
    pub auth_base_url: String,
    /// Base of the operations service (city, facility, purchaseOrder)
    pub ops_base_url: String,
    pub application: String,
    pub app_version: String,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    /// Referer sent with login requests
    pub referer: String,
    pub ops_origin: String,
    pub ops_referer: String,
    #[serde(default)]
    pub ops_username: Option<String>,
    #[serde(default)]
    pub ops_password: Option<String>,
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// `Authorization` value for the operations service.
    ///
    /// Without credentials the bare `Basic` marker is sent, as for login.
    pub fn ops_authorization(&self) -> String {
        match (&self.ops_username, &self.ops_password) {
            (Some(user), Some(password)) => {
                format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
            }
            _ => "Basic".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
dist_dir = "dist"

[upstream]
auth_base_url = "http://direct.ninjacart.in:8080"
ops_base_url = "http://ops.ninjacart.in/asgard_ops/operations"
application = "biFrost"
app_version = "7"
user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/140.0.0.0 Safari/537.36"
accept = "application/json, text/plain, */*"
accept_language = "en-GB,en-US;q=0.9,en;q=0.8"
referer = "http://www.direct.ninjacart.in/"
ops_origin = "http://bifrost.ops.ninjacart.in"
ops_referer = "http://bifrost.ops.ninjacart.in/"
ops_username = "NC3604"
ops_password = "123456"
timeout_secs = 30
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

pub fn default_config() -> anyhow::Result<Config> {
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, "dist");
        assert_eq!(config.upstream.auth_base_url, "http://direct.ninjacart.in:8080");
        assert_eq!(config.upstream.ops_referer, "http://bifrost.ops.ninjacart.in/");
        assert_eq!(config.upstream.timeout_secs, 30);
    }

    #[test]
    fn test_ops_authorization_encodes_credentials() {
        let config = default_config().unwrap();
        assert_eq!(
            config.upstream.ops_authorization(),
            "Basic TkMzNjA0OjEyMzQ1Ng=="
        );
    }

    #[test]
    fn test_ops_authorization_without_credentials() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.upstream.ops_password = None;
        assert_eq!(config.upstream.ops_authorization(), "Basic");
    }
}
