use chrono::NaiveDate;
use contracts::shared::analytics::RegionCoordinates;
use contracts::system::auth::UserRole;
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub sample_data: SampleDataConfig,
    #[serde(default = "default_users")]
    pub users: Vec<DemoUser>,
    /// Region label -> map coordinates
    #[serde(default = "default_regions")]
    pub regions: HashMap<String, RegionCoordinates>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Random secret is generated at startup when empty
    #[serde(default)]
    pub jwt_secret: Option<String>,
    #[serde(default = "default_token_lifetime")]
    pub access_token_lifetime_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_lifetime_hours: default_token_lifetime(),
        }
    }
}

fn default_token_lifetime() -> i64 {
    24
}

#[derive(Debug, Deserialize, Clone)]
pub struct SampleDataConfig {
    pub seed: u64,
    pub records: usize,
    pub start_date: NaiveDate,
}

impl Default for SampleDataConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            records: 1000,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
        }
    }
}

/// Hardcoded demo credentials, not a real user store
#[derive(Debug, Deserialize, Clone)]
pub struct DemoUser {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

fn default_users() -> Vec<DemoUser> {
    vec![
        DemoUser {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: UserRole::Admin,
        },
        DemoUser {
            username: "user".to_string(),
            password: "user123".to_string(),
            role: UserRole::User,
        },
    ]
}

fn default_regions() -> HashMap<String, RegionCoordinates> {
    [
        ("북부", 37.7, 127.0),
        ("남부", 34.1, 127.8),
        ("동부", 36.2, 129.5),
        ("서부", 35.5, 125.0),
        ("중부", 36.8, 127.5),
    ]
    .into_iter()
    .map(|(name, lat, lon)| (name.to_string(), RegionCoordinates { lat, lon }))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            sample_data: SampleDataConfig::default(),
            users: default_users(),
            regions: default_regions(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[auth]
access_token_lifetime_hours = 24

[sample_data]
seed = 42
records = 1000
start_date = "2023-01-01"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
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
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}
