use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    /// The single staff address allowed to administer the store.
    /// Must be provided via config.toml or the ADMIN_EMAIL env var.
    #[serde(default)]
    pub email: String,
    /// Password for the admin account created on first run
    #[serde(default = "default_bootstrap_password")]
    pub bootstrap_password: String,
}

fn default_bootstrap_password() -> String {
    "change-me".to_string()
}

/// Default configuration embedded in the binary. The admin e-mail has no
/// default on purpose: startup fails until one is supplied.
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[database]
path = "target/db/app.db"

[admin]
email = ""
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Env overrides applied afterwards: ADMIN_EMAIL, DATABASE_PATH, PORT.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config: Config = {
        let mut loaded = None;
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let config_path = exe_dir.join("config.toml");
                if config_path.exists() {
                    tracing::info!("Loading config from: {}", config_path.display());
                    let contents = std::fs::read_to_string(&config_path)?;
                    loaded = Some(toml::from_str(&contents)?);
                } else {
                    tracing::warn!("config.toml not found at: {}", config_path.display());
                }
            }
        }
        match loaded {
            Some(config) => config,
            None => {
                tracing::info!("Using default embedded configuration");
                toml::from_str(DEFAULT_CONFIG)?
            }
        }
    };

    if let Ok(email) = std::env::var("ADMIN_EMAIL") {
        config.admin.email = email;
    }
    if let Ok(path) = std::env::var("DATABASE_PATH") {
        config.database.path = path;
    }
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT env var is not a valid port number: {port}"))?;
    }

    validate(&config)?;
    Ok(config)
}

/// Reject configurations the server must not start with
pub fn validate(config: &Config) -> anyhow::Result<()> {
    let email = config.admin.email.trim();
    if email.is_empty() {
        anyhow::bail!(
            "admin e-mail is not configured; set [admin].email in config.toml \
             or the ADMIN_EMAIL env var"
        );
    }
    if !email.contains('@') {
        anyhow::bail!("configured admin e-mail '{email}' is not a valid address");
    }
    if config.database.path.trim().is_empty() {
        anyhow::bail!("database path is not configured");
    }
    Ok(())
}

/// Store the validated configuration for the lifetime of the process
pub fn init(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("configuration already initialized"))
}

pub fn get() -> &'static Config {
    CONFIG.get().expect("configuration has not been loaded")
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses_but_fails_validation() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config.server.port, 3000);
        // No admin e-mail out of the box: startup must refuse
        assert!(validate(&config).is_err());
    }

    #[test]
    fn config_with_admin_email_passes() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.admin.email = "admin@store.example".into();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn malformed_admin_email_is_rejected() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.admin.email = "not-an-address".into();
        assert!(validate(&config).is_err());
    }
}
