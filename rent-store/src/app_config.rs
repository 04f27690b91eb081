use rent_shared::Masked;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub mail: MailConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_booking_dir")]
    pub booking_dir: String,
    #[serde(default = "default_contact_dir")]
    pub contact_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            booking_dir: default_booking_dir(),
            contact_dir: default_contact_dir(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("data")
}

fn default_booking_dir() -> String {
    "userdata".to_string()
}

fn default_contact_dir() -> String {
    "useinformation".to_string()
}

/// Mail relay settings. `user`, `pass` and `to` usually come from the
/// environment (`RENT__MAIL__USER`, `RENT__MAIL__PASS`, `RENT__MAIL__TO`).
#[derive(Debug, Deserialize, Clone)]
pub struct MailConfig {
    pub user: Option<String>,
    pub pass: Option<Masked<String>>,
    pub to: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            user: None,
            pass: None,
            to: None,
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8025/api/send".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[derive(Debug, Clone)]
pub struct MailCredentials {
    pub user: String,
    pub pass: Masked<String>,
    pub to: String,
}

impl MailConfig {
    /// All three of user, pass and destination, or nothing.
    pub fn credentials(&self) -> Option<MailCredentials> {
        let user = self.user.as_deref().filter(|v| !v.is_empty())?;
        let pass = self.pass.as_ref().filter(|v| !v.expose().is_empty())?;
        let to = self.to.as_deref().filter(|v| !v.is_empty())?;
        Some(MailCredentials {
            user: user.to_string(),
            pass: pass.clone(),
            to: to.to_string(),
        })
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &run_mode)
    }

    pub fn load_from(dir: &Path, run_mode: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(dir, run_mode, None)
    }

    /// `env`, when given, stands in for the process environment.
    fn load_with_env(
        dir: &Path,
        run_mode: &str,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&file("default")))
            // per-environment overrides, optional
            .add_source(config::File::with_name(&file(run_mode)).required(false))
            // untracked local overrides
            .add_source(config::File::with_name(&file("local")).required(false))
            // e.g. `RENT__SERVER__PORT=8080`
            .add_source(
                config::Environment::with_prefix("RENT")
                    .separator("__")
                    .source(env),
            )
            .build()?;

        s.try_deserialize()
    }
}
