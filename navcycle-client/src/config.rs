use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::AppError;

pub const ENV_CONFIG: &str = "NAVCYCLE_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenterKind {
    /// Desktop notifications when a session is reachable, log output otherwise.
    #[default]
    Auto,
    Desktop,
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub presenter: PresenterKind,
    /// Shown as the sender when the backend has no registered channel.
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Desktop entry (without `.desktop`) opened when the notification is clicked.
    #[serde(default)]
    pub desktop_entry: Option<String>,
    /// Directory holding `<icon resource>.png` files. Falls back to themed icons.
    #[serde(default)]
    pub icon_dir: Option<PathBuf>,
    /// Write logs to a daily rolling file in this directory instead of stderr.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_app_name() -> String {
    "Navigation Showcase".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            presenter: PresenterKind::default(),
            app_name: default_app_name(),
            desktop_entry: None,
            icon_dir: None,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Resolve and load the config file.
    ///
    /// A path given on the command line or in the environment must be readable.
    /// A missing file at the default location yields the defaults.
    pub fn find_and_load(cli_value: Option<PathBuf>) -> Result<(PathBuf, Self), AppError> {
        match resolve_config_path(cli_value)? {
            ConfigLocation::Explicit(path) => {
                let cfg = load_config(&path)?;
                Ok((path, cfg))
            }
            ConfigLocation::Default(path) if path.exists() => {
                let cfg = load_config(&path)?;
                Ok((path, cfg))
            }
            ConfigLocation::Default(path) => Ok((path, Self::default())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    Explicit(PathBuf),
    Default(PathBuf),
}

pub fn resolve_config_path(cli_value: Option<PathBuf>) -> Result<ConfigLocation, AppError> {
    if let Some(p) = cli_value {
        return Ok(ConfigLocation::Explicit(p));
    }
    if let Ok(p) = std::env::var(ENV_CONFIG) {
        return Ok(ConfigLocation::Explicit(PathBuf::from(p)));
    }
    default_config_path()
        .map(ConfigLocation::Default)
        .ok_or_else(|| AppError::Config("could not determine config dir".into()))
}

pub fn default_config_path() -> Option<PathBuf> {
    let pd = ProjectDirs::from("dev", "navcycle", "navcycle")?;
    Some(pd.config_dir().join("navcycle.yaml"))
}

pub fn load_config(path: &Path) -> Result<ClientConfig, AppError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("read {} failed: {e}", path.display())))?;
    let cfg: ClientConfig = serde_yaml::from_str(&data)
        .map_err(|e| AppError::Config(format!("parse {} failed: {e}", path.display())))?;
    if cfg.tick_interval_ms == 0 {
        return Err(AppError::Config(format!(
            "{}: tick_interval_ms must be greater than zero",
            path.display()
        )));
    }
    Ok(cfg)
}
