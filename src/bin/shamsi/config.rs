use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;

/// Top-level configuration, read from `config.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// Whether to color the output at all.
  #[serde(default = "default_true")]
  pub color: bool,

  /// Holiday data settings.
  #[serde(default)]
  pub holidays: HolidayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayConfig {
  #[serde(default = "default_api_url")]
  pub api_url: String,
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
  #[serde(default)]
  pub offline: bool,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

impl Default for Config {
  fn default() -> Self {
    Self { color: true, holidays: HolidayConfig::default() }
  }
}

impl Default for HolidayConfig {
  fn default() -> Self {
    Self {
      api_url: default_api_url(),
      cache_dir: None,
      offline: false,
      timeout_secs: default_timeout_secs(),
    }
  }
}

fn default_true() -> bool {
  true
}
fn default_api_url() -> String {
  "https://pnldev.com/api/calender".to_string()
}
fn default_timeout_secs() -> u64 {
  10
}

impl Config {
  /// Load the configuration.
  ///
  /// An explicit path must exist. Without one, `<config dir>/shamsi/config.toml` is read if it
  /// exists and defaults are used otherwise.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) => Self::from_file(path),
      None => match default_path() {
        Some(path) if path.is_file() => Self::from_file(&path),
        _ => {
          log::debug!("no configuration file found, using defaults");
          Ok(Self::default())
        },
      },
    }
  }

  fn from_file(path: &Path) -> Result<Self> {
    let text = fs::read_to_string(path)
      .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = toml::from_str(&text)
      .with_context(|| format!("failed to parse config file {}", path.display()))?;
    log::debug!("loaded configuration from {}", path.display());
    Ok(config)
  }

  /// The directory holiday data is cached in.
  pub fn cache_dir(&self) -> Result<PathBuf> {
    match &self.holidays.cache_dir {
      Some(dir) => Ok(dir.clone()),
      None => dirs::cache_dir()
        .map(|dir| dir.join("shamsi_calendar"))
        .context("failed to determine the user cache directory"),
    }
  }
}

fn default_path() -> Option<PathBuf> {
  dirs::config_dir().map(|dir| dir.join("shamsi").join("config.toml"))
}
