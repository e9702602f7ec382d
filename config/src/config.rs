// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::instrument;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_RESULT_COUNT: u8 = 5;
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("weathernow/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub geocoding: GeocodingConfig,
  pub forecast: ForecastConfig,
  pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
  pub base_url: String,
  pub count: u8,
  pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
  pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
  pub timeout_secs: u64,
  pub user_agent: String,
}

impl Default for GeocodingConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_GEOCODING_URL.to_string(),
      count: DEFAULT_RESULT_COUNT,
      language: DEFAULT_LANGUAGE.to_string(),
    }
  }
}

impl Default for ForecastConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_FORECAST_URL.to_string(),
    }
  }
}

impl Default for HttpConfig {
  fn default() -> Self {
    Self {
      timeout_secs: DEFAULT_TIMEOUT_SECS,
      user_agent: DEFAULT_USER_AGENT.to_string(),
    }
  }
}

impl HttpConfig {
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let content = fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }

  /// Reads `path` when it exists, otherwise falls back to the built-in Open-Meteo endpoints.
  pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      tracing::debug!("No config file at {}, using defaults", path.display());
      return Ok(Self::default());
    }
    Self::from_file(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn defaults_point_at_open_meteo() {
    let config = Config::default();
    assert_eq!(config.geocoding.base_url, DEFAULT_GEOCODING_URL);
    assert_eq!(config.geocoding.count, 5);
    assert_eq!(config.geocoding.language, "en");
    assert_eq!(config.forecast.base_url, DEFAULT_FORECAST_URL);
    assert_eq!(config.http.timeout(), Duration::from_secs(10));
  }

  #[test]
  fn partial_file_keeps_remaining_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
      file,
      "[forecast]\nbase_url = \"http://localhost:8080\"\n\n[http]\ntimeout_secs = 3"
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.forecast.base_url, "http://localhost:8080");
    assert_eq!(config.http.timeout_secs, 3);
    assert_eq!(config.http.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(config.geocoding.base_url, DEFAULT_GEOCODING_URL);
  }

  #[test]
  fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("weathernow.toml")).unwrap();
    assert_eq!(config.geocoding.language, DEFAULT_LANGUAGE);
  }

  #[test]
  fn malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[http]\ntimeout_secs = \"soon\"").unwrap();
    assert!(Config::from_file(file.path()).is_err());
  }
}
