// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use config::{
  Config, DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL, DEFAULT_LANGUAGE, DEFAULT_RESULT_COUNT,
  DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use error::Error;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct WeatherConfig {
  pub(crate) geocoding_url: String,
  pub(crate) forecast_url: String,
  pub(crate) result_count: u8,
  pub(crate) language: String,
  pub(crate) timeout: Duration,
  pub(crate) user_agent: String,
}

impl WeatherConfig {
  pub fn new(
    geocoding_url: impl Into<String>,
    forecast_url: impl Into<String>,
    timeout: Duration,
  ) -> Result<Self, Error> {
    Ok(Self {
      geocoding_url: validate_base_url(geocoding_url.into())?,
      forecast_url: validate_base_url(forecast_url.into())?,
      result_count: DEFAULT_RESULT_COUNT,
      language: DEFAULT_LANGUAGE.to_string(),
      timeout,
      user_agent: DEFAULT_USER_AGENT.to_string(),
    })
  }

  pub fn with_result_count(mut self, count: u8) -> Result<Self, Error> {
    if count == 0 {
      return Err(Error::ConfigError(
        "Geocoding result count must be at least 1".into(),
      ));
    }
    self.result_count = count;
    Ok(self)
  }

  pub fn with_language(mut self, language: impl Into<String>) -> Self {
    self.language = language.into();
    self
  }

  pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
    self.user_agent = user_agent.into();
    self
  }
}

impl Default for WeatherConfig {
  fn default() -> Self {
    Self {
      geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
      forecast_url: DEFAULT_FORECAST_URL.to_string(),
      result_count: DEFAULT_RESULT_COUNT,
      language: DEFAULT_LANGUAGE.to_string(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
      user_agent: DEFAULT_USER_AGENT.to_string(),
    }
  }
}

impl TryFrom<&Config> for WeatherConfig {
  type Error = Error;

  fn try_from(config: &Config) -> Result<Self, Self::Error> {
    Ok(
      Self::new(
        config.geocoding.base_url.clone(),
        config.forecast.base_url.clone(),
        config.http.timeout(),
      )?
      .with_result_count(config.geocoding.count)?
      .with_language(config.geocoding.language.clone())
      .with_user_agent(config.http.user_agent.clone()),
    )
  }
}

fn validate_base_url(raw: String) -> Result<String, Error> {
  let url =
    Url::parse(&raw).map_err(|e| Error::ConfigError(format!("Invalid URL {}: {}", raw, e)))?;
  match url.scheme() {
    "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
    scheme => Err(Error::ConfigError(format!(
      "Unsupported URL scheme {} in {}",
      scheme, raw
    ))),
  }
}
