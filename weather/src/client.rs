// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::WeatherConfig,
  constants::*,
  models::api::{ForecastResponse, GeocodingResponse, GeocodingResult},
  service::{ForecastApi, GeocodingApi},
};
use async_trait::async_trait;
use error::Error;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use url::Url;

/// HTTP client for the Open-Meteo geocoding and forecast endpoints.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
  client: Client,
  config: Arc<WeatherConfig>,
}

impl OpenMeteoClient {
  pub fn new(config: WeatherConfig) -> Result<Self, Error> {
    let client = Client::builder()
      .timeout(config.timeout)
      .user_agent(config.user_agent.as_str())
      .build()
      .map_err(|e| Error::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      config: Arc::new(config),
    })
  }

  fn build_geocoding_url(&self, name: &str) -> Result<Url, Error> {
    let count = self.config.result_count.to_string();
    Url::parse_with_params(
      &format!("{}{}", self.config.geocoding_url, GEOCODING_PATH),
      &[
        ("name", name),
        ("count", count.as_str()),
        ("language", self.config.language.as_str()),
      ],
    )
    .map_err(|e| Error::Geocoding(format!("Failed to build API URL: {}", e)))
  }

  fn build_forecast_url(&self, latitude: f64, longitude: f64) -> Result<Url, Error> {
    let latitude = latitude.to_string();
    let longitude = longitude.to_string();
    Url::parse_with_params(
      &format!("{}{}", self.config.forecast_url, FORECAST_PATH),
      &[
        ("latitude", latitude.as_str()),
        ("longitude", longitude.as_str()),
        ("current_weather", "true"),
        ("timezone", "auto"),
        ("windspeed_unit", WIND_SPEED_UNIT),
        ("temperature_unit", TEMPERATURE_UNIT),
      ],
    )
    .map_err(|e| Error::Weather(format!("Failed to build API URL: {}", e)))
  }

  /// GETs `url` and decodes a JSON body; every failure is reported through `fail`.
  async fn get_json<T: DeserializeOwned>(
    &self,
    url: Url,
    fail: fn(String) -> Error,
  ) -> Result<T, Error> {
    debug!("Requesting {}", url);
    let response = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| fail(format!("Failed to send API request: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
      warn!("API request failed with status: {}", status);
      return Err(fail(format!("API request failed with status: {}", status)));
    }

    response
      .json()
      .await
      .map_err(|e| fail(format!("Failed to parse response: {}", e)))
  }
}

#[async_trait]
impl GeocodingApi for OpenMeteoClient {
  #[instrument(skip(self))]
  async fn search(&self, name: &str) -> Result<Vec<GeocodingResult>, Error> {
    let url = self.build_geocoding_url(name)?;
    let response: GeocodingResponse = self.get_json(url, Error::Geocoding).await?;
    Ok(response.results.unwrap_or_default())
  }
}

#[async_trait]
impl ForecastApi for OpenMeteoClient {
  #[instrument(skip(self))]
  async fn current_weather(
    &self,
    latitude: f64,
    longitude: f64,
  ) -> Result<ForecastResponse, Error> {
    let url = self.build_forecast_url(latitude, longitude)?;
    self.get_json(url, Error::Weather).await
  }
}
