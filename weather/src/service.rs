// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::OpenMeteoClient,
  config::WeatherConfig,
  models::{
    api::{ForecastResponse, GeocodingResult},
    weather::{Location, WeatherObservation},
  },
};
use async_trait::async_trait;
use error::Error;
use tracing::{debug, info, instrument};

#[async_trait]
pub trait GeocodingApi: Send + Sync {
  /// Ranked candidates for a place name, best match first.
  async fn search(&self, name: &str) -> Result<Vec<GeocodingResult>, Error>;
}

#[async_trait]
pub trait ForecastApi: Send + Sync {
  async fn current_weather(
    &self,
    latitude: f64,
    longitude: f64,
  ) -> Result<ForecastResponse, Error>;
}

/// Resolves a free-text place name to its best match and that place's current weather.
pub struct LocationWeatherResolver {
  geocoder: Box<dyn GeocodingApi>,
  forecaster: Box<dyn ForecastApi>,
}

impl LocationWeatherResolver {
  pub fn new(config: WeatherConfig) -> Result<Self, Error> {
    let client = OpenMeteoClient::new(config)?;
    Ok(Self::with_providers(Box::new(client.clone()), Box::new(client)))
  }

  pub fn with_providers(
    geocoder: Box<dyn GeocodingApi>,
    forecaster: Box<dyn ForecastApi>,
  ) -> Self {
    Self {
      geocoder,
      forecaster,
    }
  }

  #[instrument(skip(self))]
  pub async fn resolve(&self, query: &str) -> Result<(Location, WeatherObservation), Error> {
    let query = query.trim();
    if query.is_empty() {
      return Err(Error::Validation("City name cannot be empty".into()));
    }

    info!("Resolving current weather for {}", query);

    let candidate = self
      .geocoder
      .search(query)
      .await?
      .into_iter()
      .next()
      .ok_or_else(|| Error::NotFound(query.to_string()))?;

    let location = Location::from_candidate(candidate);
    debug!(
      "Selected {} at ({}, {})",
      location.display_name, location.latitude, location.longitude
    );

    let forecast = self
      .forecaster
      .current_weather(location.latitude, location.longitude)
      .await?;
    let payload = forecast.current_weather.ok_or(Error::DataUnavailable)?;
    let weather = WeatherObservation::from_payload(payload)?;

    info!(
      "Current weather in {}: {}°C, code {}",
      location.display_name, weather.temperature_celsius, weather.weather_code
    );
    Ok((location, weather))
  }
}
