// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod client;
pub mod codes;
pub mod config;
pub mod models;
pub mod service;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use client::OpenMeteoClient;
pub use codes::{code_to_description, code_to_glyph, degrees_to_compass_point};
pub use self::config::WeatherConfig;
pub use error::Error;
pub use models::weather::{compose_display_name, Location, WeatherObservation, WeatherReport};
pub use service::{ForecastApi, GeocodingApi, LocationWeatherResolver};
pub use session::{SearchSession, SearchState};

pub mod constants {
  pub(crate) const GEOCODING_PATH: &str = "/v1/search";
  pub(crate) const FORECAST_PATH: &str = "/v1/forecast";
  pub(crate) const WIND_SPEED_UNIT: &str = "kmh";
  pub(crate) const TEMPERATURE_UNIT: &str = "celsius";
  pub(crate) const OBSERVATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
  pub(crate) const DISPLAY_TIME_FORMAT: &str = "%-d %b %Y, %H:%M";
  pub const SOURCE_NAME: &str = "Open-Meteo";
}
