// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::api::{CurrentWeather, GeocodingResult};
use crate::{
  codes::{code_to_description, code_to_glyph, degrees_to_compass_point},
  constants::{DISPLAY_TIME_FORMAT, OBSERVATION_TIME_FORMAT, SOURCE_NAME},
};
use chrono::NaiveDateTime;
use error::Error;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
  pub display_name: String,
  pub latitude: f64,
  pub longitude: f64,
  pub timezone: String,
}

impl Location {
  pub(crate) fn from_candidate(candidate: GeocodingResult) -> Self {
    Self {
      display_name: compose_display_name(
        &candidate.name,
        candidate.admin1.as_deref(),
        candidate.country.as_deref(),
      ),
      latitude: candidate.latitude,
      longitude: candidate.longitude,
      timezone: candidate.timezone.unwrap_or_default(),
    }
  }
}

/// Joins the place name with its region and country, skipping absent or blank parts.
pub fn compose_display_name(name: &str, admin1: Option<&str>, country: Option<&str>) -> String {
  let mut parts = vec![name];
  parts.extend(
    [admin1, country]
      .into_iter()
      .flatten()
      .filter(|part| !part.trim().is_empty()),
  );
  parts.join(", ")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherObservation {
  pub temperature_celsius: f64,
  pub wind_speed_kmh: f64,
  pub wind_direction_degrees: Option<f64>,
  pub weather_code: i32,
  pub observation_time: String,
  pub raw: serde_json::Value,
}

impl WeatherObservation {
  pub(crate) fn from_payload(raw: serde_json::Value) -> Result<Self, Error> {
    let current: CurrentWeather = serde_json::from_value(raw.clone()).map_err(|e| {
      debug!("current_weather payload is not usable: {}", e);
      Error::DataUnavailable
    })?;

    Ok(Self {
      temperature_celsius: current.temperature,
      wind_speed_kmh: current.windspeed,
      wind_direction_degrees: current.winddirection,
      weather_code: current.weathercode,
      observation_time: current.time,
      raw,
    })
  }

  pub fn description(&self) -> &'static str {
    code_to_description(self.weather_code)
  }

  pub fn glyph(&self) -> &'static str {
    code_to_glyph(self.weather_code)
  }

  pub fn compass_point(&self) -> &'static str {
    degrees_to_compass_point(self.wind_direction_degrees)
  }

  /// Observation time in the location's local zone, as requested with `timezone=auto`.
  pub fn observed_at(&self) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&self.observation_time, OBSERVATION_TIME_FORMAT).ok()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
  pub location: Location,
  pub weather: WeatherObservation,
}

impl From<(Location, WeatherObservation)> for WeatherReport {
  fn from((location, weather): (Location, WeatherObservation)) -> Self {
    Self { location, weather }
  }
}

impl WeatherReport {
  pub fn render_text(&self) -> String {
    let weather = &self.weather;
    let observed = weather.observed_at().map_or_else(
      || weather.observation_time.clone(),
      |time| time.format(DISPLAY_TIME_FORMAT).to_string(),
    );
    let temperature = round_half_up(weather.temperature_celsius);
    let wind = match weather.wind_direction_degrees {
      Some(degrees) => format!(
        "{} km/h • {} ({}°)",
        weather.wind_speed_kmh,
        weather.compass_point(),
        round_half_up(degrees)
      ),
      None => format!("{} km/h", weather.wind_speed_kmh),
    };

    format!(
      "{} {}\n\
      {} • {}\n\
      Temperature: {}°C (feels like {}°C)\n\
      Wind: {}\n\
      Weather code: {} — {}\n\
      Source: {}",
      weather.glyph(),
      self.location.display_name,
      weather.description(),
      observed,
      temperature,
      temperature,
      wind,
      weather.weather_code,
      weather.description(),
      SOURCE_NAME,
    )
  }
}

// Halves round towards positive infinity, so -2.5 becomes -2.
fn round_half_up(value: f64) -> i64 {
  (value + 0.5).floor() as i64
}
