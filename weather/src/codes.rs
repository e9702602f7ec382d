// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.

//! WMO weather interpretation codes as reported by Open-Meteo, and wind bearing labels.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

pub const UNKNOWN_DESCRIPTION: &str = "Unknown";
pub const UNKNOWN_GLYPH: &str = "🌈";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCode {
  pub code: i32,
  pub description: &'static str,
  pub glyph: &'static str,
}

const fn entry(code: i32, description: &'static str, glyph: &'static str) -> WeatherCode {
  WeatherCode {
    code,
    description,
    glyph,
  }
}

// Sorted by code; `lookup` relies on it.
static WEATHER_CODES: [WeatherCode; 28] = [
  entry(0, "Clear sky", "☀️"),
  entry(1, "Mainly clear", "🌤️"),
  entry(2, "Partly cloudy", "⛅"),
  entry(3, "Overcast", "☁️"),
  entry(45, "Fog", "🌫️"),
  entry(48, "Depositing rime fog", "🌫️"),
  entry(51, "Light drizzle", "🌧️"),
  entry(53, "Moderate drizzle", "🌧️"),
  entry(55, "Dense drizzle", "🌧️"),
  entry(56, "Freezing drizzle", "🧊🌧️"),
  entry(57, "Dense freezing drizzle", "🧊🌧️"),
  entry(61, "Slight rain", "🌧️"),
  entry(63, "Moderate rain", "🌧️"),
  entry(65, "Heavy rain", "⛈️"),
  entry(66, "Freezing rain", "🧊🌧️"),
  entry(67, "Heavy freezing rain", "🧊🌧️"),
  entry(71, "Slight snow fall", "🌨️"),
  entry(73, "Moderate snow fall", "🌨️"),
  entry(75, "Heavy snow fall", "❄️"),
  entry(77, "Snow grains", "🌨️"),
  entry(80, "Slight rain showers", "🌦️"),
  entry(81, "Moderate rain showers", "🌦️"),
  entry(82, "Violent rain showers", "⛈️"),
  entry(85, "Slight snow showers", "🌨️"),
  entry(86, "Heavy snow showers", "❄️"),
  entry(95, "Thunderstorm", "⛈️"),
  entry(96, "Thunderstorm with slight hail", "⛈️"),
  entry(99, "Thunderstorm with heavy hail", "⛈️"),
];

const COMPASS_POINTS: [&str; 16] = [
  "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
  "NNW",
];

pub fn lookup(code: i32) -> Option<&'static WeatherCode> {
  WEATHER_CODES
    .binary_search_by_key(&code, |entry| entry.code)
    .ok()
    .map(|index| &WEATHER_CODES[index])
}

pub fn code_to_description(code: i32) -> &'static str {
  lookup(code).map_or(UNKNOWN_DESCRIPTION, |entry| entry.description)
}

pub fn code_to_glyph(code: i32) -> &'static str {
  lookup(code).map_or(UNKNOWN_GLYPH, |entry| entry.glyph)
}

/// Maps a bearing in degrees to one of 16 compass labels.
///
/// The sector index wraps modulo 16, so bearings outside 0..=360 land on the
/// label of their equivalent in-range bearing. Absent or non-finite input
/// yields an empty string.
pub fn degrees_to_compass_point(degrees: Option<f64>) -> &'static str {
  match degrees {
    Some(degrees) if degrees.is_finite() => {
      let sector = (degrees / 22.5 + 0.5).floor() as i64;
      COMPASS_POINTS[sector.rem_euclid(16) as usize]
    }
    _ => "",
  }
}
