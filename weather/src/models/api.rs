// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

/// `GET /v1/search` body. Open-Meteo omits `results` entirely when nothing matches.
#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingResponse {
  pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingResult {
  pub name: String,
  pub latitude: f64,
  pub longitude: f64,
  pub admin1: Option<String>,
  pub country: Option<String>,
  pub timezone: Option<String>,
}

/// `GET /v1/forecast?current_weather=true` body.
///
/// `current_weather` is kept as raw JSON so it can be passed through verbatim.
#[derive(Debug, Deserialize, Clone)]
pub struct ForecastResponse {
  pub current_weather: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CurrentWeather {
  pub temperature: f64,
  pub windspeed: f64,
  pub winddirection: Option<f64>,
  pub weathercode: i32,
  pub time: String,
}
