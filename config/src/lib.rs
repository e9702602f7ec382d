// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod config;

pub use config::{
  Config, ForecastConfig, GeocodingConfig, HttpConfig, DEFAULT_FORECAST_URL,
  DEFAULT_GEOCODING_URL, DEFAULT_LANGUAGE, DEFAULT_RESULT_COUNT, DEFAULT_TIMEOUT_SECS,
  DEFAULT_USER_AGENT,
};
