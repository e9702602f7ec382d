// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("Invalid query: {0}")]
  Validation(String),
  #[error("Geocoding request failed: {0}")]
  Geocoding(String),
  #[error("No matching location: {0}")]
  NotFound(String),
  #[error("Weather request failed: {0}")]
  Weather(String),
  #[error("Current weather data unavailable")]
  DataUnavailable,
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
}

impl Error {
  /// Message shown to the user for a failed search.
  pub fn user_message(&self) -> String {
    match self {
      Error::Validation(_) => "Please enter a city name.".to_string(),
      Error::NotFound(_) => "No matching location found. Try a different city name.".to_string(),
      Error::DataUnavailable => "Weather data unavailable for this location.".to_string(),
      Error::Geocoding(_) | Error::Weather(_) => {
        "Network or API error. Please try again.".to_string()
      }
      Error::ConfigError(message) => format!("Configuration error: {}", message),
      Error::IoError(_) => "File operation failed. Please check file permissions.".to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn search_failures_map_to_fixed_messages() {
    assert_eq!(
      Error::Validation("empty".into()).user_message(),
      "Please enter a city name."
    );
    assert_eq!(
      Error::NotFound("Atlantis".into()).user_message(),
      "No matching location found. Try a different city name."
    );
    assert_eq!(
      Error::DataUnavailable.user_message(),
      "Weather data unavailable for this location."
    );
  }

  #[test]
  fn transport_failures_share_one_message() {
    let geocoding = Error::Geocoding("503 Service Unavailable".into());
    let weather = Error::Weather("connection reset".into());
    assert_eq!(geocoding.user_message(), weather.user_message());
    assert_eq!(
      geocoding.user_message(),
      "Network or API error. Please try again."
    );
  }

  #[test]
  fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: Error = io.into();
    assert!(matches!(err, Error::IoError(_)));
  }
}
