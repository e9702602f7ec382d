// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  models::api::{ForecastResponse, GeocodingResult},
  service::{ForecastApi, GeocodingApi},
};
use async_trait::async_trait;
use error::Error;
use serde_json::json;
use std::{
  collections::HashMap,
  sync::{Arc, Mutex},
};
use tokio::sync::Notify;

pub(crate) fn candidate(
  name: &str,
  admin1: Option<&str>,
  country: Option<&str>,
  latitude: f64,
  longitude: f64,
) -> GeocodingResult {
  GeocodingResult {
    name: name.to_string(),
    latitude,
    longitude,
    admin1: admin1.map(str::to_string),
    country: country.map(str::to_string),
    timezone: Some("UTC".into()),
  }
}

pub(crate) fn current_weather(
  temperature: f64,
  windspeed: f64,
  winddirection: f64,
  weathercode: i32,
) -> serde_json::Value {
  json!({
    "temperature": temperature,
    "windspeed": windspeed,
    "winddirection": winddirection,
    "weathercode": weathercode,
    "time": "2026-10-15T12:00"
  })
}

#[derive(Default)]
pub(crate) struct FakeGeocoder {
  results: HashMap<String, Vec<GeocodingResult>>,
  gates: HashMap<String, Arc<Notify>>,
  calls: Arc<Mutex<Vec<String>>>,
  fail: bool,
}

impl FakeGeocoder {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn failing() -> Self {
    Self {
      fail: true,
      ..Self::default()
    }
  }

  pub(crate) fn with(mut self, name: &str, results: Vec<GeocodingResult>) -> Self {
    self.results.insert(name.to_string(), results);
    self
  }

  /// Holds searches for `name` until `gate` is notified.
  pub(crate) fn gated(mut self, name: &str, gate: Arc<Notify>) -> Self {
    self.gates.insert(name.to_string(), gate);
    self
  }

  pub(crate) fn calls(&self) -> Arc<Mutex<Vec<String>>> {
    Arc::clone(&self.calls)
  }
}

#[async_trait]
impl GeocodingApi for FakeGeocoder {
  async fn search(&self, name: &str) -> Result<Vec<GeocodingResult>, Error> {
    self.calls.lock().unwrap().push(name.to_string());
    if let Some(gate) = self.gates.get(name) {
      gate.notified().await;
    }
    if self.fail {
      return Err(Error::Geocoding("API request failed with status: 500".into()));
    }
    Ok(self.results.get(name).cloned().unwrap_or_default())
  }
}

pub(crate) struct FakeForecaster {
  current_weather: Option<serde_json::Value>,
  calls: Arc<Mutex<Vec<(f64, f64)>>>,
  fail: bool,
}

impl FakeForecaster {
  pub(crate) fn returning(current_weather: Option<serde_json::Value>) -> Self {
    Self {
      current_weather,
      calls: Arc::default(),
      fail: false,
    }
  }

  pub(crate) fn failing() -> Self {
    Self {
      fail: true,
      ..Self::returning(None)
    }
  }

  pub(crate) fn calls(&self) -> Arc<Mutex<Vec<(f64, f64)>>> {
    Arc::clone(&self.calls)
  }
}

#[async_trait]
impl ForecastApi for FakeForecaster {
  async fn current_weather(
    &self,
    latitude: f64,
    longitude: f64,
  ) -> Result<ForecastResponse, Error> {
    self.calls.lock().unwrap().push((latitude, longitude));
    if self.fail {
      return Err(Error::Weather("Failed to send API request: connection refused".into()));
    }
    Ok(ForecastResponse {
      current_weather: self.current_weather.clone(),
    })
  }
}
