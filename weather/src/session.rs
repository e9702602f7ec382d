// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{models::weather::WeatherReport, service::LocationWeatherResolver};
use error::Error;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
  #[default]
  Idle,
  Loading {
    query: String,
  },
  Ready(WeatherReport),
  Failed {
    message: String,
  },
}

/// The current search result slot of one user session.
///
/// Overlapping searches may run concurrently. Each one takes a generation
/// number when it starts, and only the newest generation may publish its
/// outcome, so a slow earlier response never replaces a later one.
pub struct SearchSession {
  resolver: LocationWeatherResolver,
  generation: AtomicU64,
  state: RwLock<SearchState>,
}

impl SearchSession {
  pub fn new(resolver: LocationWeatherResolver) -> Self {
    Self {
      resolver,
      generation: AtomicU64::new(0),
      state: RwLock::new(SearchState::Idle),
    }
  }

  pub async fn state(&self) -> SearchState {
    self.state.read().await.clone()
  }

  #[instrument(skip(self))]
  pub async fn search(&self, query: &str) -> Result<WeatherReport, Error> {
    let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
    *self.state.write().await = SearchState::Loading {
      query: query.trim().to_string(),
    };

    let outcome = self.resolver.resolve(query).await.map(WeatherReport::from);
    let next = match &outcome {
      Ok(report) => SearchState::Ready(report.clone()),
      Err(e) => {
        warn!("Search for {:?} failed: {}", query, e);
        SearchState::Failed {
          message: e.user_message(),
        }
      }
    };

    let mut state = self.state.write().await;
    if self.generation.load(Ordering::SeqCst) == generation {
      *state = next;
    } else {
      info!("Discarding stale result of search #{}", generation);
    }

    outcome
  }
}
