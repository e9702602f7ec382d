// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use config::Config;
use std::{env, io};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, instrument};
use weather::{LocationWeatherResolver, SearchSession, WeatherConfig, WeatherReport};

const CONFIG_PATH: &str = "weathernow.toml";
const PROMPT: &str = "City (e.g., London, Tokyo, Mumbai): ";
const EXAMPLE_CITIES: &str = "Example cities: London, New York, Mumbai, Tokyo, Sydney";

#[derive(Debug, Clone, Default)]
pub struct CliArgs {
  json: bool,
  query: Option<String>,
}

impl CliArgs {
  fn parse<I: IntoIterator<Item = String>>(args: I) -> Self {
    let mut json = false;
    let mut words = Vec::new();
    for arg in args {
      if arg == "--json" {
        json = true;
      } else {
        words.push(arg);
      }
    }

    Self {
      json,
      query: (!words.is_empty()).then(|| words.join(" ")),
    }
  }
}

pub struct SearchRunner {
  session: SearchSession,
  json: bool,
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().with_writer(io::stderr).init();
}

#[tokio::main]
async fn main() -> Result<()> {
  setup_logging();

  let args = CliArgs::parse(env::args().skip(1));
  let config = Config::load_or_default(CONFIG_PATH)
    .with_context(|| format!("Failed to load {}", CONFIG_PATH))?;
  let runner = SearchRunner::new(&config, args.json)?;

  match args.query {
    Some(query) => {
      if !runner.run_once(&query).await? {
        std::process::exit(1);
      }
      Ok(())
    }
    None => runner.run_interactive().await,
  }
}

impl SearchRunner {
  #[instrument(skip(config))]
  pub fn new(config: &Config, json: bool) -> Result<Self> {
    let weather_config = WeatherConfig::try_from(config).context("Invalid configuration")?;
    let resolver =
      LocationWeatherResolver::new(weather_config).context("Failed to create weather client")?;

    Ok(Self {
      session: SearchSession::new(resolver),
      json,
    })
  }

  /// Runs one search and prints its outcome. Returns `false` when the search failed.
  #[instrument(skip(self))]
  pub async fn run_once(&self, query: &str) -> Result<bool> {
    match self.session.search(query).await {
      Ok(report) => {
        println!("{}", self.render(&report)?);
        Ok(true)
      }
      Err(e) => {
        error!("Search failed: {:?}", e);
        eprintln!("{}", e.user_message());
        Ok(false)
      }
    }
  }

  pub async fn run_interactive(&self) -> Result<()> {
    println!("{}", EXAMPLE_CITIES);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
      stdout.write_all(PROMPT.as_bytes()).await?;
      stdout.flush().await?;

      let Some(line) = lines.next_line().await.context("Failed to read query")? else {
        break;
      };
      self.run_once(&line).await?;
    }

    Ok(())
  }

  fn render(&self, report: &WeatherReport) -> Result<String> {
    if self.json {
      serde_json::to_string_pretty(report).context("Failed to serialize weather report")
    } else {
      Ok(report.render_text())
    }
  }
}
