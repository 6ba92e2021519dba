// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use config::{Config, DEFAULT_CONFIG_PATH};
use pogoda::{web, TemperatureLookup};
use std::{env, path::PathBuf};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(env_filter())
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    error!("Failed to listen for shutdown signal: {}", e);
  }
  info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
  let dotenv = dotenvy::dotenv();
  setup_logging();
  if let Err(e) = dotenv {
    debug!("No .env file loaded: {}", e);
  }

  let config_path: PathBuf = env::var("POGODA_CONFIG")
    .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    .into();
  let config = Config::load(&config_path)?;

  for var in config.missing_secrets() {
    warn!("{} is not set, lookups will fail at the stage that needs it", var);
  }

  let lookup = TemperatureLookup::from_config(&config).context("Failed to create API clients")?;
  let app = web::router(lookup, config.server.body_limit);

  let listener = TcpListener::bind(config.server.addr)
    .await
    .with_context(|| format!("Failed to bind {}", config.server.addr))?;
  info!("Listening on http://{}", config.server.addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

  Ok(())
}
