// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::Context;
use serde::Deserialize;
use std::{env, fs, net::SocketAddr, path::Path, time::Duration};
use tracing::{debug, instrument};

pub const DEFAULT_CONFIG_PATH: &str = "pogoda.toml";
pub const TRANSLATE_KEY_VAR: &str = "GOOGLE_TRANSLATE_API_KEY";
pub const WEATHER_KEY_VAR: &str = "OPENWEATHERMAP_API_KEY";

/// Настройки сервиса. Создаются один раз при старте и передаются
/// клиентам явно; ключи API в файл не попадают и берутся из окружения.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub server: ServerConfig,
  pub translate: TranslateSection,
  pub weather: WeatherSection,
  pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub addr: SocketAddr,
  pub body_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslateSection {
  pub base_url: String,
  pub source_lang: String,
  pub target_lang: String,
  #[serde(skip)]
  pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherSection {
  pub base_url: String,
  #[serde(skip)]
  pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
  pub timeout_secs: u64,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
      body_limit: 16 * 1024,
    }
  }
}

impl Default for TranslateSection {
  fn default() -> Self {
    Self {
      base_url: "https://translation.googleapis.com/language/translate/v2".into(),
      source_lang: "ru".into(),
      target_lang: "en".into(),
      api_key: None,
    }
  }
}

impl Default for WeatherSection {
  fn default() -> Self {
    Self {
      base_url: "https://api.openweathermap.org/data/2.5/weather".into(),
      api_key: None,
    }
  }
}

impl Default for HttpConfig {
  fn default() -> Self {
    Self { timeout_secs: 10 }
  }
}

impl Config {
  /// Читает файл настроек (если он есть) и подмешивает ключи из окружения.
  #[instrument]
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let mut config = if path.exists() {
      Self::from_file(path)?
    } else {
      debug!("Config file {} not found, using defaults", path.display());
      Self::default()
    };
    config.apply_env(|key| env::var(key).ok());
    Ok(config)
  }

  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Self = toml::from_str(&content)
      .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    debug!("Loaded configuration successfully");
    Ok(config)
  }

  /// Пустые значения считаются отсутствующими.
  pub fn apply_env<F>(&mut self, lookup: F)
  where
    F: Fn(&str) -> Option<String>,
  {
    let secret = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    self.translate.api_key = secret(TRANSLATE_KEY_VAR);
    self.weather.api_key = secret(WEATHER_KEY_VAR);
  }

  /// Имена переменных окружения, для которых ключ не задан.
  pub fn missing_secrets(&self) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if self.translate.api_key.is_none() {
      missing.push(TRANSLATE_KEY_VAR);
    }
    if self.weather.api_key.is_none() {
      missing.push(WEATHER_KEY_VAR);
    }
    missing
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.http.timeout_secs)
  }
}
