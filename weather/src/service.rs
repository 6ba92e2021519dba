// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::WeatherConfig,
  constants::*,
  models::{api::WeatherResponse, temperature::Temperature},
};
use async_trait::async_trait;
use error::Error;
use tracing::{debug, info, instrument};
use url::Url;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
  /// Текущая температура в городе, например `"5.2°C"`.
  async fn fetch_temperature(&self, city: &str) -> Result<String, Error>;
}

pub struct WeatherService {
  config: WeatherConfig,
  client: reqwest::Client,
}

impl WeatherService {
  pub fn new(config: WeatherConfig) -> Result<Self, Error> {
    let client = reqwest::Client::builder().timeout(config.timeout).build()?;
    Ok(Self { config, client })
  }

  fn build_api_url(&self, city: &str, api_key: &str) -> Result<Url, Error> {
    Url::parse_with_params(
      &self.config.base_url,
      &[("q", city), ("appid", api_key), ("units", UNITS)],
    )
    .map_err(|e| Error::ConfigError(format!("Invalid weather API URL: {}", e)))
  }

  #[instrument(skip(self))]
  async fn fetch_weather(&self, city: &str) -> Result<Temperature, Error> {
    let api_key = self
      .config
      .api_key
      .as_deref()
      .ok_or(Error::MissingApiKey(SERVICE_NAME))?;

    let url = self.build_api_url(city, api_key)?;
    let response = self.client.get(url).send().await?;
    debug!("Weather API responded with status {}", response.status());

    let body = response.text().await?;
    let weather_data: WeatherResponse =
      serde_json::from_str(&body).map_err(|e| Error::ParseError(e.to_string()))?;

    Temperature::from_response(weather_data)
  }
}

#[async_trait]
impl WeatherProvider for WeatherService {
  async fn fetch_temperature(&self, city: &str) -> Result<String, Error> {
    let temperature = self.fetch_weather(city).await?;
    info!("Current temperature in {}: {}", city, temperature);
    Ok(temperature.to_string())
  }
}
