// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use config::Config;
use error::Error;
use std::sync::Arc;
use tracing::{debug, instrument};
use translate::{GoogleTranslateClient, TranslateConfig, TranslationService};
use weather::{WeatherConfig, WeatherProvider, WeatherService};

/// Перевод названия города и запрос погоды, строго по очереди.
///
/// Состояния между запросами нет, поэтому один экземпляр можно
/// разделять между обработчиками.
pub struct TemperatureLookup {
  translator: Arc<dyn TranslationService>,
  weather: Arc<dyn WeatherProvider>,
}

impl TemperatureLookup {
  pub fn new(translator: Arc<dyn TranslationService>, weather: Arc<dyn WeatherProvider>) -> Self {
    Self {
      translator,
      weather,
    }
  }

  pub fn from_config(config: &Config) -> Result<Self, Error> {
    let translator = GoogleTranslateClient::new(TranslateConfig {
      api_key: config.translate.api_key.clone(),
      base_url: config.translate.base_url.clone(),
      source_lang: config.translate.source_lang.clone(),
      target_lang: config.translate.target_lang.clone(),
      timeout: config.timeout(),
    })?;

    let weather = WeatherService::new(WeatherConfig {
      api_key: config.weather.api_key.clone(),
      base_url: config.weather.base_url.clone(),
      timeout: config.timeout(),
    })?;

    Ok(Self::new(Arc::new(translator), Arc::new(weather)))
  }

  /// Ключ погодного API проверяется только после перевода.
  #[instrument(skip(self))]
  pub async fn lookup_temperature(&self, city: &str) -> Result<String, Error> {
    if city.trim().is_empty() {
      return Err(Error::EmptyCity);
    }

    let translated = self.translator.translate(city).await?;
    debug!("Looking up weather for {}", translated);

    let temperature = self.weather.fetch_temperature(&translated).await?;
    Ok(format!("Температура в городе {}: {}", city, temperature))
  }
}
