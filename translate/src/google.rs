// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::config::TranslateConfig;
use async_trait::async_trait;
use error::Error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const SERVICE_NAME: &str = "Google Translate";

#[derive(Deserialize, Debug)]
struct TranslationResponse {
  data: TranslationData,
}

#[derive(Deserialize, Debug)]
struct TranslationData {
  #[serde(default)]
  translations: Vec<Translation>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Translation {
  translated_text: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
  message: String,
}

#[derive(Serialize, Debug)]
struct TranslationRequest<'a> {
  q: [&'a str; 1],
  source: &'a str,
  target: &'a str,
  format: &'static str,
}

#[async_trait]
pub trait TranslationService: Send + Sync {
  /// Переводит название города на целевой язык.
  async fn translate(&self, text: &str) -> Result<String, Error>;
}

#[derive(Clone, Debug)]
pub struct GoogleTranslateClient {
  config: TranslateConfig,
  client: Client,
}

impl GoogleTranslateClient {
  pub fn new(config: TranslateConfig) -> Result<Self, Error> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { config, client })
  }

  fn api_key(&self) -> Result<&str, Error> {
    self
      .config
      .api_key
      .as_deref()
      .ok_or(Error::MissingApiKey(SERVICE_NAME))
  }
}

#[async_trait]
impl TranslationService for GoogleTranslateClient {
  #[instrument(skip(self))]
  async fn translate(&self, text: &str) -> Result<String, Error> {
    let api_key = self.api_key()?;

    let request_body = TranslationRequest {
      q: [text],
      source: &self.config.source_lang,
      target: &self.config.target_lang,
      format: "text",
    };

    let response = self
      .client
      .post(&self.config.base_url)
      .header(API_KEY_HEADER, api_key)
      .json(&request_body)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error.message,
        Err(_) => format!("request failed with status: {}", status),
      };
      warn!("Translation request failed: {}", message);
      return Err(Error::TranslationError(message));
    }

    let response_data: TranslationResponse = response
      .json()
      .await
      .map_err(|e| Error::ParseError(e.to_string()))?;

    let translated = response_data
      .data
      .translations
      .into_iter()
      .next()
      .map(|t| t.translated_text)
      .ok_or(Error::TranslationNotFound)?;

    debug!("Translated {:?} -> {:?}", text, translated);
    Ok(translated)
  }
}
