// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

/// Ошибки конвейера поиска температуры.
///
/// Текст каждой ошибки показывается пользователю как есть,
/// поэтому варианты не оборачивают друг друга.
#[derive(ThisError, Debug)]
pub enum Error {
  #[error("Введите город")]
  EmptyCity,
  #[error("{0} API key not found")]
  MissingApiKey(&'static str),
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("Translation not found")]
  TranslationNotFound,
  #[error("Translation API error: {0}")]
  TranslationError(String),
  #[error("Город не найден")]
  CityNotFound,
  #[error("HTTP error: {0}")]
  HttpError(#[from] reqwest::Error),
  #[error("Failed to parse response: {0}")]
  ParseError(String),
}
