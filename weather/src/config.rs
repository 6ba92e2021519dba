// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct WeatherConfig {
  pub api_key: Option<String>,
  pub base_url: String,
  pub timeout: Duration,
}
