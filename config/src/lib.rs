// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod config;

pub use config::{
  Config, HttpConfig, ServerConfig, TranslateSection, WeatherSection, DEFAULT_CONFIG_PATH,
  TRANSLATE_KEY_VAR, WEATHER_KEY_VAR,
};
