// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod config;
pub mod models;
pub mod service;

pub use config::WeatherConfig;
pub use models::temperature::Temperature;
pub use service::{WeatherProvider, WeatherService};

pub mod constants {
  pub(crate) const UNITS: &str = "metric";
  pub(crate) const SERVICE_NAME: &str = "OpenWeatherMap";
}
