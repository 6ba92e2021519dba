// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::api::WeatherResponse;
use error::Error;
use std::fmt;
use tracing::warn;

/// Температура в градусах Цельсия.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature(pub f64);

impl Temperature {
  /// `cod`, отличный от 200, и отсутствие `main.temp` одинаково
  /// превращаются в `CityNotFound`.
  pub(crate) fn from_response(response: WeatherResponse) -> Result<Self, Error> {
    if let Some(cod) = response.cod.as_ref().filter(|cod| !cod.is_success()) {
      warn!(
        "Weather API returned code {}: {}",
        cod,
        response.message.as_ref().map(|m| m.to_string()).unwrap_or_default()
      );
      return Err(Error::CityNotFound);
    }

    match response.main.and_then(|main| main.temp) {
      Some(temp) => Ok(Self(temp)),
      None => {
        warn!("Weather API response has no temperature data");
        Err(Error::CityNotFound)
      }
    }
  }
}

impl fmt::Display for Temperature {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:.1}°C", self.0)
  }
}
