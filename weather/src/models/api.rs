// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

const SUCCESS_CODE: f64 = 200.0;

/// Ответ OpenWeatherMap. Все поля необязательны: при ошибке сервис
/// присылает только `cod` и `message`.
#[derive(Debug, Deserialize, Clone)]
pub struct WeatherResponse {
  #[serde(default)]
  pub cod: Option<ResponseCode>,
  #[serde(default)]
  pub main: Option<MainWeather>,
  #[serde(default)]
  pub message: Option<serde_json::Value>,
}

/// При успехе `cod` приходит числом, при ошибке строкой (`"404"`).
/// Успехом считается только число 200.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ResponseCode {
  Number(f64),
  Text(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct MainWeather {
  #[serde(default)]
  pub temp: Option<f64>,
}

impl ResponseCode {
  pub fn is_success(&self) -> bool {
    match self {
      ResponseCode::Number(code) => *code == SUCCESS_CODE,
      ResponseCode::Text(_) => false,
    }
  }
}

impl std::fmt::Display for ResponseCode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ResponseCode::Number(code) => write!(f, "{}", code),
      ResponseCode::Text(code) => write!(f, "{}", code),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(body: &str) -> WeatherResponse {
    serde_json::from_str(body).unwrap()
  }

  #[test]
  fn numeric_and_text_codes() {
    assert!(parse(r#"{"cod": 200}"#).cod.unwrap().is_success());
    assert!(!parse(r#"{"cod": 404}"#).cod.unwrap().is_success());
    assert!(!parse(r#"{"cod": "404", "message": "city not found"}"#)
      .cod
      .unwrap()
      .is_success());
    assert!(!parse(r#"{"cod": "200"}"#).cod.unwrap().is_success());
  }

  #[test]
  fn main_is_optional() {
    let response = parse(r#"{"cod": 401, "message": "Invalid API key"}"#);
    assert!(response.main.is_none());

    let response = parse(r#"{"main": {"temp": 5, "humidity": 80}}"#);
    assert!(response.cod.is_none());
    assert_eq!(response.main.unwrap().temp, Some(5.0));
  }

  #[test]
  fn temp_is_optional() {
    assert_eq!(parse(r#"{"cod": 200, "main": {}}"#).main.unwrap().temp, None);
    assert_eq!(parse(r#"{"main": {"temp": null}}"#).main.unwrap().temp, None);
  }
}
