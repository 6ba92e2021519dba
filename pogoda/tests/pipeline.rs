// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use config::{Config, TRANSLATE_KEY_VAR, WEATHER_KEY_VAR};
use pogoda::TemperatureLookup;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer, weather_key: Option<&'static str>) -> Config {
  let mut config = Config::default();
  config.translate.base_url = format!("{}/translate", server.uri());
  config.weather.base_url = format!("{}/weather", server.uri());
  config.apply_env(|key| match key {
    TRANSLATE_KEY_VAR => Some("t-key".to_string()),
    WEATHER_KEY_VAR => weather_key.map(String::from),
    _ => None,
  });
  config
}

async fn mount_translation(server: &MockServer, calls: u64) {
  Mock::given(method("POST"))
    .and(path("/translate"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "data": { "translations": [{ "translatedText": "Moscow" }] }
    })))
    .expect(calls)
    .mount(server)
    .await;
}

#[tokio::test]
async fn moscow_round_trip() {
  let server = MockServer::start().await;
  mount_translation(&server, 1).await;

  Mock::given(method("GET"))
    .and(path("/weather"))
    .and(query_param("q", "Moscow"))
    .and(query_param("appid", "w-key"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "cod": 200,
      "name": "Moscow",
      "main": { "temp": -7.46, "feels_like": -12.1 }
    })))
    .expect(1)
    .mount(&server)
    .await;

  let lookup = TemperatureLookup::from_config(&test_config(&server, Some("w-key"))).unwrap();
  let message = lookup.lookup_temperature("Москва").await.unwrap();

  assert_eq!(message, "Температура в городе Москва: -7.5°C");
}

#[tokio::test]
async fn weather_key_checked_after_translation() {
  let server = MockServer::start().await;
  mount_translation(&server, 1).await;

  Mock::given(method("GET"))
    .and(path("/weather"))
    .respond_with(ResponseTemplate::new(200))
    .expect(0)
    .mount(&server)
    .await;

  let lookup = TemperatureLookup::from_config(&test_config(&server, None)).unwrap();
  let err = lookup.lookup_temperature("Москва").await.unwrap_err();

  assert_eq!(err.to_string(), "OpenWeatherMap API key not found");
}

#[tokio::test]
async fn unknown_city() {
  let server = MockServer::start().await;
  mount_translation(&server, 1).await;

  Mock::given(method("GET"))
    .and(path("/weather"))
    .respond_with(
      ResponseTemplate::new(404).set_body_json(json!({ "cod": "404", "message": "city not found" })),
    )
    .expect(1)
    .mount(&server)
    .await;

  let lookup = TemperatureLookup::from_config(&test_config(&server, Some("w-key"))).unwrap();
  let err = lookup.lookup_temperature("Москва").await.unwrap_err();

  assert_eq!(err.to_string(), "Город не найден");
}
