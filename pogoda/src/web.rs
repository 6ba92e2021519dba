// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{lookup::TemperatureLookup, template::render_index};
use axum::{
  extract::{rejection::FormRejection, Form, State},
  response::Html,
  routing::{get, post},
  Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct AppState {
  lookup: Arc<TemperatureLookup>,
}

#[derive(Debug, Deserialize)]
pub struct CityForm {
  #[serde(default)]
  city: String,
}

pub fn router(lookup: TemperatureLookup, body_limit: usize) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/get-temperature", post(get_temperature))
    .layer(RequestBodyLimitLayer::new(body_limit))
    .with_state(AppState {
      lookup: Arc::new(lookup),
    })
}

async fn index() -> Html<String> {
  Html(render_index(None))
}

/// Ошибка любого этапа показывается на странице текстом, код ответа всегда 200.
/// Запрос без формы обрабатывается как пустой город.
#[instrument(skip_all)]
async fn get_temperature(
  State(state): State<AppState>,
  form: Result<Form<CityForm>, FormRejection>,
) -> Html<String> {
  let city = match form {
    Ok(Form(form)) => form.city,
    Err(e) => {
      debug!("Form rejected: {}", e);
      String::new()
    }
  };

  let message = match state.lookup.lookup_temperature(&city).await {
    Ok(message) => {
      info!("{}", message);
      message
    }
    Err(e) => {
      warn!("Temperature lookup failed: {}", e);
      e.to_string()
    }
  };

  Html(render_index(Some(&message)))
}
