// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::time::Duration;

/// Значения по умолчанию живут в крейте `config`; здесь только то,
/// что нужно клиенту. Отсутствующий ключ не ошибка: перевод вернёт
/// её при первом вызове.
#[derive(Debug, Clone)]
pub struct TranslateConfig {
  pub api_key: Option<String>,
  pub base_url: String,
  pub source_lang: String,
  pub target_lang: String,
  pub timeout: Duration,
}
