// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const MESSAGE_PLACEHOLDER: &str = "{{message}}";

pub fn render_index(message: Option<&str>) -> String {
  let block = message
    .map(|m| format!("<p class=\"message\">{}</p>", escape_html(m)))
    .unwrap_or_default();
  INDEX_TEMPLATE.replace(MESSAGE_PLACEHOLDER, &block)
}

fn escape_html(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      _ => escaped.push(c),
    }
  }
  escaped
}
