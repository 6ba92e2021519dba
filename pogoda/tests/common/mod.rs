// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
#![allow(dead_code)]

use async_trait::async_trait;
use error::Error;
use pogoda::TemperatureLookup;
use std::sync::{Arc, Mutex};
use translate::TranslationService;
use weather::WeatherProvider;

type Reply = fn(&str) -> Result<String, Error>;

/// Заглушка, запоминающая аргументы каждого вызова.
pub struct Stub {
  reply: Reply,
  calls: Mutex<Vec<String>>,
}

impl Stub {
  pub fn new(reply: Reply) -> Arc<Self> {
    Arc::new(Self {
      reply,
      calls: Mutex::new(Vec::new()),
    })
  }

  pub fn calls(&self) -> Vec<String> {
    self.calls.lock().unwrap().clone()
  }

  fn call(&self, arg: &str) -> Result<String, Error> {
    self.calls.lock().unwrap().push(arg.to_string());
    (self.reply)(arg)
  }
}

#[async_trait]
impl TranslationService for Stub {
  async fn translate(&self, text: &str) -> Result<String, Error> {
    self.call(text)
  }
}

#[async_trait]
impl WeatherProvider for Stub {
  async fn fetch_temperature(&self, city: &str) -> Result<String, Error> {
    self.call(city)
  }
}

pub fn lookup(translator: &Arc<Stub>, weather: &Arc<Stub>) -> TemperatureLookup {
  TemperatureLookup::new(translator.clone(), weather.clone())
}
