use std::time::Duration;

pub(crate) const BIND_ADDR: &str = "0.0.0.0:3000";

/// Таблица в хранилище, из которой читаем всё
pub(crate) const QUOTES_TABLE: &str = "quotes";

pub(crate) use quote_core::QUOTES_PATH as QUOTES_ROUTE;

/// Путь REST-интерфейса хранилища (PostgREST)
pub(crate) const STORE_REST_PATH: &str = "rest/v1";

pub(crate) const STORE_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
