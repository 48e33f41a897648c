use std::future::Future;

use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::config::{STORE_CONNECT_TIMEOUT, STORE_REST_PATH};

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    /// Хранилище недоступно или ответ не декодируется
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// Хранилище ответило ошибкой; текст берём из его ответа
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },
}

/// Источник цитат. Единственная операция - прочитать всю коллекцию.
///
/// Строки отдаются как есть: сервер их не интерпретирует и не чинит.
pub(crate) trait QuoteStore: Send + Sync + 'static {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Value>, StoreError>> + Send;
}

/// Таблица в хранилище с REST-интерфейсом в стиле PostgREST (Supabase)
pub(crate) struct SupabaseStore {
    http: Client,
    endpoint: String,
    key: String,
}

impl SupabaseStore {
    pub(crate) fn new(
        base_url: &str,
        key: impl Into<String>,
        table: &str,
    ) -> Result<Self, StoreError> {
        let http = Client::builder()
            .connect_timeout(STORE_CONNECT_TIMEOUT)
            .build()?;

        let endpoint = format!(
            "{}/{}/{}",
            base_url.trim().trim_end_matches('/'),
            STORE_REST_PATH,
            table
        );

        Ok(Self {
            http,
            endpoint,
            key: key.into(),
        })
    }

    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl QuoteStore for SupabaseStore {
    async fn fetch_all(&self) -> Result<Vec<Value>, StoreError> {
        debug!("GET {}?select=*", self.endpoint);

        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[("select", "*")])
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Upstream {
                status,
                message: upstream_message(status, &body),
            });
        }

        Ok(resp.json::<Vec<Value>>().await?)
    }
}

// PostgREST кладёт текст ошибки в поле "message"
fn upstream_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(msg)) = obj.get("message") {
            return msg.clone();
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status.to_string()
    } else {
        body.to_string()
    }
}
