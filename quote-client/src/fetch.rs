use log::debug;
use quote_core::Quote;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("failed to fetch quotes: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to fetch quotes: {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Загружает всю коллекцию одним запросом.
///
/// Неуспешный статус и неразборчивое тело - ошибка; повторов нет.
/// Таймаута нет: зависший сервер оставляет клиента в состоянии загрузки.
pub(crate) fn fetch_quotes(url: &str) -> Result<Vec<Quote>, FetchError> {
    debug!("GET {url}");
    // у blocking-клиента по умолчанию 30s на весь запрос
    let http = reqwest::blocking::Client::builder().timeout(None).build()?;
    let resp = http.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().unwrap_or_default().trim().to_string();
        return Err(FetchError::Status { status, body });
    }

    Ok(resp.json::<Vec<Quote>>()?)
}
