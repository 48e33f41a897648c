use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use log::{info, warn};
use serde_json::Value;
use thiserror::Error;

use crate::config::QUOTES_ROUTE;
use crate::store::{QuoteStore, StoreError};

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        warn!("{QUOTES_ROUTE} failed: {self}");
        (status, self.to_string()).into_response()
    }
}

pub(crate) fn build_router<S: QuoteStore>(store: Arc<S>) -> Router {
    Router::new()
        .route(QUOTES_ROUTE, get(quotes_handler::<S>))
        .with_state(store)
}

/// Вся коллекция как есть, в порядке и в виде хранилища
pub(crate) async fn quotes_handler<S: QuoteStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<Value>>, AppError> {
    let quotes = store.fetch_all().await?;
    info!("serving {} quotes", quotes.len());
    Ok(Json(quotes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SupabaseStore;
    use axum::{
        body::{self, Body},
        http::{Request, header::CONTENT_TYPE},
    };
    use serde_json::json;
    use tokio::net::TcpListener;
    use tower::ServiceExt;

    /// Хранилище в памяти: либо строки, либо текст ошибки
    struct StaticStore(Result<Vec<Value>, String>);

    impl QuoteStore for StaticStore {
        async fn fetch_all(&self) -> Result<Vec<Value>, StoreError> {
            self.0.clone().map_err(|message| StoreError::Upstream {
                status: StatusCode::BAD_REQUEST,
                message,
            })
        }
    }

    async fn request(router: Router, uri: &str) -> (StatusCode, String, Vec<u8>) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, content_type, bytes.to_vec())
    }

    #[tokio::test]
    async fn returns_all_quotes_as_json() {
        let rows = vec![
            json!({ "id": 1, "text": "Hope is a feathered thing", "author": "Emily", "tags": ["hope", "birds"] }),
            json!({ "id": 2, "text": "Be water", "author": "Bruce", "source": "Interview" }),
        ];

        let (status, content_type, bytes) =
            request(build_router(Arc::new(StaticStore(Ok(rows.clone())))), "/api/quotes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");

        let payload: Vec<Value> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload, rows);
    }

    #[tokio::test]
    async fn malformed_rows_pass_through_unchanged() {
        const ROWS: &str =
            r#"[{"id":1,"text":42,"author":null,"source":false,"tags":"hope, birds"}]"#;

        let upstream = Router::new().route(
            "/rest/v1/quotes",
            get(|| async { ([(CONTENT_TYPE, "application/json")], ROWS) }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });

        let store = SupabaseStore::new(&format!("http://{addr}"), "k", "quotes").unwrap();
        let (status, _, bytes) = request(build_router(Arc::new(store)), "/api/quotes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(String::from_utf8(bytes).unwrap(), ROWS);
    }

    #[tokio::test]
    async fn empty_collection_is_empty_array() {
        let (status, _, bytes) =
            request(build_router(Arc::new(StaticStore(Ok(Vec::new())))), "/api/quotes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(bytes, b"[]");
    }

    #[tokio::test]
    async fn store_failure_is_500_with_plain_text() {
        let store = StaticStore(Err("relation \"quotes\" does not exist".into()));
        let (status, content_type, bytes) = request(build_router(Arc::new(store)), "/api/quotes").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(content_type.starts_with("text/plain"), "{content_type}");
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "relation \"quotes\" does not exist"
        );
    }

    #[tokio::test]
    async fn other_paths_are_not_found() {
        let (status, _, _) =
            request(build_router(Arc::new(StaticStore(Ok(Vec::new())))), "/api/authors").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
