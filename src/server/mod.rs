// src/server/mod.rs

//! Inbound HTTP API.
//!
//! - `GET /api/word`: today's record, always `200 OK`
//! - `GET /healthz`: liveness probe

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, PRAGMA};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::Result;
use crate::models::{Config, WordPayload};
use crate::pipeline::{DailyCache, Enricher};
use crate::utils::{self, http};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    enricher: Arc<Enricher>,
    cache: Arc<DailyCache>,
    no_store: bool,
}

impl AppState {
    pub fn new(enricher: Enricher, cache: DailyCache, no_store: bool) -> Self {
        Self {
            enricher: Arc::new(enricher),
            cache: Arc::new(cache),
            no_store,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = http::create_async_client(&config.http)?;
        let enricher = Enricher::from_config(config, client)?;
        Ok(Self::new(
            enricher,
            DailyCache::from_config(&config.cache),
            config.server.no_store,
        ))
    }

    fn cache_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if self.no_store {
            headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
            headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        } else {
            let max_age = format!("public, max-age={}", self.cache.ttl().as_secs());
            if let Ok(value) = HeaderValue::from_str(&max_age) {
                headers.insert(CACHE_CONTROL, value);
            }
        }
        headers
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/word", get(word_handler))
        .with_state(state)
}

/// Bind `config.server.bind` and serve until Ctrl-C.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let state = AppState::from_config(config)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn word_handler(State(state): State<AppState>) -> impl IntoResponse {
    let today = utils::today();
    let record = state
        .cache
        .get_or_compute(today, || state.enricher.build_record_for(today))
        .await;
    (state.cache_headers(), Json(WordPayload::from_record(&record)))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::error::AppError;
    use crate::models::{LexicalEntry, WordPool};
    use crate::services::{DateIndexer, DefinitionSource, Translate};

    struct OfflineDictionary;

    #[async_trait]
    impl DefinitionSource for OfflineDictionary {
        async fn fetch_definition(&self, word: &str) -> Result<LexicalEntry> {
            Err(AppError::shape("dictionary", format!("offline: {word}")))
        }
    }

    struct OfflineTranslator;

    #[async_trait]
    impl Translate for OfflineTranslator {
        async fn try_translate(&self, _text: &str) -> Result<String> {
            Err(AppError::shape("translator", "offline"))
        }
    }

    fn state(no_store: bool) -> AppState {
        let enricher = Enricher::new(
            WordPool::new(["serendipity"]).unwrap(),
            DateIndexer::default(),
            Arc::new(OfflineDictionary),
            Arc::new(OfflineTranslator),
        );
        AppState::new(enricher, DailyCache::new(Duration::from_secs(600), false), no_store)
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn word_endpoint_serves_fallback_with_no_store() {
        let response = get(router(state(true)), "/api/word").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CACHE_CONTROL], "no-store");
        assert_eq!(response.headers()[PRAGMA], "no-cache");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: WordPayload = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload.ingles, "hello");
        assert_eq!(payload.espanol, "hola");
        assert_eq!(payload.sinonimos, vec!["hi (hola)", "greetings (saludos)"]);
        assert!(payload.id > 0);
    }

    #[tokio::test]
    async fn word_endpoint_can_allow_caching() {
        let response = get(router(state(false)), "/api/word").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CACHE_CONTROL], "public, max-age=600");
        assert!(response.headers().get(PRAGMA).is_none());
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let response = get(router(state(true)), "/healthz").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = get(router(state(true)), "/api/words").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
