//! HTTP server
//!
//! Builds the axum router over the shared [`AppState`] and serves it.

pub mod handlers;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::gemini::{GeminiClient, GeminiConfig};
use crate::services::unsplash::{UnsplashClient, UnsplashConfig};
use crate::services::{ChatProvider, ImageProvider};
use crate::storage::chat::ChatStore;
use crate::storage::settings::ServerSettings;
use crate::types::config::ApiKeys;

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<dyn ChatProvider>,
    pub images: Arc<dyn ImageProvider>,
    pub store: Arc<ChatStore>,
}

impl AppState {
    pub fn new(
        chat: Arc<dyn ChatProvider>,
        images: Arc<dyn ImageProvider>,
        store: Arc<ChatStore>,
    ) -> Self {
        Self {
            chat,
            images,
            store,
        }
    }

    /// Wire up the real upstream clients
    pub fn from_settings(settings: &ServerSettings, keys: ApiKeys, store: ChatStore) -> Self {
        let chat = GeminiClient::new(GeminiConfig::from_settings(settings, keys.gemini));
        let images = UnsplashClient::new(UnsplashConfig::from_settings(settings, keys.unsplash));
        Self::new(Arc::new(chat), Arc::new(images), Arc::new(store))
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/api/chat", post(handlers::chat))
        .route("/api/images", get(handlers::images))
        .route("/api/colors", get(handlers::colors))
        .route("/api/vibes", get(handlers::vibes))
        .route("/api/vibes/:id", get(handlers::vibe))
        .route(
            "/api/session",
            get(handlers::get_session)
                .post(handlers::start_session)
                .delete(handlers::clear_session),
        )
        .route("/api/session/messages", post(handlers::add_session_message))
        .with_state(state)
}

/// CORS policy admitting the client origin
pub fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    match HeaderValue::from_str(allowed_origin) {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            tracing::warn!("Invalid allowed origin '{}': {}", allowed_origin, e);
            layer
        }
    }
}

/// Bind and serve until the process is stopped
pub async fn run(settings: ServerSettings, state: AppState) -> Result<(), ServerError> {
    let addr = settings.bind_addr();
    let app = router(state)
        .layer(cors_layer(&settings.allowed_origin))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("KIKO server running on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;
    use crate::types::image::ImageResult;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    struct Offline;

    #[async_trait]
    impl ChatProvider for Offline {
        fn name(&self) -> &str {
            "offline"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, ServiceError> {
            Err(ServiceError::Empty)
        }
    }

    #[async_trait]
    impl ImageProvider for Offline {
        fn name(&self) -> &str {
            "offline"
        }

        async fn search_photos(&self, _query: &str) -> Result<Vec<ImageResult>, ServiceError> {
            Err(ServiceError::Empty)
        }
    }

    fn state(dir: &tempfile::TempDir) -> AppState {
        AppState::new(
            Arc::new(Offline),
            Arc::new(Offline),
            Arc::new(ChatStore::new(dir.path())),
        )
    }

    fn from_origin(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/api/colors")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_cors_allows_client_origin() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(state(&dir)).layer(cors_layer("http://localhost:3000"));

        let response = app
            .oneshot(from_origin("http://localhost:3000"))
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:3000"))
        );
    }

    #[tokio::test]
    async fn test_cors_rejects_other_origin() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(state(&dir)).layer(cors_layer("http://localhost:3000"));

        let response = app
            .oneshot(from_origin("http://evil.example"))
            .await
            .unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_invalid_allowed_origin_sets_no_header() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(state(&dir)).layer(cors_layer("http://bad\norigin"));

        let response = app
            .oneshot(from_origin("http://localhost:3000"))
            .await
            .unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
