//! Route handlers
//!
//! The proxy endpoints never report failure to the caller: upstream errors are
//! logged and replaced with canned content under `success: true`.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::AppState;
use crate::services::moodboard_prompt;
use crate::services::palettes::{self, Palette, DEFAULT_THEME};
use crate::storage::chat::{generate_assistant_reply, ChatStore};
use crate::types::image::ImageResult;
use crate::types::message::{ChatData, ChatMessage};
use crate::types::vibe::{find_vibe_card, visible_vibe_cards, VibeCard};

/// Reply sent when the generative-text service can't be reached
pub const FALLBACK_CHAT_RESPONSE: &str =
    "I understand your vision! Let me help you create that perfect moodboard aesthetic.";

// ============================================================================
// Request / response bodies
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct ImagesQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub success: bool,
    pub images: Vec<ImageResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ColorsQuery {
    pub theme: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ColorsResponse {
    pub success: bool,
    pub theme: String,
    pub colors: &'static Palette,
}

#[derive(Debug, Serialize)]
pub struct VibesResponse {
    pub success: bool,
    pub vibes: &'static [VibeCard],
}

#[derive(Debug, Serialize)]
pub struct VibeResponse {
    pub success: bool,
    pub vibe: Option<&'static VibeCard>,
}

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    #[serde(default)]
    pub idea: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionMessageRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    pub chat: Option<ChatData>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionMessagesResponse {
    pub success: bool,
    pub messages: Vec<ChatMessage>,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "KIKO Server Running!".to_string(),
    })
}

/// `POST /api/chat`
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatResponse> {
    let message = match payload {
        Ok(Json(request)) => request.message,
        Err(rejection) => {
            tracing::error!("Chat request rejected: {}", rejection);
            return Json(chat_fallback());
        }
    };

    match state.chat.generate(&moodboard_prompt(&message)).await {
        Ok(text) => Json(ChatResponse {
            success: true,
            response: text,
        }),
        Err(e) => {
            tracing::error!(provider = state.chat.name(), "Chat error: {}", e);
            Json(chat_fallback())
        }
    }
}

fn chat_fallback() -> ChatResponse {
    ChatResponse {
        success: true,
        response: FALLBACK_CHAT_RESPONSE.to_string(),
    }
}

/// `GET /api/images?search=`
pub async fn images(
    State(state): State<AppState>,
    Query(params): Query<ImagesQuery>,
) -> Json<ImagesResponse> {
    let images = match params.search.as_deref() {
        Some(search) if !search.trim().is_empty() => {
            match state.images.search_photos(search).await {
                Ok(images) => images,
                Err(e) => {
                    tracing::error!(provider = state.images.name(), "Image search error: {}", e);
                    Vec::new()
                }
            }
        }
        _ => {
            tracing::debug!("Image search without a query");
            Vec::new()
        }
    };

    Json(ImagesResponse {
        success: true,
        images,
        query: params.search,
    })
}

/// `GET /api/colors?theme=`
pub async fn colors(Query(params): Query<ColorsQuery>) -> Json<ColorsResponse> {
    let theme = params
        .theme
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_THEME.to_string());
    let colors = palettes::palette_for(Some(theme.as_str()));

    Json(ColorsResponse {
        success: true,
        theme,
        colors,
    })
}

/// `GET /api/vibes`
pub async fn vibes() -> Json<VibesResponse> {
    Json(VibesResponse {
        success: true,
        vibes: visible_vibe_cards(),
    })
}

/// `GET /api/vibes/:id`, including presets hidden from the homepage
pub async fn vibe(Path(id): Path<String>) -> Json<VibeResponse> {
    let vibe = find_vibe_card(&id);
    Json(VibeResponse {
        success: vibe.is_some(),
        vibe,
    })
}

/// `GET /api/session`
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let chat = with_store(&state, |store| store.load_chat_data())
        .await
        .flatten();
    Json(SessionResponse {
        success: true,
        chat,
    })
}

/// `POST /api/session`
pub async fn start_session(
    State(state): State<AppState>,
    payload: Result<Json<StartSessionRequest>, JsonRejection>,
) -> Json<SessionResponse> {
    let idea = match payload {
        Ok(Json(request)) => request.idea,
        Err(rejection) => {
            tracing::warn!("Session request rejected: {}", rejection);
            String::new()
        }
    };

    let chat = with_store(&state, move |store| store.start_chat(&idea))
        .await
        .flatten();
    Json(SessionResponse {
        success: chat.is_some(),
        chat,
    })
}

/// `POST /api/session/messages`
///
/// Stores the user's message followed by the canned assistant acknowledgement.
pub async fn add_session_message(
    State(state): State<AppState>,
    payload: Result<Json<SessionMessageRequest>, JsonRejection>,
) -> Json<SessionMessagesResponse> {
    let text = match payload {
        Ok(Json(request)) => request.text.trim().to_string(),
        Err(rejection) => {
            tracing::warn!("Session message rejected: {}", rejection);
            String::new()
        }
    };
    if text.is_empty() {
        return Json(SessionMessagesResponse {
            success: false,
            messages: Vec::new(),
        });
    }

    let messages = vec![ChatMessage::user(text.clone()), generate_assistant_reply(&text)];
    let stored = messages.clone();
    let success = with_store(&state, move |store| store.add_messages(stored))
        .await
        .unwrap_or(false);

    Json(SessionMessagesResponse {
        success,
        messages: if success { messages } else { Vec::new() },
    })
}

/// `DELETE /api/session`
pub async fn clear_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let success = with_store(&state, |store| store.clear_chat_data())
        .await
        .unwrap_or(false);
    Json(SessionResponse {
        success,
        chat: None,
    })
}

/// Run a storage operation off the async workers
async fn with_store<T, F>(state: &AppState, op: F) -> Option<T>
where
    F: FnOnce(&ChatStore) -> T + Send + 'static,
    T: Send + 'static,
{
    let store: Arc<ChatStore> = state.store.clone();
    match tokio::task::spawn_blocking(move || op(&store)).await {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("Storage task failed: {}", e);
            None
        }
    }
}
