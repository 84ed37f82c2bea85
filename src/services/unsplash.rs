//! Unsplash photo-search client

use async_trait::async_trait;
use serde::Deserialize;

use crate::services::{http_client, read_body, ImageProvider, ServiceError};
use crate::storage::settings::ServerSettings;
use crate::types::config::UNSPLASH_KEY_VAR;
use crate::types::image::ImageResult;

/// Unsplash client configuration
#[derive(Clone, Debug)]
pub struct UnsplashConfig {
    pub base_url: String,
    pub access_key: Option<String>,
    pub per_page: u32,
    pub orientation: String,
    pub timeout_secs: u64,
}

impl UnsplashConfig {
    pub fn from_settings(settings: &ServerSettings, access_key: Option<String>) -> Self {
        Self {
            base_url: settings.unsplash_base_url.clone(),
            access_key,
            per_page: settings.images_per_page,
            orientation: settings.image_orientation.clone(),
            timeout_secs: settings.request_timeout_secs,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    id: String,
    urls: PhotoUrls,
    alt_description: Option<String>,
    user: PhotoUser,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
    thumb: String,
}

#[derive(Debug, Deserialize)]
struct PhotoUser {
    name: String,
}

pub struct UnsplashClient {
    config: UnsplashConfig,
    client: reqwest::Client,
}

impl UnsplashClient {
    pub fn new(config: UnsplashConfig) -> Self {
        let client = http_client(config.timeout_secs);
        Self { config, client }
    }
}

#[async_trait]
impl ImageProvider for UnsplashClient {
    fn name(&self) -> &str {
        "unsplash"
    }

    async fn search_photos(&self, query: &str) -> Result<Vec<ImageResult>, ServiceError> {
        let access_key = self
            .config
            .access_key
            .as_deref()
            .ok_or(ServiceError::MissingApiKey(UNSPLASH_KEY_VAR))?;

        tracing::debug!(query, "Unsplash photo search");

        let per_page = self.config.per_page.to_string();
        let response = self
            .client
            .get(format!("{}/search/photos", self.config.base_url))
            .header("Authorization", format!("Client-ID {}", access_key))
            .header("Accept-Version", "v1")
            .query(&[
                ("query", query),
                ("page", "1"),
                ("per_page", per_page.as_str()),
                ("orientation", self.config.orientation.as_str()),
            ])
            .send()
            .await?;

        let body = read_body(response).await?;
        parse_search_response(&body, query)
    }
}

/// Map a search response body to image results
fn parse_search_response(body: &str, query: &str) -> Result<Vec<ImageResult>, ServiceError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| ServiceError::Parse(e.to_string()))?;

    Ok(response
        .results
        .into_iter()
        .map(|photo| ImageResult {
            id: photo.id,
            url: photo.urls.regular,
            thumb: photo.urls.thumb,
            alt: photo
                .alt_description
                .filter(|alt| !alt.is_empty())
                .unwrap_or_else(|| query.to_string()),
            photographer: photo.user.name,
        })
        .collect())
}
