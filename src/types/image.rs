//! Image suggestion types

use serde::{Deserialize, Serialize};

/// A photo suggestion returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    /// Upstream photo id
    pub id: String,
    /// Regular-size image URL
    pub url: String,
    /// Thumbnail URL
    pub thumb: String,
    /// Alt text; falls back to the search query when the photo has none
    pub alt: String,
    /// Display name of the photographer
    pub photographer: String,
}
