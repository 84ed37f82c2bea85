//! Configuration types
//!
//! Runtime credentials for the upstream services.

/// Environment variable holding the generative-text API key
pub const GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable holding the photo-search access key
pub const UNSPLASH_KEY_VAR: &str = "UNSPLASH_ACCESS_KEY";

/// API keys for the proxied services
///
/// Keys are never persisted to disk; they are read from the environment at startup.
#[derive(Clone, Default)]
pub struct ApiKeys {
    pub gemini: Option<String>,
    pub unsplash: Option<String>,
}

impl ApiKeys {
    /// Read keys from the environment, treating blank values as missing
    pub fn from_env() -> Self {
        Self {
            gemini: read_key(GEMINI_KEY_VAR),
            unsplash: read_key(UNSPLASH_KEY_VAR),
        }
    }

    /// "Ready" or "Missing", for startup logging
    pub fn status(key: &Option<String>) -> &'static str {
        if key.is_some() {
            "Ready"
        } else {
            "Missing"
        }
    }
}

impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeys")
            .field("gemini", &Self::status(&self.gemini))
            .field("unsplash", &Self::status(&self.unsplash))
            .finish()
    }
}

fn read_key(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys_missing() {
        let keys = ApiKeys::default();
        assert_eq!(ApiKeys::status(&keys.gemini), "Missing");
        assert_eq!(ApiKeys::status(&keys.unsplash), "Missing");
    }

    #[test]
    fn test_debug_redacts_keys() {
        let keys = ApiKeys {
            gemini: Some("secret-gemini".to_string()),
            unsplash: None,
        };
        let debug = format!("{:?}", keys);
        assert!(!debug.contains("secret-gemini"));
        assert!(debug.contains("Ready"));
        assert!(debug.contains("Missing"));
    }
}
