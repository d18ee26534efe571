//! Base-URL configuration.

/// Environment variable that overrides the backend root.
pub const API_URL_VAR: &str = "USERBOARD_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Where the backend root lives.
///
/// Handed to [`crate::UsersApi::new`] by whoever assembles the app, so the
/// transport never reads ambient state itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend root without a trailing slash, e.g. `http://localhost:8080`.
    pub api_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Resolve the base URL from the environment, falling back to the
    /// localhost default. Native builds load `.env` first; wasm has no
    /// process environment, so the default stands there.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(API_URL_VAR) {
                if !url.is_empty() {
                    return Self::new(url);
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(ApiConfig::default().api_url, "http://localhost:8080");
    }

    #[test]
    fn explicit_url_wins() {
        let config = ApiConfig::new("https://crud.example.com");
        assert_eq!(config.api_url, "https://crud.example.com");
    }
}
