//! openrouteservice client configuration.

/// Default base URL for the hosted openrouteservice API.
pub(super) const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Waypoint limit of the public directions endpoint.
pub(super) const DEFAULT_MAX_POINTS: usize = 50;

/// Default maximum concurrent window requests.
pub(super) const DEFAULT_MAX_CONCURRENT: usize = 2;

/// Configuration for the openrouteservice backend.
#[derive(Debug, Clone)]
pub struct OpenRouteConfig {
    /// API key, sent in the `Authorization` header
    pub api_key: String,
    /// Base URL for the API (defaults to the hosted service)
    pub base_url: String,
    /// Language for turn instructions
    pub language: String,
    /// Points accepted per request
    pub max_points_per_request: usize,
    /// Maximum concurrent window requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenRouteConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "en".to_string(),
            max_points_per_request: DEFAULT_MAX_POINTS,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (self-hosted instance, or tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_max_points(mut self, n: usize) -> Self {
        self.max_points_per_request = n;
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = OpenRouteConfig::new("ors-key");

        assert_eq!(config.api_key, "ors-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.language, "en");
        assert_eq!(config.max_points_per_request, 50);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
    }

    #[test]
    fn config_builder() {
        let config = OpenRouteConfig::new("ors-key")
            .with_base_url("http://localhost:8082/ors")
            .with_language("fr")
            .with_max_points(3)
            .with_max_concurrent(1)
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8082/ors");
        assert_eq!(config.language, "fr");
        assert_eq!(config.max_points_per_request, 3);
        assert_eq!(config.max_concurrent, 1);
        assert_eq!(config.timeout_secs, 5);
    }
}
