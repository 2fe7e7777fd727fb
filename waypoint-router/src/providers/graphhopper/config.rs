//! GraphHopper client configuration.

/// Default base URL for the hosted GraphHopper API.
pub(super) const DEFAULT_BASE_URL: &str = "https://graphhopper.com/api/1";

/// Free-tier point limit per routing request.
pub(super) const DEFAULT_MAX_POINTS: usize = 5;

/// Default maximum concurrent window requests.
pub(super) const DEFAULT_MAX_CONCURRENT: usize = 2;

/// Configuration for the GraphHopper backend.
#[derive(Debug, Clone)]
pub struct GraphHopperConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to the hosted service)
    pub base_url: String,
    /// Language for turn instructions
    pub locale: String,
    /// Points accepted per request
    pub max_points_per_request: usize,
    /// Maximum concurrent window requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GraphHopperConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: "en".to_string(),
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

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Raise the point limit, e.g. for a paid plan or a self-hosted server.
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
