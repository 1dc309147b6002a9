//! Backend endpoint configuration.

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "QUICKBITE_BACKEND_URL";

/// Default base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the backend service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Normalize so path joining stays predictable.
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolves the base URL from `QUICKBITE_BACKEND_URL`, falling back to
    /// the local development endpoint.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BACKEND_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
