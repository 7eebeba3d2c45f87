//! Client configuration.

/// Environment variable naming the backend base URL.
pub const ENDPOINT_ENV: &str = "QUIKCART_API_URL";

/// Backend endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL including the API prefix, e.g. `http://localhost:8082/api/v1`.
    pub endpoint: String,
}

impl Config {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { endpoint }
    }

    /// Read the endpoint from `QUIKCART_API_URL`, falling back to the local
    /// dev backend.
    pub fn from_env() -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| {
            tracing::warn!("{ENDPOINT_ENV} not set; using local dev default");
            "http://localhost:8082/api/v1".to_string()
        });
        Self::new(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = Config::new("http://localhost:8082/api/v1/");
        assert_eq!(config.endpoint, "http://localhost:8082/api/v1");
    }
}
