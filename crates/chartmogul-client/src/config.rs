//! Client configuration.

/// Default ChartMogul API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.chartmogul.com";

/// Configuration for the ChartMogul client.
///
/// The account token and secret key form the HTTP Basic credential pair.
/// They are owned by the client instance; there is no process-wide
/// credential state, and they are never mutated after construction.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Account token identifying the ChartMogul account.
    pub account_token: String,
    /// Secret key paired with the account token.
    pub secret_key: String,
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Create a configuration pointing at the production API.
    #[must_use]
    pub fn new(account_token: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            account_token: account_token.into(),
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API endpoint.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production_endpoint() {
        let config = ApiConfig::new("token", "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.account_token, "token");
        assert_eq!(config.secret_key, "secret");
    }

    #[test]
    fn base_url_trims_trailing_slash() {
        let config = ApiConfig::new("token", "secret").with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
