/// Builder for [`HttpBackendConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HttpBackendConfigBuilder {
    base_url: Option<String>,
}

impl HttpBackendConfigBuilder {
    /// Creates a builder with default settings.
    #[inline]
    pub fn new() -> Self {
        Self { base_url: None }
    }

    /// Sets the base URL of the API server.
    ///
    /// The `/api/...` route prefix is appended by the backend; pass the
    /// host part only, without a trailing slash.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> HttpBackendConfig {
        HttpBackendConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| "http://localhost:8000".to_string()),
        }
    }
}

impl Default for HttpBackendConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the HTTP backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HttpBackendConfig {
    pub(crate) base_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = HttpBackendConfigBuilder::new().build();
        assert_eq!(config.base_url, "http://localhost:8000");
    }
}
