//! Backend origin configuration.
//!
//! The origin is injected into the gateway rather than read from a constant,
//! so tests and alternative deployments can point the dashboard elsewhere.

/// Origin used when nothing else is configured.
pub const DEFAULT_BASE_ORIGIN: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Scheme, host and port of the REST API, without a trailing slash.
    pub base_origin: String,
}

impl GatewayConfig {
    pub fn new(base_origin: impl Into<String>) -> Self {
        let origin: String = base_origin.into();
        Self {
            base_origin: origin.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Joins the origin with an API path. Paths without a leading slash get one.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_origin, path)
        } else {
            format!("{}/{}", self.base_origin, path)
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_ORIGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = GatewayConfig::default();
        assert_eq!(config.url("/missions/"), "http://localhost:8000/missions/");
    }

    #[test]
    fn trailing_slashes_are_normalised() {
        let config = GatewayConfig::new("https://api.example.org:9000//");
        assert_eq!(config.base_origin, "https://api.example.org:9000");
        assert_eq!(config.url("logs/3"), "https://api.example.org:9000/logs/3");
    }
}
