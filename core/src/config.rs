//! Client configuration: the two API base roots.
//!
//! The vendor exposes a public root and an internal root; every endpoint is
//! hard-wired to one of the two (see [`Endpoint::root`](crate::Endpoint)).
//! Tests point both roots at a local mock server.

/// Which base root an endpoint resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoot {
    Public,
    Internal,
}

/// Base URLs for the analytics API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    public_root: String,
    internal_root: String,
}

impl ApiConfig {
    pub const PUBLIC_ROOT: &'static str = "https://api.revscope.com/v1/developers";
    pub const INTERNAL_ROOT: &'static str = "https://api.revscope.com/internal/v1/developers";

    /// Config with explicit roots. Trailing slashes are stripped so path
    /// joining stays predictable.
    pub fn new(public_root: &str, internal_root: &str) -> Self {
        Self {
            public_root: public_root.trim_end_matches('/').to_string(),
            internal_root: internal_root.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self, root: ApiRoot) -> &str {
        match root {
            ApiRoot::Public => &self.public_root,
            ApiRoot::Internal => &self.internal_root,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(Self::PUBLIC_ROOT, Self::INTERNAL_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production_roots() {
        let config = ApiConfig::default();
        assert_eq!(config.root(ApiRoot::Public), ApiConfig::PUBLIC_ROOT);
        assert_eq!(config.root(ApiRoot::Internal), ApiConfig::INTERNAL_ROOT);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://localhost:3000/", "http://localhost:3000/internal/");
        assert_eq!(config.root(ApiRoot::Public), "http://localhost:3000");
        assert_eq!(config.root(ApiRoot::Internal), "http://localhost:3000/internal");
    }
}
