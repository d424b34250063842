//! Content store configuration resolved from the environment.
//!
//! Each setting checks the site-specific public variable, then the generic
//! one, then a hard-coded fallback. Resolution never fails.

use std::env;

use tracing::{debug, warn};

/// Fallback when neither URL variable is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";

const BASE_URL_VARS: [&str; 2] = ["PUBLIC_STRAPI_URL", "STRAPI_URL"];
const TOKEN_VARS: [&str; 2] = ["PUBLIC_STRAPI_TOKEN", "STRAPI_TOKEN"];
const BACKEND_VAR: &str = "CONTENT_BACKEND";
const ENVIRONMENT_VAR: &str = "SITE_ENV";

/// Which API surface of the content store the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// `GET {base}/api/...` with bracketed query parameters.
    #[default]
    Rest,
    /// `POST {base}/graphql` with fixed query documents.
    GraphQl,
}

impl Backend {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "graphql" | "gql" => Backend::GraphQl,
            _ => Backend::Rest,
        }
    }
}

/// Build flavor of the site consuming the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// Resolved connection settings. Immutable once handed to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub base_url: String,
    pub token: Option<String>,
    pub backend: Backend,
    pub environment: Environment,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Configuration {
    /// Configuration for `base_url` with no token, REST backend, development.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            backend: Backend::default(),
            environment: Environment::default(),
        }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|key| env::var(key).ok())
    }

    /// Resolve through an arbitrary lookup. Empty values count as unset.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| lookup(key))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };

        let base_url = first(&BASE_URL_VARS).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let config = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: first(&TOKEN_VARS),
            backend: first(&[BACKEND_VAR]).map(|v| Backend::parse(&v)).unwrap_or_default(),
            environment: first(&[ENVIRONMENT_VAR])
                .map(|v| Environment::parse(&v))
                .unwrap_or_default(),
        };

        if !config.warn_if_misconfigured() && config.environment == Environment::Development {
            debug!(
                base_url = %config.base_url,
                has_token = config.has_token(),
                graphql_url = %config.graphql_url(),
                "content API configuration"
            );
        }
        config
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// REST root, `{base}/api`.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.base_url)
    }

    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.base_url)
    }

    /// A token counts only when it has non-whitespace content.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    pub fn is_local(&self) -> bool {
        ["localhost", "127.0.0.1", "0.0.0.0"]
            .iter()
            .any(|host| self.base_url.contains(host))
    }

    /// Warn when a production build still targets a local content store.
    /// Returns whether the warning fired.
    pub fn warn_if_misconfigured(&self) -> bool {
        if self.environment != Environment::Production || !self.is_local() {
            return false;
        }
        warn!(
            base_url = %self.base_url,
            "production build is using a local content store URL; set PUBLIC_STRAPI_URL or STRAPI_URL"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn falls_back_to_localhost() {
        let config = Configuration::resolve(lookup(&[]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token, None);
        assert_eq!(config.backend, Backend::Rest);
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn public_variable_wins_over_generic() {
        let config = Configuration::resolve(lookup(&[
            ("PUBLIC_STRAPI_URL", "https://cms.example.com/"),
            ("STRAPI_URL", "https://other.example.com"),
            ("STRAPI_TOKEN", "secret"),
        ]));
        assert_eq!(config.base_url, "https://cms.example.com");
        assert_eq!(config.token.as_deref(), Some("secret"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = Configuration::resolve(lookup(&[
            ("PUBLIC_STRAPI_URL", ""),
            ("STRAPI_URL", "https://cms.example.com"),
            ("PUBLIC_STRAPI_TOKEN", "  "),
        ]));
        assert_eq!(config.base_url, "https://cms.example.com");
        assert_eq!(config.token, None);
    }

    #[test]
    fn backend_and_environment_are_parsed() {
        let config = Configuration::resolve(lookup(&[
            ("CONTENT_BACKEND", "GraphQL"),
            ("SITE_ENV", "prod"),
        ]));
        assert_eq!(config.backend, Backend::GraphQl);
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn derived_urls() {
        let config = Configuration::new("https://cms.example.com/");
        assert_eq!(config.api_base(), "https://cms.example.com/api");
        assert_eq!(config.graphql_url(), "https://cms.example.com/graphql");
    }

    #[test]
    fn warns_only_for_local_production() {
        let local_prod = Configuration::default().with_environment(Environment::Production);
        assert!(local_prod.warn_if_misconfigured());

        let remote_prod =
            Configuration::new("https://cms.example.com").with_environment(Environment::Production);
        assert!(!remote_prod.warn_if_misconfigured());

        assert!(!Configuration::default().warn_if_misconfigured());
    }

    #[test]
    fn blank_token_is_not_a_token() {
        assert!(!Configuration::default().with_token("   ").has_token());
        assert!(Configuration::default().with_token("abc").has_token());
    }
}
