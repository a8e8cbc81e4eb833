//! Client configuration
//!
//! `CatalogConfig` is read from YAML, optionally overridden from the
//! environment, validated, and turned into an [`HttpClientConfig`].
//!
//! ```yaml
//! base_url: https://dragonball-api.com/api
//! page_size: 10
//! http:
//!   timeout_secs: 30
//!   max_retries: 3
//!   backoff: exponential
//!   rate_limit:
//!     requests_per_second: 5
//!     burst_size: 5
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable overriding `base_url`
pub const ENV_BASE_URL: &str = "CATALOG_BASE_URL";
/// Environment variable overriding `page_size`
pub const ENV_PAGE_SIZE: &str = "CATALOG_PAGE_SIZE";

/// Public catalog endpoint used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://dragonball-api.com/api";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Items requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            http: HttpConfig::default(),
        }
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP transport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries after the first attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default)]
    pub backoff: BackoffType,

    /// Initial backoff in milliseconds
    #[serde(default = "default_initial_backoff")]
    pub initial_backoff_ms: u64,

    /// Omit to disable client-side rate limiting
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,

    #[serde(default)]
    pub headers: HashMap<String, String>,

    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff() -> u64 {
    100
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            backoff: BackoffType::default(),
            initial_backoff_ms: default_initial_backoff(),
            rate_limit: default_rate_limit(),
            headers: HashMap::new(),
            user_agent: None,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

impl CatalogConfig {
    /// Parse from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_yaml_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    /// Apply `CATALOG_BASE_URL` / `CATALOG_PAGE_SIZE` from the process env
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            self.page_size = raw
                .trim()
                .parse()
                .map_err(|_| Error::invalid_config("page_size", format!("not a number: {raw}")))?;
        }
        Ok(self)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_config(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.page_size == 0 {
            return Err(Error::invalid_config("page_size", "must be at least 1"));
        }
        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_config("http.timeout_secs", "must be at least 1"));
        }
        Ok(())
    }

    /// Transport configuration for [`HttpClient`](crate::http::HttpClient)
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.http.timeout_secs))
            .max_retries(self.http.max_retries)
            .backoff(
                self.http.backoff,
                Duration::from_millis(self.http.initial_backoff_ms),
                Duration::from_secs(60),
            );

        builder = match &self.http.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };
        for (key, value) in &self.http.headers {
            builder = builder.header(key, value);
        }
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent);
        }

        builder.build()
    }
}
