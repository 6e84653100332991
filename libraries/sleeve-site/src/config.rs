/// Site configuration
use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_service")]
    pub service: ServiceSettings,

    #[serde(default = "default_blog")]
    pub blog: BlogSettings,

    #[serde(default = "default_tenants")]
    pub tenants: Vec<TenantRule>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSettings {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_anon_key")]
    pub anon_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlogSettings {
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Maps a hostname fragment to the artist whose catalog that host shows.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TenantRule {
    pub host_contains: String,
    pub artist: String,
}

impl SiteConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load configuration from a specific file, then apply environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        if path.exists() {
            settings = settings.add_source(config::File::from(path));
        }

        // Override with environment variables (prefixed with SLEEVE_)
        settings = settings.add_source(
            config::Environment::with_prefix("SLEEVE")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| SiteError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| SiteError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.service.url.trim().is_empty() {
            return Err(SiteError::Config(
                "Service URL is required (set SLEEVE_SERVICE_URL)".to_string(),
            ));
        }

        if self.service.anon_key.trim().is_empty() {
            return Err(SiteError::Config(
                "Service anon key is required (set SLEEVE_SERVICE_ANON_KEY)".to_string(),
            ));
        }

        if self.blog.page_size == 0 {
            return Err(SiteError::Config(
                "Blog page size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Client connection settings derived from this configuration.
    pub fn service_config(&self) -> sleeve_client::ServiceConfig {
        sleeve_client::ServiceConfig::new(&self.service.url, &self.service.anon_key)
    }

    /// Artist for the first tenant rule matching `hostname`, if any.
    ///
    /// Matching is a case-insensitive substring test, so a rule with
    /// `host_contains = "corruptive"` covers both the apex domain and
    /// any preview subdomains.
    pub fn resolve_tenant(&self, hostname: &str) -> Option<&str> {
        let needle = hostname.to_lowercase();
        self.tenants
            .iter()
            .find(|rule| needle.contains(&rule.host_contains.to_lowercase()))
            .map(|rule| rule.artist.as_str())
    }
}

// Default values
fn default_service() -> ServiceSettings {
    ServiceSettings {
        url: default_url(),
        anon_key: default_anon_key(),
    }
}

fn default_url() -> String {
    String::new()
}

fn default_anon_key() -> String {
    String::new()
}

fn default_blog() -> BlogSettings {
    BlogSettings {
        page_size: default_page_size(),
        debounce_ms: default_debounce_ms(),
    }
}

fn default_page_size() -> u32 {
    crate::blog::DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    crate::blog::DEFAULT_DEBOUNCE_MS
}

fn default_tenants() -> Vec<TenantRule> {
    vec![]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            service: default_service(),
            blog: default_blog(),
            tenants: default_tenants(),
        }
    }
}
