//! Settings structures for uspto-search configuration

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub dsapi: DsapiSettings,
    pub search: SearchSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (USPTO_SEARCH_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable source
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("USPTO_SEARCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = lookup("USPTO_SEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("USPTO_SEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = lookup("USPTO_SEARCH_BASE_URL") {
            self.dsapi.base_url = val;
        }
        if let Some(val) = lookup("USPTO_SEARCH_VERIFY_SSL") {
            if let Ok(verify) = val.parse() {
                self.outgoing.verify_ssl = verify;
            }
        }
        if let Some(val) = lookup("USPTO_SEARCH_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = Some(timeout);
            }
        }
    }

    /// Reject settings the search path cannot work with
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.dsapi.base_url)
            .with_context(|| format!("invalid dsapi.base_url: {}", self.dsapi.base_url))?;
        if self.dsapi.dataset.trim().is_empty() {
            bail!("dsapi.dataset must not be empty");
        }
        if self.dsapi.version.trim().is_empty() {
            bail!("dsapi.version must not be empty");
        }
        if self.dsapi.max_rows == 0 {
            bail!("dsapi.max_rows must be > 0");
        }
        if self.search.web_limit == 0 || self.search.cli_limit == 0 {
            bail!("search limits must be > 0");
        }
        if let Some(timeout) = self.outgoing.request_timeout {
            let representable = Duration::try_from_secs_f64(timeout).is_ok();
            if !timeout.is_finite() || timeout <= 0.0 || !representable {
                bail!("outgoing.request_timeout must be a finite number of seconds > 0");
            }
        }
        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name displayed in the UI
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "USPTO Patent Search".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Whole-request timeout in seconds (none = client default)
    pub request_timeout: Option<f64>,
    /// Verify TLS certificates and hostnames.
    ///
    /// Off by default. While off, every outgoing connection accepts any
    /// certificate for any host.
    pub verify_ssl: bool,
    /// User agent string (none = crate default)
    pub user_agent: Option<String>,
    /// Idle pooled connections kept per host
    pub pool_max_idle_per_host: usize,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: Some(30.0),
            verify_ssl: false,
            user_agent: None,
            pool_max_idle_per_host: 10,
        }
    }
}

/// Upstream Data Set API location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DsapiSettings {
    /// API root, without trailing dataset path
    pub base_url: String,
    /// Dataset identifier
    pub dataset: String,
    /// Dataset API version
    pub version: String,
    /// Upstream cap on `rows`
    pub max_rows: u32,
}

impl Default for DsapiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://developer.uspto.gov/ds-api".to_string(),
            dataset: "enriched_cited_reference_metadata".to_string(),
            version: "v3".to_string(),
            max_rows: 10_000,
        }
    }
}

/// Per-caller search defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Default limit for the web route
    pub web_limit: u64,
    /// Default limit for the interactive CLI
    pub cli_limit: u64,
    /// Operator used when the caller does not pick one
    pub default_operator: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            web_limit: 500,
            cli_limit: 10,
            default_operator: "AND".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 5000);
        assert!(!settings.general.debug);
        assert!(!settings.outgoing.verify_ssl);
        assert_eq!(settings.dsapi.max_rows, 10_000);
        assert_eq!(settings.search.web_limit, 500);
        assert_eq!(settings.search.cli_limit, 10);
        tokio_test::assert_ok!(settings.validate());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
outgoing:
  verify_ssl: true
dsapi:
  version: v2
"#;
        let settings = tokio_test::assert_ok!(Settings::from_yaml(yaml));
        assert!(settings.outgoing.verify_ssl);
        assert_eq!(settings.dsapi.version, "v2");
        assert_eq!(settings.dsapi.dataset, "enriched_cited_reference_metadata");
        assert_eq!(settings.outgoing.request_timeout, Some(30.0));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("USPTO_SEARCH_PORT", "8080"),
            ("USPTO_SEARCH_VERIFY_SSL", "true"),
            ("USPTO_SEARCH_BASE_URL", "http://localhost:9000/ds-api"),
            ("USPTO_SEARCH_REQUEST_TIMEOUT", "2.5"),
            ("USPTO_SEARCH_DEBUG", "not-a-bool"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.server.port, 8080);
        assert!(settings.outgoing.verify_ssl);
        assert_eq!(settings.dsapi.base_url, "http://localhost:9000/ds-api");
        assert_eq!(settings.outgoing.request_timeout, Some(2.5));
        assert!(!settings.general.debug);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.dsapi.base_url = "not a url".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.dsapi.max_rows = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.outgoing.request_timeout = Some(0.0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unrepresentable_timeouts() {
        let mut settings = Settings::default();
        settings.merge_vars(|key| (key == "USPTO_SEARCH_REQUEST_TIMEOUT").then(|| "inf".to_string()));
        assert_eq!(settings.outgoing.request_timeout, Some(f64::INFINITY));
        assert!(settings.validate().is_err());

        let settings = Settings::from_yaml("outgoing:\n  request_timeout: 1e30").unwrap();
        assert!(settings.validate().is_err());

        let settings = Settings::from_yaml("outgoing:\n  request_timeout: .nan").unwrap();
        assert!(settings.validate().is_err());

        let settings = Settings::from_yaml("outgoing:\n  request_timeout: 0.5").unwrap();
        tokio_test::assert_ok!(settings.validate());
    }
}
