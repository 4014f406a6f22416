use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ARTIFACT_NAME, DEFAULT_CACHE_MAX_AGE, DEFAULT_RELEASE_BASE_URL,
    DEFAULT_RELEASE_VERSION,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub release: ReleaseConfig,
    pub cache: CacheConfig,
}

/// What the manifest advertises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
    pub version: String,
    /// object storage root, never ends with `/`
    pub base_url: String,
    pub artifact_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub max_age: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3030,
            release: ReleaseConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_RELEASE_VERSION.into(),
            base_url: DEFAULT_RELEASE_BASE_URL.into(),
            artifact_name: DEFAULT_ARTIFACT_NAME.into(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_age: DEFAULT_CACHE_MAX_AGE }
    }
}

impl CacheConfig {
    pub fn header_value(&self) -> String {
        format!("public, max-age={}", self.max_age)
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`,
    /// so callers can supply their own source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(port) = lookup("PORT") {
            config.port = port.parse().context("PORT must be a port number")?;
        }

        if let Some(version) = lookup("RELEASE_VERSION") {
            config.release.version = version;
        }
        if let Some(base_url) = lookup("RELEASE_BASE_URL") {
            config.release.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(artifact_name) = lookup("RELEASE_ARTIFACT_NAME") {
            config.release.artifact_name = artifact_name;
        }

        if let Some(max_age) = lookup("MANIFEST_CACHE_MAX_AGE") {
            config.cache.max_age = max_age
                .parse()
                .context("MANIFEST_CACHE_MAX_AGE must be a number of seconds")?;
        }

        config.release.validate()?;

        Ok(config)
    }
}

impl ReleaseConfig {
    fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            bail!("RELEASE_VERSION is empty");
        }
        if self.base_url.trim().is_empty() {
            bail!("RELEASE_BASE_URL is empty");
        }
        if self.artifact_name.trim().is_empty() {
            bail!("RELEASE_ARTIFACT_NAME is empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = load(&[]).unwrap();

        assert_eq!(config.port, 3030);
        assert_eq!(config.release.version, "0.1.7");
        assert_eq!(
            config.release.base_url,
            "https://pub-29493441e7d647038e2f777e7cac5cce.r2.dev"
        );
        assert_eq!(config.release.artifact_name, "dearsql");
        assert_eq!(config.cache.header_value(), "public, max-age=300");
    }

    #[test]
    fn env_overrides_release() {
        let config = load(&[
            ("PORT", "8080"),
            ("RELEASE_VERSION", "0.2.0"),
            ("RELEASE_BASE_URL", "https://cdn.example.com/builds/"),
            ("RELEASE_ARTIFACT_NAME", "dearsql-nightly"),
            ("MANIFEST_CACHE_MAX_AGE", "60"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.release.version, "0.2.0");
        assert_eq!(config.release.base_url, "https://cdn.example.com/builds");
        assert_eq!(config.release.artifact_name, "dearsql-nightly");
        assert_eq!(config.cache.header_value(), "public, max-age=60");
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn bad_max_age_is_rejected() {
        assert!(load(&[("MANIFEST_CACHE_MAX_AGE", "-1")]).is_err());
    }

    #[test]
    fn empty_release_values_are_rejected() {
        assert!(load(&[("RELEASE_VERSION", "")]).is_err());
        assert!(load(&[("RELEASE_BASE_URL", "/")]).is_err());
        assert!(load(&[("RELEASE_ARTIFACT_NAME", "  ")]).is_err());
    }
}
