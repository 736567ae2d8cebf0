//! Configuration file support for xpgraph.
//!
//! Provides YAML-based configuration through `xpgraph.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::adapters::outbound::network::ProxySettings;
use crate::resource_graph::domain::ResourcePermissions;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_DOCUMENT_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "xpgraph.config.yml";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RETRIES: u32 = 1;
const MAX_RETRIES_LIMIT: u32 = 10;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub proxy_url: Option<String>,
    pub clusters: Option<HashMap<String, String>>,
    pub token_env: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub enable_permissions: Option<bool>,
    pub permissions: Option<PermissionsConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Per-class read permissions; only consulted when `enable_permissions` is set.
#[derive(Debug, Deserialize)]
pub struct PermissionsConfig {
    #[serde(default = "allowed")]
    pub list_claims: bool,
    #[serde(default = "allowed")]
    pub list_composites: bool,
    #[serde(default = "allowed")]
    pub list_managed: bool,
}

fn allowed() -> bool {
    true
}

impl ConfigFile {
    /// Overrides the proxy URL, as `--proxy-url` does.
    pub fn with_proxy_url(mut self, proxy_url: Option<String>) -> Result<Self> {
        if let Some(url) = proxy_url {
            validate_url("--proxy-url", &url)?;
            self.proxy_url = Some(url);
        }
        Ok(self)
    }

    pub fn enforces_permissions(&self) -> bool {
        self.enable_permissions.unwrap_or(false)
    }

    pub fn resource_permissions(&self) -> ResourcePermissions {
        self.permissions
            .as_ref()
            .map_or_else(ResourcePermissions::allow_all, |p| {
                ResourcePermissions::new(p.list_claims, p.list_composites, p.list_managed)
            })
    }

    /// HTTP client settings. The bearer token is read from the
    /// environment variable named by `token_env`.
    pub fn proxy_settings(&self) -> Result<ProxySettings> {
        let token = match self.token_env.as_deref() {
            Some(var) => Some(std::env::var(var).with_context(|| {
                format!(
                    "Environment variable '{}' named by token_env is not set.\n\n💡 Hint: Export the token or remove token_env from the config file.",
                    var
                )
            })?),
            None => None,
        };

        Ok(ProxySettings {
            proxy_url: self.proxy_url.clone(),
            clusters: self.clusters.clone().unwrap_or_default(),
            token,
            timeout: Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;
    let metadata = std::fs::metadata(path)?;
    validate_file_size(metadata.len(), path, MAX_DOCUMENT_SIZE)?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref url) = config.proxy_url {
        validate_url("proxy_url", url)?;
    }
    if let Some(ref clusters) = config.clusters {
        for (name, url) in clusters {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: cluster names must not be empty.\n\n\
                     💡 Hint: Key each entry of 'clusters' by the cluster name used in the entity location."
                );
            }
            validate_url(&format!("clusters.{}", name), url)?;
        }
    }
    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Use a value such as {}.",
            DEFAULT_TIMEOUT_SECS
        );
    }
    if let Some(retries) = config.max_retries {
        if retries > MAX_RETRIES_LIMIT {
            bail!(
                "Invalid config: max_retries must be at most {} (got {}).\n\n\
                 💡 Hint: Failed branches are reported, not fatal; a small value is enough.",
                MAX_RETRIES_LIMIT,
                retries
            );
        }
    }
    if let Some(ref var) = config.token_env {
        if var.trim().is_empty() {
            bail!(
                "Invalid config: token_env must not be empty.\n\n\
                 💡 Hint: Name the environment variable holding the bearer token (e.g., \"KUBE_TOKEN\")."
            );
        }
    }
    Ok(())
}

fn validate_url(field: &str, url: &str) -> Result<()> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.trim_matches('/').is_empty() => Ok(()),
        _ => bail!(
            "Invalid config: {} must be an http(s) URL (got '{}').\n\n\
             💡 Hint: Use a URL such as \"https://backstage.example.org/api/kubernetes/proxy\".",
            field,
            url
        ),
    }
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "unknown config field will be ignored");
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
proxy_url: https://backstage.example.org/api/kubernetes/proxy
clusters:
  prod-eu: https://prod-eu.example.org:6443
token_env: XPGRAPH_TEST_UNUSED
timeout_secs: 10
max_retries: 2
enable_permissions: true
permissions:
  list_claims: false
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.proxy_url.as_deref(),
            Some("https://backstage.example.org/api/kubernetes/proxy")
        );
        assert_eq!(
            config.clusters.as_ref().unwrap()["prod-eu"],
            "https://prod-eu.example.org:6443"
        );
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(config.max_retries, Some(2));
        assert!(config.enforces_permissions());
        assert_eq!(
            config.resource_permissions(),
            ResourcePermissions::new(false, true, true)
        );
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "proxy_url: http://localhost:7007/api/kubernetes/proxy\n",
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(
            config.proxy_url.as_deref(),
            Some("http://localhost:7007/api/kubernetes/proxy")
        );
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_empty_config_file() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from_path(&write_config(&dir, "\n")).unwrap();
        assert!(config.proxy_url.is_none());
        assert!(!config.enforces_permissions());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from_path(&write_config(&dir, "invalid: yaml: [[[broken"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_proxy_url() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from_path(&write_config(&dir, "proxy_url: ftp://proxy\n"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("proxy_url must be an http(s) URL"));
        assert!(err.contains("💡 Hint"));
    }

    #[test]
    fn test_invalid_cluster_url() {
        let dir = TempDir::new().unwrap();
        let result =
            load_config_from_path(&write_config(&dir, "clusters:\n  prod-eu: prod-eu:6443\n"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("clusters.prod-eu"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from_path(&write_config(&dir, "timeout_secs: 0\n"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("timeout_secs must be greater than 0"));
    }

    #[test]
    fn test_excessive_retries_rejected() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from_path(&write_config(&dir, "max_retries: 50\n"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("max_retries must be at most"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from_path(&write_config(
            &dir,
            "proxy_url: http://localhost:7007\nformat: json\nnamespace: x\n",
        ))
        .unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("format"));
        assert!(config.unknown_fields.contains_key("namespace"));
    }

    #[test]
    fn test_permissions_ignored_unless_enabled() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from_path(&write_config(
            &dir,
            "permissions:\n  list_managed: false\n",
        ))
        .unwrap();
        assert!(!config.enforces_permissions());
        // The configured flags are still parsed; the gate decides
        assert!(!config.resource_permissions().list_managed);
    }

    #[test]
    fn test_proxy_url_override() {
        let config = ConfigFile::default()
            .with_proxy_url(Some("https://proxy.example.org".to_string()))
            .unwrap();
        assert_eq!(config.proxy_url.as_deref(), Some("https://proxy.example.org"));

        let err = ConfigFile::default()
            .with_proxy_url(Some("proxy".to_string()))
            .unwrap_err();
        assert!(format!("{}", err).contains("--proxy-url"));
    }

    #[test]
    fn test_proxy_settings_defaults() {
        let settings = ConfigFile::default().proxy_settings().unwrap();
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.max_retries, 1);
        assert!(settings.token.is_none());
        assert!(settings.clusters.is_empty());
    }

    #[test]
    fn test_proxy_settings_missing_token_variable() {
        let config = ConfigFile {
            token_env: Some("XPGRAPH_TEST_TOKEN_THAT_IS_NEVER_SET".to_string()),
            ..Default::default()
        };
        let err = format!("{:#}", config.proxy_settings().unwrap_err());
        assert!(err.contains("XPGRAPH_TEST_TOKEN_THAT_IS_NEVER_SET"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.proxy_url.is_none());
        assert!(config.clusters.is_none());
        assert!(config.token_env.is_none());
        assert!(config.permissions.is_none());
        assert!(config.unknown_fields.is_empty());
        assert_eq!(config.resource_permissions(), ResourcePermissions::allow_all());
    }
}
