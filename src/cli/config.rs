use anyhow::{Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dashboard configuration, loaded from YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Evaluation service connection
    #[serde(default)]
    pub service: ServiceSettings,

    /// Client-side upload checks
    #[serde(default)]
    pub uploads: UploadLimits,

    /// Web UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the evaluation service lives and how long to wait for it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Base URL of the evaluation service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Evaluations can be slow.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

/// Limits checked before a file is sent to the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadLimits {
    /// Maximum file size in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,

    /// Accepted file extensions, without the dot. Empty accepts anything.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_max_file_size() -> u64 {
    10 * 1024 * 1024
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["pdf".to_string(), "docx".to_string(), "txt".to_string()]
}

/// Web UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Port the dashboard listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of evaluations shown on the summary view
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Seconds before a notification dismisses itself
    #[serde(default = "default_notification_ttl")]
    pub notification_ttl_secs: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            recent_limit: default_recent_limit(),
            notification_ttl_secs: default_notification_ttl(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_recent_limit() -> usize {
    5
}

fn default_notification_ttl() -> u64 {
    5
}

impl UiSettings {
    /// Notification lifetime, at least one second. Values past what chrono
    /// can hold saturate instead of overflowing.
    pub fn notification_ttl(&self) -> Duration {
        i64::try_from(self.notification_ttl_secs.max(1))
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX)
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context(format!("Failed to read config file: {:?}", path.as_ref()))?;

        let mut config: DashboardConfig =
            serde_yaml::from_str(&content).context("Failed to parse config file")?;

        if config.ui.notification_ttl_secs == 0 {
            tracing::warn!("notification_ttl_secs is 0, using 1");
            config.ui.notification_ttl_secs = 1;
        }

        Ok(config)
    }

    /// Load the file if one was given or the default file exists, else defaults
    pub fn resolve(explicit: Option<&Path>, default_path: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if default_path.exists() => {
                tracing::debug!("Using config file {:?}", default_path);
                Self::load(default_path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .context(format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_service_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.service.base_url = url;
        }
        self
    }

    /// Generate a sample configuration
    pub fn sample() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.uploads.max_file_size_bytes, 10 * 1024 * 1024);
        assert_eq!(config.ui.recent_limit, 5);
        assert_eq!(config.ui.notification_ttl_secs, 5);
        assert_eq!(config.service.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "service:\n  base_url: http://eval.internal:9000\n";
        let config: DashboardConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.service.base_url, "http://eval.internal:9000");
        assert_eq!(config.service.timeout_secs, 120);
        assert_eq!(config.ui.port, 8080);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.yaml");

        let mut config = DashboardConfig::sample();
        config.ui.port = 9191;
        config.save(&path).unwrap();

        let loaded = DashboardConfig::load(&path).unwrap();
        assert_eq!(loaded.ui.port, 9191);
        assert_eq!(loaded.uploads.allowed_extensions, vec!["pdf", "docx", "txt"]);
    }

    #[test]
    fn test_resolve_without_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::resolve(None, &dir.path().join("missing.yaml")).unwrap();
        assert_eq!(config.ui.port, 8080);
    }

    #[test]
    fn test_zero_notification_ttl_is_raised_to_one_second() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.yaml");
        std::fs::write(&path, "ui:\n  notification_ttl_secs: 0\n").unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.ui.notification_ttl_secs, 1);
        assert_eq!(config.ui.notification_ttl(), Duration::seconds(1));
    }

    #[test]
    fn test_huge_notification_ttl_saturates() {
        let mut ui = UiSettings::default();
        ui.notification_ttl_secs = u64::MAX;
        assert_eq!(ui.notification_ttl(), Duration::MAX);

        ui.notification_ttl_secs = i64::MAX as u64;
        assert_eq!(ui.notification_ttl(), Duration::MAX);

        ui.notification_ttl_secs = 30;
        assert_eq!(ui.notification_ttl(), Duration::seconds(30));
    }

    #[test]
    fn test_service_url_override() {
        let config =
            DashboardConfig::default().with_service_url(Some("http://other:1234".to_string()));
        assert_eq!(config.service.base_url, "http://other:1234");
    }
}
