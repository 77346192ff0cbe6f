use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for a board session and its remote sync client.
///
/// Loaded from `taskboard/config.toml` in the platform config directory;
/// every field falls back to a default so a missing or partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Base URL of the REST backend, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Bearer token sent on every request when present.
    #[serde(default)]
    pub api_token: Option<String>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long a sync-failure notice stays visible before it clears itself.
    #[serde(default = "default_notice_ttl_secs")]
    pub notice_ttl_secs: u64,

    /// Issue the idempotent update even when a card is dropped back onto
    /// itself. Off by default; some backends want the audit-trail write.
    #[serde(default)]
    pub update_on_self_drop: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_notice_ttl_secs() -> u64 {
    4
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_token: None,
            request_timeout_secs: default_request_timeout_secs(),
            notice_ttl_secs: default_notice_ttl_secs(),
            update_on_self_drop: false,
        }
    }
}

impl BoardConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config| config.join("taskboard/config.toml"))
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Self::default(),
        }
    }

    pub fn load_from_path(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert!(config.api_token.is_none());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.notice_ttl(), Duration::from_secs(4));
        assert!(!config.update_on_self_drop);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"api_base_url = "https://board.example.com""#).unwrap();

        let config = BoardConfig::load_from_path(file.path());
        assert_eq!(config.api_base_url, "https://board.example.com");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(!config.update_on_self_drop);
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
api_base_url = "https://board.example.com"
api_token = "secret"
request_timeout_secs = 5
notice_ttl_secs = 2
update_on_self_drop = true
"#
        )
        .unwrap();

        let config = BoardConfig::load_from_path(file.path());
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.notice_ttl(), Duration::from_secs(2));
        assert!(config.update_on_self_drop);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BoardConfig::load_from_path(&dir.path().join("nope.toml"));
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let config = BoardConfig::load_from_path(file.path());
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }
}
