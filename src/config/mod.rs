use crate::notifier_error::NotifierError;
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".build-analytics.toml";

/// Settings of one notifier instance. Read-only while reporting.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotifierConfig {
    /// Analytics endpoint the run summary is posted to.
    #[serde(default)]
    pub server_ip: String,

    /// Stage label embedded in the log file name and the payload.
    #[serde(default)]
    pub build_stage_type: String,

    /// Directory watched by the log shipper.
    #[serde(default)]
    pub filebeats_directory: String,

    #[serde(default)]
    pub user_prefix: String,

    /// Jenkins root url copied into the payload.
    #[serde(default)]
    pub jenkins_server_ip: String,

    #[serde(default, alias = "uploadOblyOnFail")]
    pub upload_only_on_fail: bool,

    #[serde(default)]
    pub fail_build: bool,

    /// No timeout when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl NotifierConfig {
    pub fn from_toml(content: &str) -> Result<Self, NotifierError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, NotifierError> {
        debug!(path = %path.display(), "loading notifier config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn save(&self, path: &Path) -> Result<(), NotifierError> {
        let content = toml::to_string(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Resolve where the config lives.
///
/// ### Arguments
///
/// * `path`: explicit config file, or a directory holding [`CONFIG_FILE_NAME`].
///   falls back to the home directory when `None`.
pub fn get_config_file_path(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(p) if p.is_dir() => Some(p.join(CONFIG_FILE_NAME)),
        Some(p) => Some(p.to_path_buf()),
        None => home_dir().map(|h| h.join(CONFIG_FILE_NAME)),
    }
}
