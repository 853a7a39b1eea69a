use crate::pretty_log::{colored_println, ThemeColor};
use reqwest::StatusCode;
use std::io::Write;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum NotifierError {
    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    ConfigDeserialization(#[from] toml::de::Error),

    #[error("Cannot write config file: {0}")]
    ConfigSerialization(#[from] toml::ser::Error),

    #[error("Invalid run record: {0}")]
    RunRecord(serde_json::Error),

    #[error("Cannot serialize run summary: {0}")]
    Summary(serde_json::Error),

    #[error("Malformed analytics endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("Server responded {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Cannot link {} to {}: {source}", .link.display(), .target.display())]
    Symlink {
        link: PathBuf,
        target: PathBuf,
        source: std::io::Error,
    },

    #[error("Need param: {0}")]
    MissingParam(String),
}

impl NotifierError {
    pub fn colored_println<W: Write>(&self, out: &mut W) {
        colored_println(out, ThemeColor::Error, self.to_string().as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symlink_error_message() {
        let err = NotifierError::Symlink {
            link: PathBuf::from("/watch/u-x-t-x-1.log"),
            target: PathBuf::from("/jobs/a/builds/1/log"),
            source: std::io::Error::new(std::io::ErrorKind::AlreadyExists, "exists"),
        };

        assert_eq!(
            err.to_string(),
            "Cannot link /watch/u-x-t-x-1.log to /jobs/a/builds/1/log: exists"
        );
    }
}
