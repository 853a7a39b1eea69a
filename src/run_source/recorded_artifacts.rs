use crate::jenkins::jenkins_model::recorded_artifact::RecordedArtifact;
use crate::run_source::{ArtifactEntry, ArtifactLister};
use std::collections::BTreeMap;
use std::io;

/// Artifact tree rebuilt from the `artifacts` list of a run record.
///
/// Only files are recorded by Jenkins, so directories are inferred from the
/// relative paths. Uris point at the artifact pages of the run.
#[derive(Debug, Clone)]
pub struct RecordedArtifacts {
    artifact_base_url: String,
    paths: Vec<String>,
}

impl RecordedArtifacts {
    /// ### Arguments
    ///
    /// * `run_url`: absolute url of the run page.
    /// * `artifacts`: the recorded artifact list.
    pub fn new(run_url: &str, artifacts: &[RecordedArtifact]) -> Self {
        Self {
            artifact_base_url: format!("{}/artifact/", run_url.trim_end_matches('/')),
            paths: artifacts
                .iter()
                .map(|a| a.relative_path.trim_matches('/').to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }
}

impl ArtifactLister for RecordedArtifacts {
    fn list(&self, relative_dir: &str) -> io::Result<Vec<ArtifactEntry>> {
        let relative_dir = relative_dir.trim_matches('/');
        let prefix = if relative_dir.is_empty() {
            String::new()
        } else {
            format!("{}/", relative_dir)
        };

        // name -> is_directory
        let mut children: BTreeMap<String, bool> = BTreeMap::new();
        for path in &self.paths {
            if let Some(rest) = path.strip_prefix(prefix.as_str()) {
                match rest.split_once('/') {
                    Some((dir, _)) => {
                        children.insert(dir.to_string(), true);
                    }
                    None => {
                        children.entry(rest.to_string()).or_insert(false);
                    }
                }
            }
        }

        if children.is_empty() && !relative_dir.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no recorded artifact under {}", relative_dir),
            ));
        }

        Ok(children
            .into_iter()
            .map(|(name, is_directory)| {
                let relative_path = format!("{}{}", prefix, name);
                let uri = if is_directory {
                    format!("{}{}/", self.artifact_base_url, relative_path)
                } else {
                    format!("{}{}", self.artifact_base_url, relative_path)
                };

                ArtifactEntry {
                    name,
                    uri,
                    is_directory,
                    relative_path,
                }
            })
            .collect())
    }
}
