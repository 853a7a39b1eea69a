//! Capabilities the notifier needs from the host that executed the run.

use crate::jenkins::jenkins_model::run_status::RunStatus;
use std::io;
use std::path::PathBuf;

pub mod artifact_directory;
pub mod jenkins_run;
pub mod recorded_artifacts;

pub use artifact_directory::ArtifactDirectory;
pub use jenkins_run::JenkinsRun;
pub use recorded_artifacts::RecordedArtifacts;

/// Read-only view of a completed run.
pub trait RunInfoProvider {
    /// `None` when the host has not recorded a result for the run.
    fn result(&self) -> Option<RunStatus>;

    fn id(&self) -> String;

    fn number(&self) -> u32;

    fn url(&self) -> String;

    fn full_display_name(&self) -> String;

    /// Cause descriptions in recorded order, `None` when unavailable.
    fn causes(&self) -> Option<Vec<String>>;

    /// Path of the run's primary console log.
    fn log_file(&self) -> PathBuf;
}

/// One entry of an artifact tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactEntry {
    pub name: String,
    pub uri: String,
    pub is_directory: bool,
    /// Path from the artifact root, `/` separated. Pass it back to
    /// [`ArtifactLister::list`] to descend.
    pub relative_path: String,
}

/// Access to the artifact storage of a run.
pub trait ArtifactLister {
    /// Immediate entries of `relative_dir`, `""` being the artifact root.
    fn list(&self, relative_dir: &str) -> io::Result<Vec<ArtifactEntry>>;
}

/// Artifact storage picked at runtime.
pub enum RunArtifacts {
    Directory(ArtifactDirectory),
    Recorded(RecordedArtifacts),
}

impl ArtifactLister for RunArtifacts {
    fn list(&self, relative_dir: &str) -> io::Result<Vec<ArtifactEntry>> {
        match self {
            RunArtifacts::Directory(d) => d.list(relative_dir),
            RunArtifacts::Recorded(r) => r.list(relative_dir),
        }
    }
}
