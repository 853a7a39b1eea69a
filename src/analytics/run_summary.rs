use crate::config::NotifierConfig;
use crate::constant::log::*;
use crate::run_source::{ArtifactLister, RunInfoProvider};
use formatx::formatx;
use serde::Serialize;
use std::io;
use tracing::{debug, warn};

/// Payload posted to the analytics endpoint.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub jenkins_base_url: String,
    pub build_type: String,
    pub build_name: String,
    pub build_cause: String,
    pub build_number: u32,
    pub build_user_prefix: String,
    pub build_log_index: String,
    pub build_url: String,
    #[serde(rename = "artifactList")]
    pub artifact_list: Vec<String>,
}

pub struct RunSummaryBuilder<'a> {
    jenkins_base_url: &'a str,
    build_type: &'a str,
    user_prefix: &'a str,
}

impl<'a> RunSummaryBuilder<'a> {
    pub fn new(jenkins_base_url: &'a str, build_type: &'a str, user_prefix: &'a str) -> Self {
        Self {
            jenkins_base_url,
            build_type,
            user_prefix,
        }
    }

    pub fn from_config(config: &'a NotifierConfig) -> Self {
        Self::new(
            &config.jenkins_server_ip,
            &config.build_stage_type,
            &config.user_prefix,
        )
    }

    /// # build
    ///
    /// Collect everything known about `run` into a fresh summary.
    ///
    /// ### Arguments
    ///
    /// * `run`: the completed run.
    /// * `artifacts`: artifact storage of the run. listing failures leave a partial list.
    /// * `log_index`: name of the log symlink, used as correlation key.
    pub fn build<R, A>(&self, run: &R, artifacts: &A, log_index: &str) -> RunSummary
    where
        R: RunInfoProvider + ?Sized,
        A: ArtifactLister + ?Sized,
    {
        let causes = run.causes();
        for cause in causes.iter().flatten() {
            debug!(cause = %cause, "run cause");
        }

        RunSummary {
            jenkins_base_url: self.jenkins_base_url.to_string(),
            build_type: self.build_type.to_string(),
            build_name: run.full_display_name(),
            build_cause: build_cause_string(causes.as_deref()),
            build_number: run.number(),
            build_user_prefix: self.user_prefix.to_string(),
            build_log_index: log_index.to_string(),
            build_url: run.url(),
            artifact_list: collect_artifact_list(artifacts),
        }
    }
}

/// Every description followed by `.`, in order. Empty when there is nothing.
pub fn build_cause_string(causes: Option<&[String]>) -> String {
    causes
        .unwrap_or_default()
        .iter()
        .fold(String::new(), |mut acc, cause| {
            acc.push_str(cause);
            acc.push('.');
            acc
        })
}

/// Best effort artifact listing, one `<name>+<uri>` per artifact.
///
/// Directories directly under the root are replaced by their immediate
/// children, deeper levels are not visited. An I/O failure stops the walk and
/// keeps what was collected so far.
pub fn collect_artifact_list<A: ArtifactLister + ?Sized>(artifacts: &A) -> Vec<String> {
    let mut list = Vec::new();

    if let Err(e) = walk_artifacts(artifacts, &mut list) {
        warn!(
            collected = list.len(),
            "{}",
            formatx!(ERR_ARTIFACT_LISTING_FAILED, e.to_string()).unwrap_or_default()
        );
    }

    list
}

fn walk_artifacts<A: ArtifactLister + ?Sized>(
    artifacts: &A,
    list: &mut Vec<String>,
) -> io::Result<()> {
    for entry in artifacts.list("")? {
        debug!(name = %entry.name, directory = entry.is_directory, "artifact root entry");
        if entry.is_directory {
            for child in artifacts.list(&entry.relative_path)? {
                list.push(format!("{}+{}", child.name, child.uri));
            }
        } else {
            list.push(format!("{}+{}", entry.name, entry.uri));
        }
    }

    Ok(())
}
