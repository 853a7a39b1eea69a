use crate::jenkins::jenkins_model::run_status::RunStatus;
use crate::jenkins::jenkins_model::workflow_run::WorkflowRun;
use crate::run_source::RunInfoProvider;
use std::path::PathBuf;

/// A Jenkins run record together with the location of its console log.
///
/// The log path is not part of `api/json`, so the host hands it over separately
/// (usually `$JENKINS_HOME/jobs/<job>/builds/<id>/log`).
#[derive(Debug)]
pub struct JenkinsRun {
    pub record: WorkflowRun,
    pub log_file: PathBuf,
}

impl JenkinsRun {
    pub fn new(record: WorkflowRun, log_file: PathBuf) -> Self {
        Self { record, log_file }
    }
}

impl RunInfoProvider for JenkinsRun {
    fn result(&self) -> Option<RunStatus> {
        self.record.result
    }

    fn id(&self) -> String {
        self.record.id()
    }

    fn number(&self) -> u32 {
        self.record.number
    }

    fn url(&self) -> String {
        self.record.url.clone()
    }

    fn full_display_name(&self) -> String {
        self.record.full_display_name.clone()
    }

    fn causes(&self) -> Option<Vec<String>> {
        self.record.causes()
    }

    fn log_file(&self) -> PathBuf {
        self.log_file.clone()
    }
}
