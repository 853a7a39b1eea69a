use crate::jenkins::jenkins_model::recorded_artifact::RecordedArtifact;
use crate::jenkins::jenkins_model::run_status::RunStatus;
use crate::jenkins::jenkins_model::workflow_action::{MaybeWorkflowAction, WorkflowAction};
use serde::Deserialize;

/// Snapshot of a completed run, as exported by `<run url>/api/json`.
#[derive(Deserialize, Debug)]
pub struct WorkflowRun {
    pub number: u32,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub url: String,

    #[serde(rename = "fullDisplayName", default)]
    pub full_display_name: String,

    #[serde(default)]
    pub actions: Vec<MaybeWorkflowAction>,

    /// `None` while Jenkins has not recorded a result.
    #[serde(default)]
    pub result: Option<RunStatus>,

    #[serde(default)]
    pub artifacts: Vec<RecordedArtifact>,
}

impl WorkflowRun {
    /// Jenkins ids default to the build number when not exported.
    pub fn id(&self) -> String {
        self.id.clone().unwrap_or_else(|| self.number.to_string())
    }

    /// Cause descriptions of every cause action, in recorded order.
    ///
    /// returns: `None` if the run carries no cause action at all.
    pub fn causes(&self) -> Option<Vec<String>> {
        let mut found = false;
        let mut descriptions = Vec::new();

        for action in &self.actions {
            if let MaybeWorkflowAction::WorkflowAction(WorkflowAction::Causes { causes }) = action {
                found = true;
                descriptions.extend(causes.iter().map(|c| c.description()));
            }
        }

        found.then_some(descriptions)
    }
}
