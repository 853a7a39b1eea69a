use crate::jenkins::jenkins_model::cause::Cause;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(tag = "_class")]
pub enum WorkflowAction {
    #[serde(rename = "hudson.model.CauseAction")]
    Causes {
        #[serde(default)]
        causes: Vec<Cause>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum MaybeWorkflowAction {
    WorkflowAction(WorkflowAction),
    Unknown(#[allow(dead_code)] serde_json::Value),
}
