pub mod cause;
pub mod recorded_artifact;
pub mod run_status;
pub mod workflow_action;
pub mod workflow_run;
