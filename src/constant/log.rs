pub const ERR_NEED_PARAM: &str = "Need param: {}";
pub const ERR_RESULT_UNAVAILABLE: &str = "Result is unavailable, treating run {} as not successful.";
pub const ERR_SYMLINK_FAILED: &str = "Failed to link log file: {}";
pub const ERR_ARTIFACT_LISTING_FAILED: &str = "Failed to list artifacts: {}";
pub const ERR_UPLOAD_FAILED: &str = "Failed to upload run summary: {}";
pub const ERR_CONFIG_NOT_FOUND: &str = "Config file not found at {}.";

pub const HINT_CONFIG_PATH: &str = "config path: {}";
pub const HINT_NO_ARTIFACT_DIR: &str = "no artifact directory given, using artifacts recorded by the run.";

pub const REPORT_RUNNING: &str = "Build Analytics - Running";
pub const REPORT_SKIPPED: &str = "Skipping upload as requested, run {} completed.";
pub const REPORT_LINKING: &str = "Creating symbolic link from {} to {}";
pub const REPORT_UPLOADING: &str = "Uploading run summary of {} to {}";
pub const REPORT_UPLOADED: &str = "Run summary uploaded.";
pub const REPORT_FAIL_BUILD: &str = "Configured to fail the build.";
pub const QUERYING_RUN_RECORD: &str = "Querying run record at {}";
pub const CONFIG_SAVED: &str = "Config saved to {}";

pub const PARAM_SERVER_IP: &str = "serverIp";
pub const PARAM_BUILD_STAGE_TYPE: &str = "buildStageType";
pub const PARAM_FILEBEATS_DIRECTORY: &str = "filebeatsDirectory";
pub const PARAM_USER_PREFIX: &str = "userPrefix";
pub const PARAM_JENKINS_SERVER_IP: &str = "jenkinsServerIp";

pub const USER_AGENT: &str = "build-analytics-notifier";
