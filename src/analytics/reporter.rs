use crate::analytics::{RunSummary, RunSummaryBuilder};
use crate::config::NotifierConfig;
use crate::constant::log::*;
use crate::notifier_error::NotifierError;
use crate::pretty_log::{colored_println, ThemeColor};
use crate::run_source::{ArtifactLister, RunInfoProvider};
use formatx::formatx;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Name shared by the log symlink and the `build_log_index` of the payload.
pub fn log_index_filename(user_prefix: &str, build_stage_type: &str, run_id: &str) -> String {
    format!("{}-x-{}-x-{}", user_prefix, build_stage_type, run_id)
}

pub fn log_symlink_path(filebeats_directory: &str, filename: &str) -> PathBuf {
    Path::new(filebeats_directory).join(format!("{}.log", filename))
}

pub fn create_log_symlink(link: &Path, target: &Path) -> Result<(), NotifierError> {
    #[cfg(unix)]
    let result = std::os::unix::fs::symlink(target, link);
    #[cfg(windows)]
    let result = std::os::windows::fs::symlink_file(target, link);
    #[cfg(not(any(unix, windows)))]
    let result: std::io::Result<()> = Err(std::io::ErrorKind::Unsupported.into());

    result.map_err(|source| NotifierError::Symlink {
        link: link.to_path_buf(),
        target: target.to_path_buf(),
        source,
    })
}

/// Ships the outcome of completed runs to the analytics service.
///
/// Every step is best effort: failures are logged to the tracing subscriber and
/// the listener, then dropped. Only `failBuild` decides what [`report`] returns.
///
/// [`report`]: AnalyticsReporter::report
pub struct AnalyticsReporter {
    config: NotifierConfig,
    client: Client,
}

impl AnalyticsReporter {
    pub fn new(config: NotifierConfig) -> Result<Self, NotifierError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        // unbounded unless configured
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            config,
            client: builder.build()?,
        })
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// # report
    ///
    /// Link the run log into the filebeats directory and post the run summary.
    ///
    /// ### Arguments
    ///
    /// * `run`: the completed run.
    /// * `artifacts`: artifact storage of the run.
    /// * `listener`: console of the run, receives progress lines.
    ///
    /// returns: `!failBuild`, whatever happened on the way.
    pub async fn report<R, A, W>(&self, run: &R, artifacts: &A, listener: &mut W) -> bool
    where
        R: RunInfoProvider + ?Sized,
        A: ArtifactLister + ?Sized,
        W: Write,
    {
        let config = &self.config;
        colored_println(listener, ThemeColor::Main, REPORT_RUNNING);
        info!(
            server_ip = %config.server_ip,
            upload_only_on_fail = config.upload_only_on_fail,
            build_stage_type = %config.build_stage_type,
            jenkins_server_ip = %config.jenkins_server_ip,
            user_prefix = %config.user_prefix,
            "build analytics running"
        );

        let run_id = run.id();
        let success = match run.result() {
            Some(result) => result.is_complete_build(),
            None => {
                warn!("{}", formatx!(ERR_RESULT_UNAVAILABLE, &run_id).unwrap_or_default());
                false
            }
        };

        if config.upload_only_on_fail && success {
            let msg = formatx!(REPORT_SKIPPED, &run_id).unwrap_or_default();
            info!("{}", msg);
            colored_println(listener, ThemeColor::Second, &msg);
        } else {
            let filename =
                log_index_filename(&config.user_prefix, &config.build_stage_type, &run_id);

            let log_file = run.log_file();
            let target = std::path::absolute(&log_file).unwrap_or(log_file);
            let link = log_symlink_path(&config.filebeats_directory, &filename);
            info!(
                "{}",
                formatx!(REPORT_LINKING, link.display(), target.display()).unwrap_or_default()
            );
            if let Err(e) = create_log_symlink(&link, &target) {
                let msg = formatx!(ERR_SYMLINK_FAILED, e.to_string()).unwrap_or_default();
                warn!("{}", msg);
                colored_println(listener, ThemeColor::Warn, &msg);
            }

            let summary = RunSummaryBuilder::from_config(config).build(run, artifacts, &filename);
            colored_println(
                listener,
                ThemeColor::Second,
                &formatx!(REPORT_UPLOADING, &summary.build_name, &config.server_ip)
                    .unwrap_or_default(),
            );
            match self.upload(&summary).await {
                Ok(_) => colored_println(listener, ThemeColor::Success, REPORT_UPLOADED),
                Err(e) => {
                    let msg = formatx!(ERR_UPLOAD_FAILED, e.to_string()).unwrap_or_default();
                    warn!("{}", msg);
                    colored_println(listener, ThemeColor::Warn, &msg);
                }
            }
        }

        if config.fail_build {
            colored_println(listener, ThemeColor::Error, REPORT_FAIL_BUILD);
        }

        !config.fail_build
    }

    /// Post `summary` as json and hand back the response body.
    pub async fn upload(&self, summary: &RunSummary) -> Result<String, NotifierError> {
        let payload = serde_json::to_string(summary).map_err(NotifierError::Summary)?;
        debug!(payload = %payload, "run summary");

        let url = Url::parse(&self.config.server_ip).map_err(|e| NotifierError::InvalidEndpoint {
            url: self.config.server_ip.clone(),
            reason: e.to_string(),
        })?;

        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        for line in body.lines() {
            info!(line, "output from server");
        }

        if !status.is_success() {
            return Err(NotifierError::UnexpectedStatus { status, body });
        }

        Ok(body)
    }
}
