use crate::analytics::AnalyticsReporter;
use crate::config::{get_config_file_path, NotifierConfig};
use crate::constant::log::*;
use crate::jenkins::query::{load_run_record, RunRecordSource};
use crate::jenkins::util::get_jenkins_absolute_url;
use crate::notifier_error::NotifierError;
use crate::pretty_log::{colored_println, ThemeColor};
use crate::run_source::{
    ArtifactDirectory, JenkinsRun, RecordedArtifacts, RunArtifacts, RunInfoProvider,
};
use formatx::formatx;
use reqwest::Client;
use std::io::Write;
use std::path::{Path, PathBuf};

fn resolve_config_path(config: Option<&Path>) -> Result<PathBuf, NotifierError> {
    get_config_file_path(config).ok_or_else(|| {
        NotifierError::MissingParam(
            formatx!(ERR_NEED_PARAM, "config").unwrap_or_default(),
        )
    })
}

pub fn load_config(config: Option<&Path>) -> Result<NotifierConfig, NotifierError> {
    let path = resolve_config_path(config)?;
    if !path.is_file() {
        return Err(NotifierError::Custom(
            formatx!(ERR_CONFIG_NOT_FOUND, path.display()).unwrap_or_default(),
        ));
    }

    NotifierConfig::load(&path)
}

/// # cli do notify
///
/// Report one completed run.
///
/// returns: what the notifier tells the host, `false` means the build should fail.
pub async fn cli_do_notify<W: Write>(
    out: &mut W,
    config: Option<&Path>,
    run: &str,
    log_file: PathBuf,
    artifacts: Option<PathBuf>,
) -> Result<bool, NotifierError> {
    let config = load_config(config)?;
    let reporter = AnalyticsReporter::new(config)?;

    let record = load_run_record(&Client::new(), &RunRecordSource::parse(run)).await?;
    let run = JenkinsRun::new(record, log_file);

    let artifacts = match artifacts {
        Some(dir) => RunArtifacts::Directory(ArtifactDirectory::new(&dir)?),
        None => {
            colored_println(out, ThemeColor::Second, HINT_NO_ARTIFACT_DIR);
            let run_url =
                get_jenkins_absolute_url(&reporter.config().jenkins_server_ip, &run.url());
            RunArtifacts::Recorded(RecordedArtifacts::new(&run_url, &run.record.artifacts))
        }
    };

    Ok(reporter.report(&run, &artifacts, out).await)
}

#[allow(clippy::too_many_arguments)]
pub fn cli_do_init<W: Write>(
    out: &mut W,
    config: Option<&Path>,
    server_ip: String,
    build_stage_type: String,
    filebeats_directory: String,
    user_prefix: String,
    jenkins_server_ip: String,
    upload_only_on_fail: bool,
    fail_build: bool,
    request_timeout_secs: Option<u64>,
) -> Result<(), NotifierError> {
    for (name, value) in [
        (PARAM_SERVER_IP, &server_ip),
        (PARAM_BUILD_STAGE_TYPE, &build_stage_type),
        (PARAM_FILEBEATS_DIRECTORY, &filebeats_directory),
        (PARAM_USER_PREFIX, &user_prefix),
        (PARAM_JENKINS_SERVER_IP, &jenkins_server_ip),
    ] {
        if value.trim().is_empty() {
            return Err(NotifierError::MissingParam(name.to_string()));
        }
    }

    let path = resolve_config_path(config)?;
    NotifierConfig {
        server_ip,
        build_stage_type,
        filebeats_directory,
        user_prefix,
        jenkins_server_ip,
        upload_only_on_fail,
        fail_build,
        request_timeout_secs,
    }
    .save(&path)?;

    colored_println(
        out,
        ThemeColor::Success,
        &formatx!(CONFIG_SAVED, path.display()).unwrap_or_default(),
    );
    Ok(())
}

pub fn cli_do_debug<W: Write>(out: &mut W, config: Option<&Path>) -> Result<(), NotifierError> {
    let path = resolve_config_path(config)?;
    colored_println(
        out,
        ThemeColor::Main,
        &formatx!(HINT_CONFIG_PATH, path.display()).unwrap_or_default(),
    );

    let config = load_config(Some(path.as_path()))?;
    colored_println(out, ThemeColor::Second, &toml::to_string(&config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_then_debug() {
        let dir = tempfile::tempdir().unwrap();
        let mut out: Vec<u8> = Vec::new();

        cli_do_init(
            &mut out,
            Some(dir.path()),
            "http://analytics/api".to_string(),
            "t".to_string(),
            "/var/filebeat".to_string(),
            "u".to_string(),
            "https://ci.example.com/".to_string(),
            true,
            false,
            None,
        )
        .unwrap();

        let config = load_config(Some(dir.path())).unwrap();
        assert!(config.upload_only_on_fail);
        assert_eq!(config.user_prefix, "u");

        cli_do_debug(&mut out, Some(dir.path())).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("serverIp = \"http://analytics/api\""));
    }

    #[test]
    fn test_init_requires_params() {
        let dir = tempfile::tempdir().unwrap();

        let result = cli_do_init(
            &mut std::io::sink(),
            Some(dir.path()),
            "http://analytics/api".to_string(),
            " ".to_string(),
            "/var/filebeat".to_string(),
            "u".to_string(),
            "https://ci.example.com/".to_string(),
            false,
            false,
            None,
        );

        assert!(matches!(result, Err(NotifierError::MissingParam(p)) if p == PARAM_BUILD_STAGE_TYPE));
    }

    #[test]
    fn test_missing_config() {
        let dir = tempfile::tempdir().unwrap();

        assert!(load_config(Some(dir.path().join("absent.toml").as_path())).is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_notify_from_exported_record() {
        let dir = tempfile::tempdir().unwrap();
        let filebeats = dir.path().join("filebeat");
        std::fs::create_dir(&filebeats).unwrap();
        let log_file = dir.path().join("log");
        std::fs::write(&log_file, "done\n").unwrap();
        let record = dir.path().join("run.json");
        std::fs::write(
            &record,
            r#"{"number":5,"id":"5","url":"job/a/5/","fullDisplayName":"a #5","result":"FAILURE",
                "artifacts":[{"fileName":"x.bin","relativePath":"out/x.bin"}]}"#,
        )
        .unwrap();

        let config_path = dir.path().join("notifier.toml");
        NotifierConfig {
            server_ip: "http://127.0.0.1:1/ingest".to_string(),
            build_stage_type: "t".to_string(),
            filebeats_directory: filebeats.to_string_lossy().to_string(),
            user_prefix: "u".to_string(),
            jenkins_server_ip: "https://ci.example.com/".to_string(),
            fail_build: true,
            ..Default::default()
        }
        .save(&config_path)
        .unwrap();

        let mut out: Vec<u8> = Vec::new();
        let ok = cli_do_notify(
            &mut out,
            Some(config_path.as_path()),
            record.to_str().unwrap(),
            log_file.clone(),
            None,
        )
        .await
        .unwrap();

        assert!(!ok);
        assert_eq!(
            std::fs::read_link(filebeats.join("u-x-t-x-5.log")).unwrap(),
            log_file
        );
        assert!(String::from_utf8(out).unwrap().contains(HINT_NO_ARTIFACT_DIR));
    }
}
