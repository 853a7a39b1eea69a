use crate::constant::log::*;
use crate::jenkins::jenkins_model::workflow_run::WorkflowRun;
use crate::jenkins::util::get_jenkins_run_api_url;
use crate::notifier_error::NotifierError;
use formatx::formatx;
use reqwest::Client;
use std::path::Path;
use tracing::{debug, info};

/// Where the run record comes from: an exported `api/json` file or a live run url.
#[derive(Debug, Clone, PartialEq)]
pub enum RunRecordSource {
    File(String),
    Url(String),
}

impl RunRecordSource {
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            RunRecordSource::Url(value.to_string())
        } else {
            RunRecordSource::File(value.to_string())
        }
    }
}

pub fn parse_run_record(content: &str) -> Result<WorkflowRun, NotifierError> {
    serde_json::from_str(content).map_err(NotifierError::RunRecord)
}

pub fn read_run_record(path: &Path) -> Result<WorkflowRun, NotifierError> {
    debug!(path = %path.display(), "reading run record");
    let content = std::fs::read_to_string(path)?;
    parse_run_record(&content)
}

pub async fn query_run_record(client: &Client, run_url: &str) -> Result<WorkflowRun, NotifierError> {
    let api_url = get_jenkins_run_api_url(run_url);
    info!("{}", formatx!(QUERYING_RUN_RECORD, &api_url).unwrap_or_default());

    let resp = client
        .get(api_url.as_str())
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(NotifierError::UnexpectedStatus { status, body });
    }

    parse_run_record(&body)
}

pub async fn load_run_record(
    client: &Client,
    source: &RunRecordSource,
) -> Result<WorkflowRun, NotifierError> {
    match source {
        RunRecordSource::File(path) => read_run_record(Path::new(path)),
        RunRecordSource::Url(url) => query_run_record(client, url).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::Router;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            RunRecordSource::parse("https://ci.example.com/job/a/1/"),
            RunRecordSource::Url("https://ci.example.com/job/a/1/".to_string())
        );
        assert_eq!(
            RunRecordSource::parse("run.json"),
            RunRecordSource::File("run.json".to_string())
        );
    }

    #[test]
    fn test_read_run_record_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(&path, r#"{"number":3,"id":"3","url":"job/a/3/","result":"SUCCESS"}"#)
            .unwrap();

        let run = read_run_record(&path).unwrap();

        assert_eq!(run.number, 3);
        assert_eq!(run.url, "job/a/3/");
    }

    #[test]
    fn test_read_run_record_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            read_run_record(&path),
            Err(NotifierError::RunRecord(_))
        ));
    }

    #[tokio::test]
    async fn test_query_run_record() {
        let app = Router::new().route(
            "/job/a/9/api/json",
            get(|| async { r#"{"number":9,"url":"job/a/9/","result":"ABORTED"}"# }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::new();
        let run = query_run_record(&client, &format!("http://{}/job/a/9/", addr))
            .await
            .unwrap();

        assert_eq!(run.number, 9);
    }
}
