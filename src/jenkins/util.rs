/// Jenkins serves the JSON form of any run page under `api/json`.
pub fn get_jenkins_run_api_url(run_url: &str) -> String {
    format!("{}/api/json", run_url.trim_end_matches('/'))
}

/// Run urls in run records are relative to the Jenkins root.
pub fn get_jenkins_absolute_url(jenkins_url: &str, relative: &str) -> String {
    if relative.starts_with("http://") || relative.starts_with("https://") {
        relative.to_string()
    } else {
        format!(
            "{}/{}",
            jenkins_url.trim_end_matches('/'),
            relative.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_api_url() {
        assert_eq!(
            get_jenkins_run_api_url("https://ci.example.com/job/a/1/"),
            "https://ci.example.com/job/a/1/api/json"
        );
        assert_eq!(
            get_jenkins_run_api_url("https://ci.example.com/job/a/1"),
            "https://ci.example.com/job/a/1/api/json"
        );
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(
            get_jenkins_absolute_url("https://ci.example.com/", "/job/a/1/"),
            "https://ci.example.com/job/a/1/"
        );
        assert_eq!(
            get_jenkins_absolute_url("https://ci.example.com", "https://other/job/a/1/"),
            "https://other/job/a/1/"
        );
    }
}
