use serde::Deserialize;

/// Result classification of a completed run, as reported by Jenkins.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "UNSTABLE")]
    Unstable,
    #[serde(rename = "FAILURE")]
    Failure,
    #[serde(rename = "NOT_BUILT")]
    NotBuilt,
    #[serde(rename = "ABORTED")]
    Aborted,
    #[serde(other)]
    Unknown,
}

impl RunStatus {
    /// Whether the run went all the way through its steps, whatever their outcome.
    /// Only interrupted runs (`ABORTED`, `NOT_BUILT`) and unrecognized results are not.
    pub fn is_complete_build(&self) -> bool {
        matches!(
            self,
            RunStatus::Success | RunStatus::Unstable | RunStatus::Failure
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_build() {
        assert!(RunStatus::Success.is_complete_build());
        assert!(RunStatus::Unstable.is_complete_build());
        assert!(RunStatus::Failure.is_complete_build());
        assert!(!RunStatus::Aborted.is_complete_build());
        assert!(!RunStatus::NotBuilt.is_complete_build());
        assert!(!RunStatus::Unknown.is_complete_build());
    }

    #[test]
    fn test_unrecognized_status_is_unknown() {
        let status: RunStatus = serde_json::from_str(r#""WHATEVER""#).unwrap();
        assert_eq!(status, RunStatus::Unknown);
    }
}
