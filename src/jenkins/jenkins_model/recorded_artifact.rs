use serde::Deserialize;

/// One archived file. Its name is the last segment of `relativePath`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RecordedArtifact {
    #[serde(rename = "relativePath")]
    pub relative_path: String,
}
