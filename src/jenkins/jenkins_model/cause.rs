use serde::Deserialize;

/// A single reason recorded for why a run was triggered.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Cause {
    #[serde(rename = "_class", default)]
    pub class: Option<String>,

    #[serde(rename = "shortDescription", default)]
    pub short_description: Option<String>,
}

impl Cause {
    /// Human-readable description, falling back to the cause class when Jenkins
    /// did not export one.
    pub fn description(&self) -> String {
        self.short_description
            .as_deref()
            .or(self.class.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}
