use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Branch manifest in the shape the catalyst downloader reads.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestRecord {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub branch: String,
    pub commit: String,
    pub builds: BTreeMap<String, String>,
    #[serde(rename = "srcFilenames")]
    pub src_filenames: BTreeMap<String, String>,
}

impl ManifestRecord {
    pub fn new(
        git_ref: impl Into<String>,
        branch: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            git_ref: git_ref.into(),
            branch: branch.into(),
            commit: commit.into(),
            builds: BTreeMap::new(),
            src_filenames: BTreeMap::new(),
        }
    }

    /// Compact JSON, no trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
