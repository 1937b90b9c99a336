use crate::error::{CoreError, CoreResult};
use crate::manifest::model::ManifestRecord;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ARTIFACT_PREFIX: &str = "livepeer";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Darwin,
    Windows,
}

impl Platform {
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s {
            "linux" => Ok(Platform::Linux),
            "darwin" => Ok(Platform::Darwin),
            "windows" => Ok(Platform::Windows),
            other => Err(CoreError::InvalidInput(format!(
                "unsupported platform: {}",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Darwin => "darwin",
            Platform::Windows => "windows",
        }
    }

    pub fn archive_suffix(&self) -> &'static str {
        match self {
            Platform::Linux | Platform::Darwin => "tar.gz",
            Platform::Windows => "zip",
        }
    }
}

/// Split a comma separated action input, trimming items and dropping blanks.
pub fn parse_input_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Platform x architecture expansion that fills `builds` and `srcFilenames`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMatrix {
    pub project_name: String,
    pub bucket_domain: String,
    pub platforms: Vec<Platform>,
    pub architectures: Vec<String>,
    pub artifact_prefix: String,
}

impl BuildMatrix {
    pub fn populate(&self, commit: &str, record: &mut ManifestRecord) {
        for platform in &self.platforms {
            for arch in &self.architectures {
                let key = format!("{}-{}", platform.as_str(), arch);
                let file_name = format!(
                    "{}-{}-{}.{}",
                    self.artifact_prefix,
                    self.project_name,
                    key,
                    platform.archive_suffix()
                );
                let url = format!(
                    "https://{}/{}/{}/{}",
                    self.bucket_domain, self.project_name, commit, file_name
                );
                record.src_filenames.insert(key.clone(), file_name);
                record.builds.insert(key, url);
            }
        }
    }
}
