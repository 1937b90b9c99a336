use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Replace every `/` in a branch name with `-` so it can serve as a single
/// path segment. Nothing else is touched.
pub fn sanitize_branch_name(name: &str) -> String {
    name.replace('/', "-")
}

/// How `/` in a branch name is rewritten before it becomes a file name.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlashReplacement {
    #[default]
    Hyphen,
    Underscore,
    Keep,
}

impl SlashReplacement {
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hyphen" => Ok(SlashReplacement::Hyphen),
            "underscore" => Ok(SlashReplacement::Underscore),
            "keep" => Ok(SlashReplacement::Keep),
            other => Err(CoreError::Configuration(format!(
                "unknown branch separator policy: {} (expected hyphen|underscore|keep)",
                other
            ))),
        }
    }

    pub fn apply(&self, name: &str) -> String {
        match self {
            SlashReplacement::Hyphen => sanitize_branch_name(name),
            SlashReplacement::Underscore => name.replace('/', "_"),
            // Keep writes `a/b.json`, which only works if `a/` already exists.
            SlashReplacement::Keep => name.to_string(),
        }
    }
}
