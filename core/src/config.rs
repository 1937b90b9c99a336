use crate::error::{CoreError, CoreResult};
use crate::manifest::matrix::{parse_input_list, BuildMatrix, Platform, DEFAULT_ARTIFACT_PREFIX};
use crate::sanitize::SlashReplacement;
use std::path::PathBuf;

pub const ENV_REF: &str = "INPUT_REF";
/// GitHub Actions keeps the hyphen from the `ref-name` input.
pub const ENV_BRANCH: &str = "INPUT_REF-NAME";
pub const ENV_BRANCH_FALLBACK: &str = "INPUT_REF_NAME";
pub const ENV_COMMIT: &str = "INPUT_COMMIT";
pub const ENV_BRANCH_SEPARATOR: &str = "INPUT_BRANCH-SEPARATOR";
pub const ENV_OUTPUT_DIR: &str = "INPUT_OUTPUT-DIR";
pub const ENV_PROJECT_NAME: &str = "INPUT_PROJECT-NAME";
pub const ENV_BUCKET_DOMAIN: &str = "INPUT_BUCKET-DOMAIN";
pub const ENV_PLATFORM: &str = "INPUT_PLATFORM";
pub const ENV_ARCHITECTURE: &str = "INPUT_ARCHITECTURE";
pub const ENV_ARTIFACT_PREFIX: &str = "INPUT_ARTIFACT-PREFIX";

/// Everything the generator needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestConfig {
    pub git_ref: String,
    pub branch_name: String,
    pub commit: String,
    pub slash_replacement: SlashReplacement,
    pub output_dir: PathBuf,
    pub matrix: Option<BuildMatrix>,
}

impl ManifestConfig {
    /// Config with the required fields set and defaults for the rest.
    pub fn new(
        git_ref: impl Into<String>,
        branch_name: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            git_ref: git_ref.into(),
            branch_name: branch_name.into(),
            commit: commit.into(),
            slash_replacement: SlashReplacement::default(),
            output_dir: PathBuf::from("."),
            matrix: None,
        }
    }

    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Actions passes unset optional inputs as "", so blank means unset.
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &str| {
            get(key).ok_or_else(|| {
                CoreError::Configuration(format!("required variable {} is not set", key))
            })
        };

        let git_ref = required(ENV_REF)?;
        let commit = required(ENV_COMMIT)?;
        let branch_name = match (get(ENV_BRANCH), get(ENV_BRANCH_FALLBACK)) {
            (Some(primary), Some(fallback)) => {
                if primary != fallback {
                    tracing::warn!(
                        primary = %primary,
                        fallback = %fallback,
                        "both {} and {} are set; using {}",
                        ENV_BRANCH,
                        ENV_BRANCH_FALLBACK,
                        ENV_BRANCH
                    );
                }
                primary
            }
            (Some(primary), None) => primary,
            (None, Some(fallback)) => fallback,
            (None, None) => {
                return Err(CoreError::Configuration(format!(
                    "required variable {} (or {}) is not set",
                    ENV_BRANCH, ENV_BRANCH_FALLBACK
                )))
            }
        };

        let slash_replacement = match get(ENV_BRANCH_SEPARATOR) {
            Some(v) => SlashReplacement::parse(&v)?,
            None => SlashReplacement::default(),
        };
        let output_dir = get(ENV_OUTPUT_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let matrix = match get(ENV_PROJECT_NAME) {
            Some(project_name) => {
                let bucket_domain = get(ENV_BUCKET_DOMAIN).ok_or_else(|| {
                    CoreError::Configuration(format!(
                        "{} is required when {} is set",
                        ENV_BUCKET_DOMAIN, ENV_PROJECT_NAME
                    ))
                })?;
                let platforms = parse_input_list(&get(ENV_PLATFORM).unwrap_or_default())
                    .iter()
                    .map(|p| Platform::parse(p))
                    .collect::<CoreResult<Vec<_>>>()?;
                let architectures = parse_input_list(&get(ENV_ARCHITECTURE).unwrap_or_default());
                Some(BuildMatrix {
                    project_name,
                    bucket_domain,
                    platforms,
                    architectures,
                    artifact_prefix: get(ENV_ARTIFACT_PREFIX)
                        .unwrap_or_else(|| DEFAULT_ARTIFACT_PREFIX.to_string()),
                })
            }
            None => None,
        };

        tracing::debug!(
            git_ref = %git_ref,
            branch_name = %branch_name,
            commit = %commit,
            output_dir = %output_dir.display(),
            matrix = matrix.is_some(),
            "loaded manifest configuration"
        );

        Ok(Self {
            git_ref,
            branch_name,
            commit,
            slash_replacement,
            output_dir,
            matrix,
        })
    }
}
