pub mod config;
pub mod manifest;
pub mod output;
pub mod sanitize;

pub mod error;

pub use config::ManifestConfig;
pub use manifest::generator::{build_manifest, generate_manifest, GeneratedManifest};
pub use manifest::model::ManifestRecord;
pub use sanitize::{sanitize_branch_name, SlashReplacement};
