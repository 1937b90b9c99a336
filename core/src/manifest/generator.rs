use crate::config::ManifestConfig;
use crate::error::CoreResult;
use crate::manifest::model::ManifestRecord;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GeneratedManifest {
    pub path: PathBuf,
    pub file_name: String,
    pub record: ManifestRecord,
}

pub fn manifest_file_name(branch: &str) -> String {
    format!("{}.json", branch)
}

pub fn build_manifest(config: &ManifestConfig) -> CoreResult<ManifestRecord> {
    let branch = config.slash_replacement.apply(&config.branch_name);
    let mut record = ManifestRecord::new(&config.git_ref, branch, &config.commit);
    if let Some(matrix) = &config.matrix {
        matrix.populate(&config.commit, &mut record);
    }
    Ok(record)
}

/// Build the manifest and write it to `<output_dir>/<branch>.json`,
/// overwriting any existing file. Parent directories are not created.
pub fn generate_manifest(config: &ManifestConfig) -> CoreResult<GeneratedManifest> {
    let record = build_manifest(config)?;
    let json = record.to_json()?;
    let file_name = manifest_file_name(&record.branch);
    let path = config.output_dir.join(&file_name);

    fs::write(&path, json.as_bytes())?;
    tracing::info!(
        path = %path.display(),
        builds = record.builds.len(),
        "wrote branch manifest"
    );

    Ok(GeneratedManifest {
        path,
        file_name,
        record,
    })
}
