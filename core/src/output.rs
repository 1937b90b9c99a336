use crate::error::{CoreError, CoreResult};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub const ENV_GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

/// Append `name=value` to a GitHub Actions output file.
pub fn set_output(path: impl AsRef<Path>, name: &str, value: &str) -> CoreResult<()> {
    if name.is_empty() || name.contains('=') || name.contains('\n') {
        return Err(CoreError::InvalidInput(format!(
            "invalid output name: {:?}",
            name
        )));
    }
    // Multi-line values need the heredoc form, which nothing here emits.
    if value.contains('\n') || value.contains('\r') {
        return Err(CoreError::InvalidInput(format!(
            "output {} must be a single line",
            name
        )));
    }
    let mut f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    f.write_all(format!("{}={}\n", name, value).as_bytes())?;
    Ok(())
}
