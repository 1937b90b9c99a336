use manifest_core::config::ManifestConfig;
use manifest_core::error::CoreError;
use manifest_core::manifest::generator::generate_manifest;
use manifest_core::output::{set_output, ENV_GITHUB_OUTPUT};
use tracing_subscriber::EnvFilter;

fn main() {
    // Inputs come from the environment only; the binary takes no arguments.
    init_tracing();

    match run() {
        Ok(()) => std::process::exit(0),
        Err(e @ CoreError::Configuration(_)) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("manifest generation failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), CoreError> {
    let config = ManifestConfig::from_env()?;
    let generated = generate_manifest(&config)?;

    match std::env::var(ENV_GITHUB_OUTPUT) {
        Ok(path) if !path.is_empty() => {
            set_output(&path, "manifest-file", &generated.file_name)?;
            tracing::debug!(output = %path, "published manifest-file output");
        }
        _ => tracing::info!(manifest_file = %generated.file_name, "no GITHUB_OUTPUT set"),
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout is left to the caller; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
