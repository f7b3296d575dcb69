//! Entry point: patches the translation store under the current directory.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // stdout carries the progress lines only
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::default().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    match patch_working_directory() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn patch_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let report = translation_patcher::run_workspace(PathBuf::from("."))?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{report}")?;
    stdout.flush()?;

    Ok(())
}
