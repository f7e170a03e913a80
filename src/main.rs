mod adapters;
mod application;
mod cli;
mod ports;
mod repo_resolution;
mod shared;

use adapters::outbound::console::StderrDiagnostics;
use adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
use adapters::outbound::network::RegistryResolver;
use application::dto::ReportRequest;
use application::use_cases::ResolveComponentsUseCase;
use cli::Args;
use shared::error::{ExitCode, SbomError};
use shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    validate_sbom_path(&args.sbom_file_path)?;

    // Create adapters (Dependency Injection)
    let sbom_reader = FileSystemReader::new();
    let release_resolver = RegistryResolver::new()?;
    let output_presenter = StdoutPresenter::new();
    let diagnostics = StderrDiagnostics::new(args.verbose);

    // Create use case with injected dependencies
    let use_case = ResolveComponentsUseCase::new(
        sbom_reader,
        release_resolver,
        output_presenter,
        diagnostics,
    );

    // Execute use case; resolution failures are recovered per component
    // and never affect the exit status
    let request = ReportRequest::new(args.sbom_file_path);
    use_case.execute(request)?;

    Ok(())
}

fn validate_sbom_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SbomError::InvalidSbomPath {
            path: path.to_path_buf(),
            reason: "File does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for SBOM paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| SbomError::InvalidSbomPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::InvalidSbomPath {
            path: path.to_path_buf(),
            reason: "Security: SBOM path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(SbomError::InvalidSbomPath {
            path: path.to_path_buf(),
            reason: "Not a regular file".to_string(),
        }
        .into());
    }

    Ok(())
}
