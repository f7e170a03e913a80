use clap::Parser;
use std::path::PathBuf;

/// Resolve CycloneDX SBOM components to their source repositories and releases
#[derive(Parser, Debug)]
#[command(name = "sbom2repo")]
#[command(version)]
#[command(
    about = "Process a CycloneDX SBOM and retrieve VCS repositories and releases",
    long_about = None
)]
pub struct Args {
    /// Path to the CycloneDX SBOM JSON file
    pub sbom_file_path: PathBuf,

    /// Enable trace-level diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
