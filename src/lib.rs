//! sbom2repo - resolve CycloneDX SBOM components to source repositories
//!
//! This library reads a CycloneDX SBOM, extracts the package URL (purl)
//! of each component, resolves it to a source-control repository and
//! release location through package registry lookups, and renders a
//! human-readable report. It follows hexagonal architecture: the
//! application core only sees port traits, and all I/O lives in adapters
//! injected at the entry point.
//!
//! # Architecture
//!
//! - **Domain Layer** (`repo_resolution`): SBOM and resolution models plus
//!   pure rendering services
//! - **Application Layer** (`application`): the resolution use case
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom2repo::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let sbom_reader = FileSystemReader::new();
//! let release_resolver = RegistryResolver::new()?;
//! let output_presenter = StdoutPresenter::new();
//! let diagnostics = StderrDiagnostics::new(false);
//!
//! // Create use case
//! let use_case = ResolveComponentsUseCase::new(
//!     sbom_reader,
//!     release_resolver,
//!     output_presenter,
//!     diagnostics,
//! );
//!
//! // Execute
//! let request = ReportRequest::new(PathBuf::from("sbom.json"));
//! let summary = use_case.execute(request)?;
//! eprintln!("{} component(s) processed", summary.total());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod ports;
pub mod repo_resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrDiagnostics;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
    pub use crate::adapters::outbound::network::RegistryResolver;
    pub use crate::application::dto::{ReportRequest, ReportSummary};
    pub use crate::application::use_cases::ResolveComponentsUseCase;
    pub use crate::ports::outbound::{
        DiagnosticsReporter, OutputPresenter, ReleaseResolver, ResolveError, SbomReader,
    };
    pub use crate::repo_resolution::domain::{
        Component, ComponentOutcome, ResolvedRelease, SbomDocument,
    };
    pub use crate::repo_resolution::services::ReportRenderer;
    pub use crate::shared::Result;
}
