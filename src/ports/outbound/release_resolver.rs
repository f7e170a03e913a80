use crate::repo_resolution::domain::ResolvedRelease;
use thiserror::Error;

/// Recoverable resolution failure for a single purl.
///
/// This is the value-error class of the resolver contract: it carries a
/// human-readable message and is caught at the per-component step, never
/// aborting processing of the remaining components.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{0}")]
    InvalidPurl(String),

    #[error("unsupported package type '{0}'")]
    UnsupportedType(String),

    #[error("{0}")]
    Unresolvable(String),
}

/// ReleaseResolver port for mapping purls to repository and release metadata
///
/// This port abstracts the external resolution collaborator (package
/// registry APIs) that turns a package URL into its source-control
/// repository and release location.
pub trait ReleaseResolver {
    /// Resolves one package URL string
    ///
    /// # Arguments
    /// * `purl` - A package-URL-formatted identifier, e.g. `pkg:pypi/requests@2.31.0`
    ///
    /// # Returns
    /// The resolved release metadata: package name, optional VCS repository,
    /// specified version, and optional release URL
    ///
    /// # Errors
    /// Returns a `ResolveError` when the purl is malformed, names an
    /// unsupported ecosystem, or cannot be found upstream
    fn resolve(&self, purl: &str) -> std::result::Result<ResolvedRelease, ResolveError>;
}
