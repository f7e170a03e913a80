use crate::repo_resolution::domain::SbomDocument;
use crate::shared::Result;
use std::path::Path;

/// SbomReader port for loading CycloneDX SBOM documents
///
/// This port abstracts the file system operations needed to read and
/// parse an SBOM file into an in-memory document.
pub trait SbomReader {
    /// Reads the SBOM file at the given path and parses it as CycloneDX JSON
    ///
    /// # Arguments
    /// * `sbom_path` - Path to the CycloneDX JSON file
    ///
    /// # Returns
    /// The parsed SBOM document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The contents are not valid JSON
    fn read_and_parse_sbom(&self, sbom_path: &Path) -> Result<SbomDocument>;
}
