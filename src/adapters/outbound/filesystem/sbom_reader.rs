use crate::ports::outbound::SbomReader;
use crate::repo_resolution::domain::SbomDocument;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for loading SBOM documents from disk
///
/// This adapter implements the SbomReader port, reading the CycloneDX
/// JSON file with safety checks and parsing it into an SbomDocument.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path).map_err(|e| SbomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
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

        // File size limit prevents accidental reads of huge inputs
        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(SbomError::InvalidSbomPath {
                path: path.to_path_buf(),
                reason: format!(
                    "File is too large ({} bytes). Maximum allowed size is {} bytes",
                    file_size, MAX_FILE_SIZE
                ),
            }
            .into());
        }

        fs::read_to_string(path)
            .map_err(|e| {
                SbomError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_and_parse_sbom(&self, sbom_path: &Path) -> Result<SbomDocument> {
        if !sbom_path.exists() {
            return Err(SbomError::SbomFileNotFound {
                path: sbom_path.to_path_buf(),
                suggestion:
                    "Please check the path, or generate a CycloneDX SBOM for your project first."
                        .to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(sbom_path)?;

        let document: SbomDocument =
            serde_json::from_str(&content).map_err(|e| SbomError::SbomParseError {
                path: sbom_path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(document)
    }
}
