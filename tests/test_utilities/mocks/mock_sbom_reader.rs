use sbom2repo::prelude::*;
use std::path::Path;

/// Mock SbomReader for testing
///
/// Parses an in-memory JSON string instead of touching the file system.
pub struct MockSbomReader {
    json: String,
    should_fail: bool,
}

impl MockSbomReader {
    pub fn new(json: &str) -> Self {
        Self {
            json: json.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            json: String::new(),
            should_fail: true,
        }
    }
}

impl SbomReader for MockSbomReader {
    fn read_and_parse_sbom(&self, _sbom_path: &Path) -> Result<SbomDocument> {
        if self.should_fail {
            anyhow::bail!("Mock SBOM reader failure");
        }
        Ok(serde_json::from_str(&self.json)?)
    }
}
