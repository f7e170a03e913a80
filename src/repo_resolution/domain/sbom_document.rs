use serde::Deserialize;

/// In-memory representation of a CycloneDX SBOM document.
///
/// Only the component list is of interest here. Every other key in the
/// document is ignored during deserialization, and the absence of the
/// `components` key is not an error - it simply yields an empty report.
#[derive(Debug, Clone, Deserialize)]
pub struct SbomDocument {
    #[serde(default)]
    pub components: Option<Vec<Component>>,
}

/// A single component entry from the SBOM's component list.
///
/// Components are not required to carry a purl; those without one are
/// reported as skipped rather than resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub purl: Option<String>,
}

impl SbomDocument {
    /// Number of components in the document, zero when the key is absent.
    pub fn component_count(&self) -> usize {
        self.components.as_ref().map_or(0, Vec::len)
    }
}
