use crate::repo_resolution::domain::ComponentOutcome;

/// ReportRenderer - pure rendering of component outcomes into report text.
///
/// Keeping the rendering separate from the resolution step means the use
/// case decides *what happened* per component while this service decides
/// *how it is printed*. Every rendered block is terminated with a newline
/// so blocks can be written to the output incrementally, in order.
pub struct ReportRenderer;

impl ReportRenderer {
    /// Notice emitted when the document has no components key at all.
    pub fn render_missing_components() -> &'static str {
        "No components found in the SBOM.\n"
    }

    /// Renders a single component outcome as its report block.
    pub fn render(outcome: &ComponentOutcome) -> String {
        match outcome {
            ComponentOutcome::MissingPurl => "No purl found for component.\n".to_string(),
            ComponentOutcome::Failed { purl, message } => {
                format!("Error processing purl: {} - {}\n", purl, message)
            }
            ComponentOutcome::Resolved(release) => {
                let mut block = String::new();
                block.push_str(&format!("Package: {}\n", release.package_name()));
                match release.vcs_repo() {
                    Some(repo) => block.push_str(&format!("Repository: {}\n", repo)),
                    None => block.push_str("No VCS repository found.\n"),
                }
                block.push_str(&format!("Version: {}\n", release.specified_version()));
                match release.release_url() {
                    Some(url) => block.push_str(&format!("Release URL: {}\n", url)),
                    None => block.push_str("No release URL found.\n"),
                }
                // Blank line between components
                block.push('\n');
                block
            }
        }
    }
}
