use crate::application::dto::{ReportRequest, ReportSummary};
use crate::ports::outbound::{DiagnosticsReporter, OutputPresenter, ReleaseResolver, SbomReader};
use crate::repo_resolution::domain::{Component, ComponentOutcome};
use crate::repo_resolution::services::ReportRenderer;
use crate::shared::Result;

/// ResolveComponentsUseCase - Core use case for the component report
///
/// This use case orchestrates the whole pipeline: load the SBOM, walk
/// its components in document order, resolve each purl through the
/// injected resolver, and present one rendered block per component.
/// Blocks are presented incrementally as they are produced, never
/// buffered into a return value, so earlier output stays visible even
/// if a later component fails.
///
/// # Type Parameters
/// * `SR` - SbomReader implementation
/// * `RR` - ReleaseResolver implementation
/// * `OP` - OutputPresenter implementation
/// * `DR` - DiagnosticsReporter implementation
pub struct ResolveComponentsUseCase<SR, RR, OP, DR> {
    sbom_reader: SR,
    release_resolver: RR,
    output_presenter: OP,
    diagnostics: DR,
}

impl<SR, RR, OP, DR> ResolveComponentsUseCase<SR, RR, OP, DR>
where
    SR: SbomReader,
    RR: ReleaseResolver,
    OP: OutputPresenter,
    DR: DiagnosticsReporter,
{
    /// Creates a new ResolveComponentsUseCase with injected dependencies
    pub fn new(sbom_reader: SR, release_resolver: RR, output_presenter: OP, diagnostics: DR) -> Self {
        Self {
            sbom_reader,
            release_resolver,
            output_presenter,
            diagnostics,
        }
    }

    /// Executes the resolution use case
    ///
    /// # Arguments
    /// * `request` - Report request containing the SBOM file path
    ///
    /// # Returns
    /// A ReportSummary tallying resolved, failed, and skipped components
    ///
    /// # Errors
    /// Returns an error only for fatal conditions: the SBOM file cannot
    /// be read or parsed, or the output destination cannot be written.
    /// Resolution failures are recovered per component.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportSummary> {
        self.diagnostics.trace(&format!(
            "📖 Loading SBOM from: {}",
            request.sbom_path.display()
        ));

        let document = self.sbom_reader.read_and_parse_sbom(&request.sbom_path)?;

        self.diagnostics.trace(&format!(
            "✅ Loaded SBOM with {} component(s)",
            document.component_count()
        ));

        let Some(components) = document.components else {
            self.diagnostics
                .trace("SBOM has no components key; emitting notice");
            self.output_presenter
                .present(ReportRenderer::render_missing_components())?;
            return Ok(ReportSummary::default());
        };

        let mut summary = ReportSummary::default();
        for component in &components {
            let outcome = self.resolve_component(component);
            summary.record(&outcome);
            self.output_presenter
                .present(&ReportRenderer::render(&outcome))?;
        }

        self.diagnostics.trace(&format!(
            "✅ Report complete: {} resolved, {} failed, {} without purl",
            summary.resolved, summary.failed, summary.skipped
        ));

        Ok(summary)
    }

    /// Pure mapping step: determines what happened for one component.
    ///
    /// Resolution errors are captured in the outcome rather than
    /// propagated - one bad purl must never abort processing of the
    /// remainder of the document.
    fn resolve_component(&self, component: &Component) -> ComponentOutcome {
        let Some(purl) = component.purl.as_deref() else {
            self.diagnostics
                .trace("Component has no purl; skipping resolution");
            return ComponentOutcome::MissingPurl;
        };

        self.diagnostics
            .trace(&format!("🔍 Resolving purl: {}", purl));

        match self.release_resolver.resolve(purl) {
            Ok(release) => {
                self.diagnostics.trace(&format!(
                    "✅ Resolved {} {}",
                    release.package_name(),
                    release.specified_version()
                ));
                ComponentOutcome::Resolved(release)
            }
            Err(e) => {
                self.diagnostics
                    .error(&format!("Failed to resolve purl {}: {}", purl, e));
                ComponentOutcome::Failed {
                    purl: purl.to_string(),
                    message: e.to_string(),
                }
            }
        }
    }
}
