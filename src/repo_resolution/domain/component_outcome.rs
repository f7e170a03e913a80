use super::ResolvedRelease;

/// Per-component result of the resolution step.
///
/// The use case produces one outcome per component as a pure mapping step;
/// rendering and continuation are handled by the caller. A `Failed` outcome
/// is recoverable - it never aborts processing of the remaining components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentOutcome {
    /// The component carries no purl field at all.
    MissingPurl,
    /// The resolver mapped the purl to a repository and release.
    Resolved(ResolvedRelease),
    /// The resolver rejected the purl as invalid or unresolvable.
    Failed { purl: String, message: String },
}

impl ComponentOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ComponentOutcome::Resolved(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ComponentOutcome::Failed { .. })
    }
}
