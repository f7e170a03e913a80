/// Ports layer - Interface definitions for infrastructure
///
/// The CLI is the only driver of this application, so the layer holds
/// outbound (driven) ports only.
pub mod outbound;
