/// Domain services for rendering resolution outcomes.
pub mod report_renderer;

pub use report_renderer::ReportRenderer;
