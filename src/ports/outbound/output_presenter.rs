use crate::shared::Result;

/// OutputPresenter port for presenting report output
///
/// This port abstracts the output destination where rendered report
/// blocks are written. Blocks are presented incrementally, one call per
/// block, so earlier output stays visible even if a later step fails.
pub trait OutputPresenter {
    /// Presents one rendered report block to the output destination
    ///
    /// # Arguments
    /// * `content` - The rendered block to present
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
