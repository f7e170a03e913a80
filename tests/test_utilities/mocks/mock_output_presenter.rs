use sbom2repo::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock OutputPresenter for testing
///
/// Captures every presented block in order instead of writing to stdout.
pub struct MockOutputPresenter {
    blocks: Rc<RefCell<Vec<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self {
            blocks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handle to the captured blocks
    pub fn blocks(&self) -> Rc<RefCell<Vec<String>>> {
        self.blocks.clone()
    }
}

impl Default for MockOutputPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.blocks.borrow_mut().push(content.to_string());
        Ok(())
    }
}
