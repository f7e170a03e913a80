use sbom2repo::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock DiagnosticsReporter for testing
///
/// Records trace and error messages so tests can assert on the
/// diagnostics channel without touching stderr.
pub struct MockDiagnosticsReporter {
    traces: Rc<RefCell<Vec<String>>>,
    errors: Rc<RefCell<Vec<String>>>,
}

impl MockDiagnosticsReporter {
    pub fn new() -> Self {
        Self {
            traces: Rc::new(RefCell::new(Vec::new())),
            errors: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn traces(&self) -> Rc<RefCell<Vec<String>>> {
        self.traces.clone()
    }

    pub fn errors(&self) -> Rc<RefCell<Vec<String>>> {
        self.errors.clone()
    }
}

impl Default for MockDiagnosticsReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsReporter for MockDiagnosticsReporter {
    fn trace(&self, message: &str) {
        self.traces.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
