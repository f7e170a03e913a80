use sbom2repo::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Mock ReleaseResolver for testing
///
/// Returns canned results per purl and records every invocation so tests
/// can assert which purls were (or were not) passed to the resolver.
pub struct MockReleaseResolver {
    results: HashMap<String, std::result::Result<ResolvedRelease, ResolveError>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl MockReleaseResolver {
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_release(
        mut self,
        purl: &str,
        package_name: &str,
        vcs_repo: Option<&str>,
        version: &str,
        release_url: Option<&str>,
    ) -> Self {
        self.results.insert(
            purl.to_string(),
            Ok(ResolvedRelease::new(
                package_name.to_string(),
                vcs_repo.map(String::from),
                version.to_string(),
                release_url.map(String::from),
            )),
        );
        self
    }

    pub fn with_error(mut self, purl: &str, error: ResolveError) -> Self {
        self.results.insert(purl.to_string(), Err(error));
        self
    }

    /// Handle to the recorded purl invocations
    pub fn calls(&self) -> Rc<RefCell<Vec<String>>> {
        self.calls.clone()
    }
}

impl Default for MockReleaseResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseResolver for MockReleaseResolver {
    fn resolve(&self, purl: &str) -> std::result::Result<ResolvedRelease, ResolveError> {
        self.calls.borrow_mut().push(purl.to_string());
        self.results
            .get(purl)
            .cloned()
            .unwrap_or_else(|| Err(ResolveError::Unresolvable("purl not mocked".to_string())))
    }
}
