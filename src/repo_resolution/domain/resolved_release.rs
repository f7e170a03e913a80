/// ResolvedRelease value object representing the outcome of a successful
/// purl resolution.
///
/// The package name and specified version are always present; the VCS
/// repository and release URL are optional because not every registry
/// record carries them. Empty strings from upstream metadata are
/// normalized to `None` at construction so downstream rendering only has
/// to deal with presence or absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelease {
    package_name: String,
    vcs_repo: Option<String>,
    specified_version: String,
    release_url: Option<String>,
}

impl ResolvedRelease {
    pub fn new(
        package_name: String,
        vcs_repo: Option<String>,
        specified_version: String,
        release_url: Option<String>,
    ) -> Self {
        Self {
            package_name,
            vcs_repo: vcs_repo.filter(|s| !s.is_empty()),
            specified_version,
            release_url: release_url.filter(|s| !s.is_empty()),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn vcs_repo(&self) -> Option<&str> {
        self.vcs_repo.as_deref()
    }

    pub fn specified_version(&self) -> &str {
        &self.specified_version
    }

    pub fn release_url(&self) -> Option<&str> {
        self.release_url.as_deref()
    }
}
