use crate::ports::outbound::{ReleaseResolver, ResolveError};
use crate::repo_resolution::domain::ResolvedRelease;
use crate::shared::Result;
use packageurl::PackageUrl;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

/// Forge hosts recognized as VCS repository locations.
const FORGE_HOSTS: [&str; 5] = [
    "github.com",
    "gitlab.com",
    "bitbucket.org",
    "codeberg.org",
    "sr.ht",
];

/// project_urls labels checked, in order, for a source repository link.
const SOURCE_URL_LABELS: [&str; 4] = ["source", "repository", "code", "scm"];

#[derive(Debug, Deserialize)]
struct PyPiPackageInfo {
    info: PyPiInfo,
}

#[derive(Debug, Deserialize)]
struct PyPiInfo {
    #[serde(default)]
    home_page: Option<String>,
    #[serde(default)]
    project_urls: Option<HashMap<String, Option<String>>>,
}

#[derive(Debug, Deserialize)]
struct CratesIoResponse {
    #[serde(rename = "crate")]
    krate: CratesIoCrate,
}

#[derive(Debug, Deserialize)]
struct CratesIoCrate {
    #[serde(default)]
    repository: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NpmVersionInfo {
    #[serde(default)]
    repository: Option<NpmRepository>,
}

/// npm publishes `repository` either as a bare URL string or as an
/// object with a `url` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NpmRepository {
    Url(String),
    Detailed {
        #[serde(default)]
        url: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct RubyGemsInfo {
    #[serde(default)]
    source_code_uri: Option<String>,
    #[serde(default)]
    homepage_uri: Option<String>,
}

/// RegistryResolver adapter for resolving purls against package registries
///
/// This adapter implements the ReleaseResolver port by querying the
/// public registry HTTP API for the purl's ecosystem (PyPI, crates.io,
/// npm, RubyGems) or deriving the repository directly from the purl
/// coordinates (GitHub, Go modules). Lookups are blocking and sequential;
/// failed lookups are not retried or cached.
pub struct RegistryResolver {
    client: reqwest::blocking::Client,
}

impl RegistryResolver {
    /// Creates a new registry resolver with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbom2repo/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Validates purl coordinates before interpolating them into URLs
    fn validate_url_component(
        component: &str,
        component_type: &str,
    ) -> std::result::Result<(), ResolveError> {
        // Prevent URL injection via purl coordinates
        if component.contains('/') || component.contains('\\') {
            return Err(ResolveError::InvalidPurl(format!(
                "{} contains path separators which are not allowed",
                component_type
            )));
        }

        if component.contains("..") {
            return Err(ResolveError::InvalidPurl(format!(
                "{} contains '..' which is not allowed",
                component_type
            )));
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            return Err(ResolveError::InvalidPurl(format!(
                "{} contains URL-unsafe characters",
                component_type
            )));
        }

        Ok(())
    }

    /// Performs a GET request and deserializes the JSON body
    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        not_found_message: &str,
    ) -> std::result::Result<T, ResolveError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ResolveError::Unresolvable(format!("registry request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ResolveError::Unresolvable(not_found_message.to_string()));
        }

        if !response.status().is_success() {
            return Err(ResolveError::Unresolvable(format!(
                "registry returned status code {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| ResolveError::Unresolvable(format!("malformed registry response: {}", e)))
    }

    fn looks_like_forge(url: &str) -> bool {
        FORGE_HOSTS.iter().any(|host| url.contains(host))
    }

    /// Picks the most likely source repository URL from PyPI metadata.
    ///
    /// project_urls labels are free-form, so labels are matched
    /// case-insensitively against known source labels in a deterministic
    /// key order; the homepage is only used when it points at a forge.
    fn pick_pypi_vcs_url(info: &PyPiInfo) -> Option<String> {
        if let Some(project_urls) = &info.project_urls {
            let mut labels: Vec<&String> = project_urls.keys().collect();
            labels.sort();

            for wanted in SOURCE_URL_LABELS {
                for label in &labels {
                    if label.to_lowercase().contains(wanted) {
                        if let Some(Some(url)) = project_urls.get(*label) {
                            if !url.is_empty() {
                                return Some(url.clone());
                            }
                        }
                    }
                }
            }

            for label in &labels {
                if label.to_lowercase().contains("homepage") {
                    if let Some(Some(url)) = project_urls.get(*label) {
                        if Self::looks_like_forge(url) {
                            return Some(url.clone());
                        }
                    }
                }
            }
        }

        info.home_page
            .as_ref()
            .filter(|url| Self::looks_like_forge(url))
            .cloned()
    }

    /// Strips packaging decoration from npm repository URLs
    /// (`git+https://...git` and friends).
    fn clean_npm_repo_url(url: &str) -> String {
        let url = url.strip_prefix("git+").unwrap_or(url);
        let url = if let Some(rest) = url.strip_prefix("git://") {
            format!("https://{}", rest)
        } else {
            url.to_string()
        };
        url.strip_suffix(".git").unwrap_or(&url).to_string()
    }

    fn resolve_pypi(
        &self,
        name: &str,
        version: &str,
    ) -> std::result::Result<ResolvedRelease, ResolveError> {
        let encoded_name = urlencoding::encode(name);
        let encoded_version = urlencoding::encode(version);
        let url = format!(
            "https://pypi.org/pypi/{}/{}/json",
            encoded_name, encoded_version
        );

        let package_info: PyPiPackageInfo = self.get_json(
            &url,
            &format!("package '{}' version '{}' not found on PyPI", name, version),
        )?;

        let vcs_repo = Self::pick_pypi_vcs_url(&package_info.info);
        let release_url = format!("https://pypi.org/project/{}/{}/", name, version);

        Ok(ResolvedRelease::new(
            name.to_string(),
            vcs_repo,
            version.to_string(),
            Some(release_url),
        ))
    }

    fn resolve_cargo(
        &self,
        name: &str,
        version: &str,
    ) -> std::result::Result<ResolvedRelease, ResolveError> {
        let encoded_name = urlencoding::encode(name);
        let url = format!("https://crates.io/api/v1/crates/{}", encoded_name);

        let response: CratesIoResponse = self.get_json(
            &url,
            &format!("crate '{}' not found on crates.io", name),
        )?;

        let release_url = format!("https://crates.io/crates/{}/{}", name, version);

        Ok(ResolvedRelease::new(
            name.to_string(),
            response.krate.repository,
            version.to_string(),
            Some(release_url),
        ))
    }

    fn resolve_npm(
        &self,
        namespace: Option<&str>,
        name: &str,
        version: &str,
    ) -> std::result::Result<ResolvedRelease, ResolveError> {
        // Scoped packages keep their @scope namespace as a separate path segment
        let display_name = match namespace {
            Some(scope) => format!("{}/{}", scope, name),
            None => name.to_string(),
        };
        let url = match namespace {
            Some(scope) => format!(
                "https://registry.npmjs.org/{}/{}/{}",
                urlencoding::encode(scope),
                urlencoding::encode(name),
                urlencoding::encode(version)
            ),
            None => format!(
                "https://registry.npmjs.org/{}/{}",
                urlencoding::encode(name),
                urlencoding::encode(version)
            ),
        };

        let version_info: NpmVersionInfo = self.get_json(
            &url,
            &format!(
                "package '{}' version '{}' not found on the npm registry",
                display_name, version
            ),
        )?;

        let vcs_repo = version_info.repository.and_then(|repo| match repo {
            NpmRepository::Url(url) => Some(Self::clean_npm_repo_url(&url)),
            NpmRepository::Detailed { url } => url.map(|u| Self::clean_npm_repo_url(&u)),
        });
        let release_url = format!("https://www.npmjs.com/package/{}/v/{}", display_name, version);

        Ok(ResolvedRelease::new(
            display_name,
            vcs_repo,
            version.to_string(),
            Some(release_url),
        ))
    }

    fn resolve_gem(
        &self,
        name: &str,
        version: &str,
    ) -> std::result::Result<ResolvedRelease, ResolveError> {
        let encoded_name = urlencoding::encode(name);
        let url = format!("https://rubygems.org/api/v1/gems/{}.json", encoded_name);

        let gem_info: RubyGemsInfo = self.get_json(
            &url,
            &format!("gem '{}' not found on RubyGems", name),
        )?;

        let vcs_repo = gem_info
            .source_code_uri
            .filter(|u| !u.is_empty())
            .or(gem_info.homepage_uri)
            .filter(|u| !u.is_empty());
        let release_url = format!("https://rubygems.org/gems/{}/versions/{}", name, version);

        Ok(ResolvedRelease::new(
            name.to_string(),
            vcs_repo,
            version.to_string(),
            Some(release_url),
        ))
    }

    /// GitHub purls carry their repository in the coordinates; no network
    /// lookup is needed.
    fn resolve_github(
        namespace: Option<&str>,
        name: &str,
        version: &str,
    ) -> std::result::Result<ResolvedRelease, ResolveError> {
        let owner = namespace.ok_or_else(|| {
            ResolveError::InvalidPurl("github purl requires a namespace (repository owner)".to_string())
        })?;

        let vcs_repo = format!("https://github.com/{}/{}", owner, name);
        let release_url = format!("{}/releases/tag/{}", vcs_repo, version);

        Ok(ResolvedRelease::new(
            format!("{}/{}", owner, name),
            Some(vcs_repo),
            version.to_string(),
            Some(release_url),
        ))
    }

    /// Go module paths double as repository locations when hosted on a
    /// known forge; pkg.go.dev serves as the release page either way.
    fn resolve_golang(
        namespace: Option<&str>,
        name: &str,
        version: &str,
    ) -> std::result::Result<ResolvedRelease, ResolveError> {
        let module_path = match namespace {
            Some(ns) => format!("{}/{}", ns, name),
            None => name.to_string(),
        };

        let vcs_repo = FORGE_HOSTS
            .iter()
            .find(|host| module_path.starts_with(&format!("{}/", host)))
            .map(|_| format!("https://{}", module_path));
        let release_url = format!("https://pkg.go.dev/{}@{}", module_path, version);

        Ok(ResolvedRelease::new(
            module_path,
            vcs_repo,
            version.to_string(),
            Some(release_url),
        ))
    }
}

impl ReleaseResolver for RegistryResolver {
    fn resolve(&self, purl: &str) -> std::result::Result<ResolvedRelease, ResolveError> {
        let parsed = PackageUrl::from_str(purl)
            .map_err(|e| ResolveError::InvalidPurl(format!("invalid package URL: {}", e)))?;

        let version = parsed
            .version()
            .ok_or_else(|| ResolveError::InvalidPurl("purl has no version".to_string()))?;

        Self::validate_url_component(parsed.name(), "package name")?;
        Self::validate_url_component(version, "version")?;

        match parsed.ty() {
            "pypi" => self.resolve_pypi(parsed.name(), version),
            "cargo" => self.resolve_cargo(parsed.name(), version),
            "npm" => self.resolve_npm(parsed.namespace(), parsed.name(), version),
            "gem" => self.resolve_gem(parsed.name(), version),
            "github" => Self::resolve_github(parsed.namespace(), parsed.name(), version),
            "golang" => Self::resolve_golang(parsed.namespace(), parsed.name(), version),
            other => Err(ResolveError::UnsupportedType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_creation() {
        let resolver = RegistryResolver::new();
        assert!(resolver.is_ok());
    }

    #[test]
    fn test_resolve_rejects_invalid_purl() {
        let resolver = RegistryResolver::new().unwrap();
        let result = resolver.resolve("not a purl at all");
        assert!(matches!(result, Err(ResolveError::InvalidPurl(_))));
    }

    #[test]
    fn test_resolve_rejects_purl_without_version() {
        let resolver = RegistryResolver::new().unwrap();
        let result = resolver.resolve("pkg:pypi/requests");
        assert_eq!(
            result,
            Err(ResolveError::InvalidPurl("purl has no version".to_string()))
        );
    }

    #[test]
    fn test_resolve_rejects_unsupported_type() {
        let resolver = RegistryResolver::new().unwrap();
        let result = resolver.resolve("pkg:conan/openssl@3.0.0");
        assert_eq!(
            result,
            Err(ResolveError::UnsupportedType("conan".to_string()))
        );
    }

    #[test]
    fn test_resolve_github_purl_offline() {
        let resolver = RegistryResolver::new().unwrap();
        let release = resolver.resolve("pkg:github/psf/requests@v2.31.0").unwrap();

        assert_eq!(release.package_name(), "psf/requests");
        assert_eq!(release.vcs_repo(), Some("https://github.com/psf/requests"));
        assert_eq!(release.specified_version(), "v2.31.0");
        assert_eq!(
            release.release_url(),
            Some("https://github.com/psf/requests/releases/tag/v2.31.0")
        );
    }

    #[test]
    fn test_resolve_github_purl_without_namespace() {
        let result = RegistryResolver::resolve_github(None, "orphan", "1.0.0");
        assert!(matches!(result, Err(ResolveError::InvalidPurl(_))));
    }

    #[test]
    fn test_resolve_golang_purl_on_known_forge() {
        let resolver = RegistryResolver::new().unwrap();
        let release = resolver
            .resolve("pkg:golang/github.com/gorilla/mux@v1.8.0")
            .unwrap();

        assert_eq!(release.package_name(), "github.com/gorilla/mux");
        assert_eq!(
            release.vcs_repo(),
            Some("https://github.com/gorilla/mux")
        );
        assert_eq!(
            release.release_url(),
            Some("https://pkg.go.dev/github.com/gorilla/mux@v1.8.0")
        );
    }

    #[test]
    fn test_resolve_golang_purl_off_forge_has_no_vcs_repo() {
        let resolver = RegistryResolver::new().unwrap();
        let release = resolver
            .resolve("pkg:golang/golang.org/x/net@v0.17.0")
            .unwrap();

        assert_eq!(release.package_name(), "golang.org/x/net");
        assert!(release.vcs_repo().is_none());
        assert_eq!(
            release.release_url(),
            Some("https://pkg.go.dev/golang.org/x/net@v0.17.0")
        );
    }

    #[test]
    fn test_validate_url_component_rejects_injection() {
        assert!(RegistryResolver::validate_url_component("good-name", "package name").is_ok());
        assert!(RegistryResolver::validate_url_component("a/b", "package name").is_err());
        assert!(RegistryResolver::validate_url_component("a\\b", "package name").is_err());
        assert!(RegistryResolver::validate_url_component("..", "package name").is_err());
        assert!(RegistryResolver::validate_url_component("a?b", "version").is_err());
        assert!(RegistryResolver::validate_url_component("a#b", "version").is_err());
        assert!(RegistryResolver::validate_url_component("a@b", "version").is_err());
    }

    #[test]
    fn test_clean_npm_repo_url() {
        assert_eq!(
            RegistryResolver::clean_npm_repo_url("git+https://github.com/expressjs/express.git"),
            "https://github.com/expressjs/express"
        );
        assert_eq!(
            RegistryResolver::clean_npm_repo_url("git://github.com/jonschlinkert/is-number.git"),
            "https://github.com/jonschlinkert/is-number"
        );
        assert_eq!(
            RegistryResolver::clean_npm_repo_url("https://github.com/lodash/lodash"),
            "https://github.com/lodash/lodash"
        );
    }

    #[test]
    fn test_pick_pypi_vcs_url_prefers_source_label() {
        let info = PyPiInfo {
            home_page: Some("https://example.com".to_string()),
            project_urls: Some(HashMap::from([
                (
                    "Homepage".to_string(),
                    Some("https://example.com".to_string()),
                ),
                (
                    "Source".to_string(),
                    Some("https://github.com/psf/requests".to_string()),
                ),
            ])),
        };

        assert_eq!(
            RegistryResolver::pick_pypi_vcs_url(&info),
            Some("https://github.com/psf/requests".to_string())
        );
    }

    #[test]
    fn test_pick_pypi_vcs_url_forge_homepage_fallback() {
        let info = PyPiInfo {
            home_page: Some("https://github.com/pallets/flask".to_string()),
            project_urls: None,
        };

        assert_eq!(
            RegistryResolver::pick_pypi_vcs_url(&info),
            Some("https://github.com/pallets/flask".to_string())
        );
    }

    #[test]
    fn test_pick_pypi_vcs_url_ignores_plain_homepage() {
        let info = PyPiInfo {
            home_page: Some("https://flask.palletsprojects.com".to_string()),
            project_urls: None,
        };

        assert!(RegistryResolver::pick_pypi_vcs_url(&info).is_none());
    }

    // Integration tests - require network access
    // Uncomment to run against the real registries
    // #[test]
    // fn test_resolve_pypi_real() {
    //     let resolver = RegistryResolver::new().unwrap();
    //     let release = resolver.resolve("pkg:pypi/requests@2.31.0").unwrap();
    //     assert_eq!(release.package_name(), "requests");
    //     assert!(release.vcs_repo().unwrap().contains("github.com"));
    // }
    //
    // #[test]
    // fn test_resolve_pypi_nonexistent_real() {
    //     let resolver = RegistryResolver::new().unwrap();
    //     let result = resolver.resolve("pkg:pypi/nonexistent-xyz-123456@1.0");
    //     assert!(matches!(result, Err(ResolveError::Unresolvable(_))));
    // }
}
