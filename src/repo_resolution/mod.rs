/// Core resolution layer - domain models and services for mapping SBOM
/// components to source repositories and releases.
pub mod domain;
pub mod services;
