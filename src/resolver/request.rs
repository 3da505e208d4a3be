//! Resolve requests.

use std::path::PathBuf;

use crate::artifact::ArtifactSpec;

/// One artifact to materialize, with the directory downloads land in.
#[derive(Debug, Clone)]
pub struct ArtifactRequest {
    pub spec: ArtifactSpec,
    pub install_dir: PathBuf,
}

impl ArtifactRequest {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        install_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            spec: ArtifactSpec::new(name, source),
            install_dir: install_dir.into(),
        }
    }
}

/// A validated request from the CLI layer.
#[derive(Debug, Clone)]
pub struct InitRequest {
    /// Canonical backend name or alias, as typed by the user.
    pub backend: String,
    /// Where the rendered config file is written.
    pub conf_path: PathBuf,
    /// Artifacts to materialize, in resolution order: the engine JAR
    /// first, then the tool JAR, then any extras.
    pub artifacts: Vec<ArtifactRequest>,
}
