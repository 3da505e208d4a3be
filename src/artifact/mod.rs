//! Artifact resolution: classify a source, fetch it, return its local path.
//!
//! Artifacts are the external JARs the downstream engine needs before it
//! can run. Sources already on local storage are used in place; remote
//! sources are streamed into a per-artifact install directory.

pub mod fetcher;
pub mod source;

pub use fetcher::ArtifactFetcher;
pub use source::ArtifactSource;

/// An external artifact required before the engine can run.
#[derive(Debug, Clone)]
pub struct ArtifactSpec {
    /// Logical name; becomes the config key holding the resolved path.
    pub name: String,
    /// Local path or http(s) URL.
    pub source: String,
}

impl ArtifactSpec {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}
