//! Artifact source classification.

use std::path::{Path, PathBuf};

use crate::defaults::expand_tilde;

/// Where an artifact comes from.
///
/// Classification is an explicit branch on the URI scheme: `http(s)` URIs
/// are remote, everything else is a path on local storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    /// Already on local storage; used in place, never copied.
    Local(PathBuf),
    /// Fetched over HTTP(S) into an install directory.
    Remote(String),
}

impl ArtifactSource {
    /// Classify a source URI.
    pub fn classify(uri: &str) -> Self {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            ArtifactSource::Remote(uri.to_string())
        } else {
            ArtifactSource::Local(expand_tilde(Path::new(uri)))
        }
    }
}

/// Base filename of a URI, ignoring any query string or fragment.
pub fn basename(uri: &str) -> &str {
    let end = uri.find(['?', '#']).unwrap_or(uri.len());
    let path = &uri[..end];
    path.rsplit('/').next().unwrap_or(path)
}
