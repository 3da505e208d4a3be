//! Streaming artifact downloads.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{BasecampError, Result};
use crate::ui::DownloadProgress;

use super::source::{basename, ArtifactSource};
use super::ArtifactSpec;

/// Downloads remote artifacts into an install directory.
///
/// Local sources are returned in place with zero I/O. Remote fetches
/// always download: a pre-existing file at the target path is overwritten.
/// A caller wanting fetch-once semantics checks for the file before
/// calling [`ensure`](ArtifactFetcher::ensure).
///
/// The download streams to a `.part` sibling and is renamed into place on
/// success, so a failed transfer never leaves a partial file at the target
/// path.
pub struct ArtifactFetcher {
    client: Client,
}

impl ArtifactFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("basecamp/", env!("CARGO_PKG_VERSION")))
                .connect_timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Ensure a local copy of the artifact exists and return its path.
    pub fn ensure(&self, spec: &ArtifactSpec, install_dir: &Path) -> Result<PathBuf> {
        match ArtifactSource::classify(&spec.source) {
            ArtifactSource::Local(path) => {
                debug!("{} is already local: {}", spec.name, path.display());
                Ok(path)
            }
            ArtifactSource::Remote(url) => self.download(&spec.name, &url, install_dir),
        }
    }

    fn download(&self, name: &str, url: &str, install_dir: &Path) -> Result<PathBuf> {
        let file_name = basename(url);
        if file_name.is_empty() {
            return Err(BasecampError::Fetch {
                url: url.to_string(),
                message: "URL has no file name".to_string(),
            });
        }

        fs::create_dir_all(install_dir).map_err(|e| write_error(e, install_dir))?;

        let dest = install_dir.join(file_name);
        let part = install_dir.join(format!("{}.part", file_name));

        info!("Downloading {} from {}", name, url);
        let progress = DownloadProgress::start(name, url);

        if let Err(e) = self.transfer(url, &part, &progress) {
            progress.fail();
            let _ = fs::remove_file(&part);
            return Err(e);
        }

        if let Err(e) = fs::rename(&part, &dest) {
            progress.fail();
            let _ = fs::remove_file(&part);
            return Err(write_error(e, &dest));
        }

        progress.finish(&dest);
        Ok(dest)
    }

    fn transfer(&self, url: &str, part: &Path, progress: &DownloadProgress) -> Result<()> {
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| BasecampError::Fetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(BasecampError::Fetch {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        if let Some(len) = response.content_length() {
            progress.set_length(len);
        }

        let file = File::create(part).map_err(|e| write_error(e, part))?;
        let mut writer = progress.wrap_write(file);

        response
            .copy_to(&mut writer)
            .map_err(|e| BasecampError::Fetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}

impl Default for ArtifactFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a filesystem write failure, keeping permission problems distinct.
fn write_error(e: io::Error, path: &Path) -> BasecampError {
    if e.kind() == io::ErrorKind::PermissionDenied {
        BasecampError::Permission {
            path: path.to_path_buf(),
        }
    } else {
        BasecampError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn local_source_is_returned_unchanged_with_zero_io() {
        let fetcher = ArtifactFetcher::new();
        let spec = ArtifactSpec::new("cromwell", "/opt/engine.jar");
        let temp = TempDir::new().unwrap();
        let install_dir = temp.path().join("never-created");

        let path = fetcher.ensure(&spec, &install_dir).unwrap();

        assert_eq!(path, PathBuf::from("/opt/engine.jar"));
        assert!(!install_dir.exists());
    }

    #[test]
    fn remote_source_is_installed_under_its_basename() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/tool.jar");
            then.status(200).body(b"jar bytes");
        });

        let install = TempDir::new().unwrap();
        let fetcher = ArtifactFetcher::new();
        let spec = ArtifactSpec::new("womtool", server.url("/tool.jar"));

        let path = fetcher.ensure(&spec, install.path()).unwrap();

        assert_eq!(path, install.path().join("tool.jar"));
        assert_eq!(fs::read(&path).unwrap(), b"jar bytes");

        let entries: Vec<_> = fs::read_dir(install.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn refetch_overwrites_existing_file() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/tool.jar");
            then.status(200).body(b"new bytes");
        });

        let install = TempDir::new().unwrap();
        fs::write(install.path().join("tool.jar"), b"old bytes").unwrap();

        let fetcher = ArtifactFetcher::new();
        let spec = ArtifactSpec::new("womtool", server.url("/tool.jar"));
        let path = fetcher.ensure(&spec, install.path()).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new bytes");
    }

    #[test]
    fn http_error_leaves_no_partial_file() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/tool.jar");
            then.status(503);
        });

        let install = TempDir::new().unwrap();
        let fetcher = ArtifactFetcher::new();
        let spec = ArtifactSpec::new("womtool", server.url("/tool.jar"));

        let err = fetcher.ensure(&spec, install.path()).unwrap_err();

        assert!(matches!(err, BasecampError::Fetch { .. }));
        assert!(!install.path().join("tool.jar").exists());
        assert!(!install.path().join("tool.jar.part").exists());
    }

    #[test]
    fn connection_failure_is_a_fetch_error() {
        // Port 1 refuses immediately.
        let fetcher = ArtifactFetcher::new();
        let spec = ArtifactSpec::new("womtool", "http://127.0.0.1:1/tool.jar");
        let install = TempDir::new().unwrap();

        let err = fetcher.ensure(&spec, install.path()).unwrap_err();
        assert!(matches!(err, BasecampError::Fetch { .. }));
    }

    #[test]
    fn url_without_file_name_is_rejected() {
        let fetcher = ArtifactFetcher::new();
        let spec = ArtifactSpec::new("womtool", "https://example.test/releases/");
        let install = TempDir::new().unwrap();

        let err = fetcher.ensure(&spec, install.path()).unwrap_err();
        assert!(matches!(err, BasecampError::Fetch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_install_dir_is_a_permission_error() {
        use std::os::unix::fs::PermissionsExt;

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/tool.jar");
            then.status(200).body(b"jar bytes");
        });

        let parent = TempDir::new().unwrap();
        let readonly = parent.path().join("readonly");
        fs::create_dir(&readonly).unwrap();
        fs::set_permissions(&readonly, fs::Permissions::from_mode(0o555)).unwrap();

        if fs::write(readonly.join("probe"), b"x").is_ok() {
            // Privileged user; permission bits are not enforced.
            return;
        }

        let fetcher = ArtifactFetcher::new();
        let spec = ArtifactSpec::new("womtool", server.url("/tool.jar"));
        let install = readonly.join("jars");

        let err = fetcher.ensure(&spec, &install).unwrap_err();
        assert!(matches!(err, BasecampError::Permission { .. }));

        fs::set_permissions(&readonly, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
