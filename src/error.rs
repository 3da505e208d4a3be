//! Error types for basecamp operations.
//!
//! This module defines [`BasecampError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `BasecampError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `BasecampError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

use crate::backend::BackendId;

/// Core error type for basecamp operations.
#[derive(Debug, Error)]
pub enum BasecampError {
    /// Requested platform matches neither a canonical backend nor an alias.
    #[error("Unsupported backend '{name}'. Run `basecamp backends` to list supported platforms.")]
    UnsupportedBackend { name: String },

    /// A canonical backend has no embedded configuration template.
    ///
    /// Unreachable once [`TemplateStore::load`](crate::backend::TemplateStore::load)
    /// has succeeded; kept as a typed error so table drift fails loudly at startup.
    #[error("No configuration template for backend '{backend}'")]
    TemplateMissing { backend: BackendId },

    /// An embedded configuration template failed validation.
    #[error("Invalid template for backend '{backend}': {message}")]
    TemplateInvalid { backend: String, message: String },

    /// The embedded backend manifest is malformed or inconsistent.
    #[error("Invalid backend catalog: {message}")]
    CatalogInvalid { message: String },

    /// Artifact transfer failed (network, HTTP status, or interrupted stream).
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// Install directory or target file is not writable.
    #[error("Permission denied writing to {path}")]
    Permission { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for basecamp operations.
pub type Result<T> = std::result::Result<T, BasecampError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_backend_displays_name() {
        let err = BasecampError::UnsupportedBackend {
            name: "sherloc".into(),
        };
        assert!(err.to_string().contains("sherloc"));
    }

    #[test]
    fn unsupported_backend_points_at_backends_command() {
        let err = BasecampError::UnsupportedBackend {
            name: "nope".into(),
        };
        assert!(err.to_string().contains("basecamp backends"));
    }

    #[test]
    fn template_missing_displays_backend() {
        let err = BasecampError::TemplateMissing {
            backend: BackendId::Slurm,
        };
        assert!(err.to_string().contains("slurm"));
    }

    #[test]
    fn template_invalid_displays_backend_and_message() {
        let err = BasecampError::TemplateInvalid {
            backend: "gcp".into(),
            message: "duplicate key 'tmp-dir'".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("gcp"));
        assert!(msg.contains("duplicate key 'tmp-dir'"));
    }

    #[test]
    fn catalog_invalid_displays_message() {
        let err = BasecampError::CatalogInvalid {
            message: "alias 'scg' collides with another name".into(),
        };
        assert!(err.to_string().contains("scg"));
    }

    #[test]
    fn fetch_displays_url_and_message() {
        let err = BasecampError::Fetch {
            url: "https://example.test/tool.jar".into(),
            message: "HTTP 503 Service Unavailable".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.test/tool.jar"));
        assert!(msg.contains("503"));
    }

    #[test]
    fn permission_displays_path() {
        let err = BasecampError::Permission {
            path: PathBuf::from("/usr/lib/jars"),
        };
        assert!(err.to_string().contains("/usr/lib/jars"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BasecampError = io_err.into();
        assert!(matches!(err, BasecampError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(BasecampError::UnsupportedBackend {
                name: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
