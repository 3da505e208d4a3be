//! basecamp - Backend configuration initializer for Cromwell pipelines.
//!
//! basecamp writes the platform-specific `key=value` configuration file a
//! Cromwell-based workflow stack reads at startup, and installs the engine
//! and tool JARs it references.
//!
//! # Modules
//!
//! - [`artifact`] - Artifact source classification and streaming downloads
//! - [`backend`] - Backend catalog, aliases, and configuration templates
//! - [`cli`] - Command-line interface and argument parsing
//! - [`defaults`] - Pinned artifact releases and default install paths
//! - [`error`] - Error types and result aliases
//! - [`resolver`] - Orchestration of one resolve call
//! - [`ui`] - Download progress and interactive prompts
//!
//! # Example
//!
//! ```no_run
//! use basecamp::artifact::ArtifactFetcher;
//! use basecamp::backend::{BackendCatalog, TemplateStore};
//! use basecamp::resolver::{ArtifactRequest, ConfigResolver, InitRequest};
//!
//! let catalog = BackendCatalog::load().unwrap();
//! let store = TemplateStore::load(&catalog).unwrap();
//! let fetcher = ArtifactFetcher::new();
//!
//! let request = InitRequest {
//!     backend: "slurm".to_string(),
//!     conf_path: "/tmp/default.conf".into(),
//!     artifacts: vec![ArtifactRequest::new(
//!         "cromwell",
//!         "/opt/cromwell.jar",
//!         "/tmp/jars",
//!     )],
//! };
//!
//! let resolved = ConfigResolver::new(&catalog, &store, &fetcher)
//!     .resolve(&request)
//!     .unwrap();
//! resolved.write(&request.conf_path).unwrap();
//! ```

pub mod artifact;
pub mod backend;
pub mod cli;
pub mod defaults;
pub mod error;
pub mod resolver;
pub mod ui;

pub use error::{BasecampError, Result};
