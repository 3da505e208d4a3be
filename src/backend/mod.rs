//! Backend catalog and configuration templates.
//!
//! A backend is an execution environment (this machine, an HPC scheduler,
//! a cloud batch service) that the downstream workflow engine submits
//! tasks to. This module owns the closed set of supported backends, their
//! user-facing aliases, and the embedded configuration template each one
//! gets initialized with.
//!
//! Both tables are loaded once at startup and cross-checked against each
//! other; drift between them is a fatal startup error, never a per-call one.

pub mod catalog;
pub mod store;
pub mod template;

pub use catalog::{BackendCatalog, BackendId, CatalogEntry};
pub use store::TemplateStore;
pub use template::{ConfigDirective, ConfigTemplate, TemplateLine};

use include_dir::{include_dir, Dir};

/// Embedded backend manifest and configuration templates.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");
