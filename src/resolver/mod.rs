//! Backend-aware configuration resolution.
//!
//! [`ConfigResolver`] turns a request into a final configuration: it
//! validates the requested backend, selects that backend's template,
//! materializes each artifact, and appends the resolved paths as trailing
//! directives. Writing the config file is left to the caller so that
//! nothing touches the destination until every artifact has resolved.

pub mod request;
pub mod resolved;

pub use request::{ArtifactRequest, InitRequest};
pub use resolved::ResolvedConfig;

use tracing::debug;

use crate::artifact::ArtifactFetcher;
use crate::backend::{BackendCatalog, ConfigDirective, TemplateStore};
use crate::error::Result;

/// Orchestrates one resolve call over the catalog, store, and fetcher.
pub struct ConfigResolver<'a> {
    catalog: &'a BackendCatalog,
    store: &'a TemplateStore,
    fetcher: &'a ArtifactFetcher,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(
        catalog: &'a BackendCatalog,
        store: &'a TemplateStore,
        fetcher: &'a ArtifactFetcher,
    ) -> Self {
        Self {
            catalog,
            store,
            fetcher,
        }
    }

    /// Resolve a request into a final configuration.
    ///
    /// Artifacts are fetched sequentially in declaration order; the first
    /// failure aborts the remaining fetches and propagates unmodified.
    /// Files downloaded by earlier iterations are left on disk; a re-run
    /// overwrites them.
    pub fn resolve(&self, request: &InitRequest) -> Result<ResolvedConfig> {
        debug!("validating backend '{}'", request.backend);
        let backend = self.catalog.normalize(&request.backend)?;

        debug!("selected '{}' template", backend);
        let template = self.store.lookup(backend)?;

        let mut artifacts = Vec::with_capacity(request.artifacts.len());
        for artifact in &request.artifacts {
            let path = self.fetcher.ensure(&artifact.spec, &artifact.install_dir)?;
            artifacts.push(ConfigDirective::new(
                artifact.spec.name.clone(),
                path.display().to_string(),
            ));
        }

        Ok(ResolvedConfig::new(template, artifacts))
    }
}
