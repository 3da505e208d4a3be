//! Embedded configuration templates, one per canonical backend.

use std::collections::HashMap;

use crate::error::{BasecampError, Result};

use super::{BackendCatalog, BackendId, ConfigTemplate};

/// Read-only table mapping each canonical backend to its template.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates: HashMap<BackendId, ConfigTemplate>,
}

impl TemplateStore {
    /// Load and validate every embedded template.
    ///
    /// Every backend in the catalog must have exactly one parseable
    /// template at `templates/backends/<id>.conf`. A missing or invalid
    /// template means the tables have drifted and is a startup error.
    pub fn load(catalog: &BackendCatalog) -> Result<Self> {
        let mut templates = HashMap::new();

        for entry in catalog.entries() {
            let path = format!("backends/{}.conf", entry.id);
            let file = super::TEMPLATES_DIR
                .get_file(&path)
                .ok_or(BasecampError::TemplateMissing { backend: entry.id })?;

            let text = file
                .contents_utf8()
                .ok_or_else(|| BasecampError::TemplateInvalid {
                    backend: entry.id.to_string(),
                    message: "template is not valid UTF-8".to_string(),
                })?;

            templates.insert(entry.id, ConfigTemplate::parse(entry.id, text)?);
        }

        Ok(Self { templates })
    }

    /// Look up the template for a canonical backend.
    ///
    /// Cannot fail for any backend the store was loaded against; the typed
    /// error is kept so table drift surfaces loudly instead of panicking.
    pub fn lookup(&self, id: BackendId) -> Result<&ConfigTemplate> {
        self.templates
            .get(&id)
            .ok_or(BasecampError::TemplateMissing { backend: id })
    }
}
