//! Backend catalog: canonical identifiers and their aliases.
//!
//! The catalog is the single place a user-supplied platform string is
//! turned into a [`BackendId`]. Matching is case-sensitive and exact so a
//! typo never silently selects the wrong execution environment.

use std::fmt;

use serde::Deserialize;

use crate::error::{BasecampError, Result};

/// A supported execution backend.
///
/// This is a closed set: adding a backend means adding a variant here, an
/// entry in `templates/registry.yml`, and a `templates/backends/<id>.conf`
/// template. [`BackendCatalog::load`] and
/// [`TemplateStore::load`](crate::backend::TemplateStore::load) verify the
/// three stay in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendId {
    /// This machine.
    Local,
    /// SLURM scheduler.
    Slurm,
    /// Sun Grid Engine scheduler.
    Sge,
    /// PBS/Torque scheduler.
    Pbs,
    /// Google Cloud.
    Gcp,
    /// AWS Batch.
    Aws,
}

impl BackendId {
    /// Every canonical backend, in display order.
    pub const ALL: [BackendId; 6] = [
        BackendId::Local,
        BackendId::Slurm,
        BackendId::Sge,
        BackendId::Pbs,
        BackendId::Gcp,
        BackendId::Aws,
    ];

    /// The canonical name, as it appears in config files and the manifest.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendId::Local => "local",
            BackendId::Slurm => "slurm",
            BackendId::Sge => "sge",
            BackendId::Pbs => "pbs",
            BackendId::Gcp => "gcp",
            BackendId::Aws => "aws",
        }
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One backend's manifest entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Canonical backend id.
    pub id: BackendId,
    /// Alternative names accepted by [`BackendCatalog::normalize`].
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Human-readable description shown by `basecamp backends`.
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct CatalogManifest {
    version: u32,
    backends: Vec<CatalogEntry>,
}

/// Catalog of supported backends, loaded from the embedded manifest.
#[derive(Debug, Clone)]
pub struct BackendCatalog {
    entries: Vec<CatalogEntry>,
}

impl BackendCatalog {
    /// Load the embedded manifest and validate it against [`BackendId::ALL`].
    ///
    /// Validation failures mean the manifest and the enum have drifted,
    /// which is a startup error rather than something a caller can recover
    /// from at resolve time.
    pub fn load() -> Result<Self> {
        let file = super::TEMPLATES_DIR.get_file("registry.yml").ok_or_else(|| {
            BasecampError::CatalogInvalid {
                message: "embedded manifest templates/registry.yml is missing".to_string(),
            }
        })?;

        let content = file
            .contents_utf8()
            .ok_or_else(|| BasecampError::CatalogInvalid {
                message: "manifest is not valid UTF-8".to_string(),
            })?;

        let manifest: CatalogManifest =
            serde_yaml::from_str(content).map_err(|e| BasecampError::CatalogInvalid {
                message: e.to_string(),
            })?;

        if manifest.version != 1 {
            return Err(BasecampError::CatalogInvalid {
                message: format!("unsupported manifest version {}", manifest.version),
            });
        }

        Self::validate(&manifest.backends)?;

        Ok(Self {
            entries: manifest.backends,
        })
    }

    fn validate(entries: &[CatalogEntry]) -> Result<()> {
        for id in BackendId::ALL {
            let count = entries.iter().filter(|e| e.id == id).count();
            if count != 1 {
                return Err(BasecampError::CatalogInvalid {
                    message: format!("backend '{}' has {} manifest entries, expected 1", id, count),
                });
            }
        }

        let mut seen: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        for entry in entries {
            for alias in &entry.aliases {
                if seen.contains(&alias.as_str()) {
                    return Err(BasecampError::CatalogInvalid {
                        message: format!("alias '{}' collides with another name", alias),
                    });
                }
                seen.push(alias);
            }
        }

        Ok(())
    }

    /// Resolve a user-supplied platform name to its canonical backend.
    ///
    /// Canonical names are checked before aliases; both are matched
    /// case-sensitively. Unknown names fail with
    /// [`BasecampError::UnsupportedBackend`].
    pub fn normalize(&self, raw: &str) -> Result<BackendId> {
        if let Some(entry) = self.entries.iter().find(|e| e.id.as_str() == raw) {
            return Ok(entry.id);
        }

        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.aliases.iter().any(|a| a == raw))
        {
            return Ok(entry.id);
        }

        Err(BasecampError::UnsupportedBackend {
            name: raw.to_string(),
        })
    }

    /// All catalog entries, in manifest order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up the entry for a canonical backend.
    pub fn entry(&self, id: BackendId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_succeeds() {
        let catalog = BackendCatalog::load().unwrap();
        assert_eq!(catalog.entries().len(), BackendId::ALL.len());
    }

    #[test]
    fn every_canonical_id_has_an_entry() {
        let catalog = BackendCatalog::load().unwrap();
        for id in BackendId::ALL {
            assert!(catalog.entry(id).is_some(), "no entry for '{}'", id);
        }
    }

    #[test]
    fn normalize_accepts_canonical_names() {
        let catalog = BackendCatalog::load().unwrap();
        for id in BackendId::ALL {
            assert_eq!(catalog.normalize(id.as_str()).unwrap(), id);
        }
    }

    #[test]
    fn normalize_maps_aliases_to_canonical_ids() {
        let catalog = BackendCatalog::load().unwrap();
        assert_eq!(catalog.normalize("Local").unwrap(), BackendId::Local);
        assert_eq!(catalog.normalize("sherlock").unwrap(), BackendId::Slurm);
        assert_eq!(catalog.normalize("scg").unwrap(), BackendId::Slurm);
        assert_eq!(catalog.normalize("google").unwrap(), BackendId::Gcp);
        assert_eq!(catalog.normalize("amazon").unwrap(), BackendId::Aws);
    }

    #[test]
    fn alias_and_canonical_normalize_identically() {
        let catalog = BackendCatalog::load().unwrap();
        for entry in catalog.entries() {
            let canonical = catalog.normalize(entry.id.as_str()).unwrap();
            for alias in &entry.aliases {
                assert_eq!(catalog.normalize(alias).unwrap(), canonical);
            }
        }
    }

    #[test]
    fn normalize_is_case_sensitive() {
        let catalog = BackendCatalog::load().unwrap();
        assert!(catalog.normalize("LOCAL").is_err());
        assert!(catalog.normalize("Slurm").is_err());
        assert!(catalog.normalize("Sherlock").is_err());
    }

    #[test]
    fn normalize_rejects_unknown_names() {
        let catalog = BackendCatalog::load().unwrap();
        let err = catalog.normalize("kubernetes").unwrap_err();
        assert!(matches!(
            err,
            crate::error::BasecampError::UnsupportedBackend { .. }
        ));
    }

    #[test]
    fn normalize_rejects_empty_string() {
        let catalog = BackendCatalog::load().unwrap();
        assert!(catalog.normalize("").is_err());
    }

    #[test]
    fn backend_id_display_matches_as_str() {
        for id in BackendId::ALL {
            assert_eq!(id.to_string(), id.as_str());
        }
    }

    #[test]
    fn validate_rejects_duplicate_entries() {
        let mut entries: Vec<CatalogEntry> = BackendCatalog::load().unwrap().entries().to_vec();
        entries.push(CatalogEntry {
            id: BackendId::Local,
            aliases: vec![],
            description: "duplicate".to_string(),
        });
        assert!(BackendCatalog::validate(&entries).is_err());
    }

    #[test]
    fn validate_rejects_alias_colliding_with_canonical_name() {
        let mut entries: Vec<CatalogEntry> = BackendCatalog::load().unwrap().entries().to_vec();
        entries[0].aliases.push("slurm".to_string());
        assert!(BackendCatalog::validate(&entries).is_err());
    }
}
