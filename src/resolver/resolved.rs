//! The final configuration produced by one resolve call.

use std::fs;
use std::path::Path;

use crate::backend::{BackendId, ConfigDirective, ConfigTemplate, TemplateLine};
use crate::error::Result;

/// Final ordered configuration for one resolve call.
///
/// The template's lines come first, unchanged; one directive per resolved
/// artifact is appended after them in resolution order.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    backend: BackendId,
    lines: Vec<TemplateLine>,
}

impl ResolvedConfig {
    pub(crate) fn new(template: &ConfigTemplate, artifacts: Vec<ConfigDirective>) -> Self {
        let mut lines = template.lines().to_vec();
        lines.extend(artifacts.into_iter().map(TemplateLine::Directive));

        Self {
            backend: template.backend(),
            lines,
        }
    }

    /// The backend this configuration targets.
    pub fn backend(&self) -> BackendId {
        self.backend
    }

    /// All directives in file order, artifact paths last.
    pub fn directives(&self) -> impl Iterator<Item = &ConfigDirective> {
        self.lines.iter().filter_map(|line| match line {
            TemplateLine::Directive(d) => Some(d),
            _ => None,
        })
    }

    /// Keys the user still has to fill in, in file order.
    pub fn placeholders(&self) -> Vec<&str> {
        self.directives()
            .filter(|d| d.is_placeholder())
            .map(|d| d.key.as_str())
            .collect()
    }

    /// Render as config file text.
    ///
    /// One `key=value` line per directive, comments and blank lines
    /// verbatim, terminated by a trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for line in &self.lines {
            match line {
                TemplateLine::Blank => {}
                TemplateLine::Comment(text) => out.push_str(text),
                TemplateLine::Directive(d) => {
                    out.push_str(&d.key);
                    out.push('=');
                    out.push_str(&d.value);
                }
            }
            out.push('\n');
        }

        out
    }

    /// Write the rendered config, creating parent directories as needed.
    ///
    /// Called only after every artifact has resolved, so a failed run
    /// never leaves a partial config file behind.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.render())?;
        Ok(())
    }
}
