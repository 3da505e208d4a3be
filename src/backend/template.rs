//! Configuration templates: ordered `key=value` directives with comments.
//!
//! A template is the literal shape of the config file written for one
//! backend. Line order is significant and comments document the directive
//! that follows them, so templates are kept as an ordered line sequence
//! rather than a map.

use crate::error::{BasecampError, Result};

use super::BackendId;

/// One `key=value` configuration line.
///
/// An empty value marks a placeholder the user must fill in before the
/// config is usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDirective {
    pub key: String,
    pub value: String,
}

impl ConfigDirective {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether the value still needs to be filled in by the user.
    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// One line of a configuration template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateLine {
    /// Empty line, preserved verbatim in the output.
    Blank,
    /// `#`-prefixed comment, preserved verbatim in the output.
    Comment(String),
    /// A `key=value` directive.
    Directive(ConfigDirective),
}

/// An ordered configuration template for one backend.
#[derive(Debug, Clone)]
pub struct ConfigTemplate {
    backend: BackendId,
    lines: Vec<TemplateLine>,
}

impl ConfigTemplate {
    /// Parse template text into lines.
    ///
    /// Every non-blank, non-comment line must be `key=value` with a
    /// non-empty key, and no key may appear twice.
    pub fn parse(backend: BackendId, text: &str) -> Result<Self> {
        let mut lines = Vec::new();
        let mut keys: Vec<String> = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let lineno = idx + 1;

            if raw.trim().is_empty() {
                lines.push(TemplateLine::Blank);
                continue;
            }

            if raw.trim_start().starts_with('#') {
                lines.push(TemplateLine::Comment(raw.to_string()));
                continue;
            }

            let Some((key, value)) = raw.split_once('=') else {
                return Err(BasecampError::TemplateInvalid {
                    backend: backend.to_string(),
                    message: format!("line {} is not a key=value directive: '{}'", lineno, raw),
                });
            };

            if key.is_empty() {
                return Err(BasecampError::TemplateInvalid {
                    backend: backend.to_string(),
                    message: format!("empty key on line {}", lineno),
                });
            }

            if keys.iter().any(|k| k == key) {
                return Err(BasecampError::TemplateInvalid {
                    backend: backend.to_string(),
                    message: format!("duplicate key '{}' on line {}", key, lineno),
                });
            }

            keys.push(key.to_string());
            lines.push(TemplateLine::Directive(ConfigDirective::new(key, value)));
        }

        Ok(Self { backend, lines })
    }

    /// The backend this template configures.
    pub fn backend(&self) -> BackendId {
        self.backend
    }

    /// All lines, in file order.
    pub fn lines(&self) -> &[TemplateLine] {
        &self.lines
    }

    /// The directives, in file order, skipping blanks and comments.
    pub fn directives(&self) -> impl Iterator<Item = &ConfigDirective> {
        self.lines.iter().filter_map(|line| match line {
            TemplateLine::Directive(d) => Some(d),
            _ => None,
        })
    }
}
