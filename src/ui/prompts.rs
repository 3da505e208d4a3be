//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::backend::BackendCatalog;
use crate::error::{BasecampError, Result};

/// Convert dialoguer errors to BasecampError.
fn map_dialoguer_err(e: dialoguer::Error) -> BasecampError {
    BasecampError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask which platform to configure.
///
/// Fails instead of prompting when `non_interactive` is set or stderr is
/// not a terminal.
pub fn select_backend(catalog: &BackendCatalog, non_interactive: bool) -> Result<String> {
    let term = Term::stderr();

    if non_interactive || !term.is_term() {
        return Err(anyhow::anyhow!(
            "no platform given; pass one (e.g. `basecamp init slurm`) or run interactively"
        )
        .into());
    }

    let labels: Vec<String> = catalog
        .entries()
        .iter()
        .map(|e| format!("{} - {}", e.id, e.description))
        .collect();

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt("Which platform will run your workflows?")
        .items(&labels)
        .default(0)
        .interact_on(&term)
        .map_err(map_dialoguer_err)?;

    Ok(catalog.entries()[selection].id.to_string())
}
