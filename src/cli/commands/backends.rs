//! The `backends` command: list supported platforms.

use console::style;

use crate::backend::BackendCatalog;
use crate::error::Result;

pub fn run() -> Result<()> {
    let catalog = BackendCatalog::load()?;

    for entry in catalog.entries() {
        let id = format!("{:<8}", entry.id);
        let aliases = if entry.aliases.is_empty() {
            String::new()
        } else {
            format!(" (aliases: {})", entry.aliases.join(", "))
        };

        println!(
            "{} {}{}",
            style(id).cyan(),
            entry.description,
            style(aliases).dim()
        );
    }

    Ok(())
}
