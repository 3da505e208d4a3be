//! Default artifact locations and install paths.
//!
//! These mirror the pinned engine release the downstream pipeline stack is
//! validated against. Override per-run with `--cromwell-jar` / `--womtool-jar`.

use std::path::{Path, PathBuf};

/// Pinned Cromwell engine JAR release.
pub const DEFAULT_CROMWELL_JAR: &str =
    "https://github.com/broadinstitute/cromwell/releases/download/47/cromwell-47.jar";

/// Womtool release matching [`DEFAULT_CROMWELL_JAR`].
pub const DEFAULT_WOMTOOL_JAR: &str =
    "https://github.com/broadinstitute/cromwell/releases/download/47/womtool-47.jar";

/// Config key for the resolved engine JAR path.
pub const CROMWELL_KEY: &str = "cromwell";

/// Config key for the resolved Womtool JAR path.
pub const WOMTOOL_KEY: &str = "womtool";

/// Directory basecamp keeps its files under (`~/.basecamp`).
pub fn basecamp_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".basecamp")
}

/// Default path of the written configuration file.
pub fn default_conf_path() -> PathBuf {
    basecamp_dir().join("default.conf")
}

/// Default install directory for downloaded Cromwell JARs.
pub fn cromwell_jar_dir() -> PathBuf {
    basecamp_dir().join("cromwell_jar")
}

/// Default install directory for downloaded Womtool JARs.
pub fn womtool_jar_dir() -> PathBuf {
    basecamp_dir().join("womtool_jar")
}

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Paths without a tilde prefix are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };

    if s == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }

    if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    path.to_path_buf()
}
