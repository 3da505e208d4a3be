//! Download progress display.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressBarIter, ProgressStyle};

/// Progress display for one artifact transfer.
///
/// Starts as a spinner and switches to a byte-count bar once the total
/// size is known. Draws to stderr and hides itself when stderr is not a
/// terminal.
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    /// Announce a transfer and start the spinner.
    pub fn start(name: &str, url: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.magenta} {msg}")
                .unwrap(),
        );
        bar.set_message(format!("Downloading {} from {}", name, url));
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Switch to a byte-count bar once the content length is known.
    pub fn set_length(&self, len: u64) {
        self.bar.disable_steady_tick();
        self.bar.set_style(
            ProgressStyle::default_bar()
                .template("  {msg} [{bar:30.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
                .unwrap()
                .progress_chars("=> "),
        );
        self.bar.set_length(len);
    }

    /// Wrap a writer so bytes written advance the bar.
    pub fn wrap_write<W: Write>(&self, write: W) -> ProgressBarIter<W> {
        self.bar.wrap_write(write)
    }

    /// Finish successfully, leaving an install notice behind.
    pub fn finish(self, dest: &Path) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(format!(
            "{} Installed {}",
            style("✓").green(),
            dest.display()
        ));
    }

    /// Clear the display after a failed transfer.
    pub fn fail(self) {
        self.bar.finish_and_clear();
    }
}
