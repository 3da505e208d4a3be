//! Terminal output: download progress and interactive prompts.

pub mod progress;
pub mod prompts;

pub use progress::DownloadProgress;
