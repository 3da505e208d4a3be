//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// basecamp - Backend configuration initializer for Cromwell pipelines.
#[derive(Debug, Parser)]
#[command(name = "basecamp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a backend config file and install the engine JARs
    Init(InitArgs),

    /// List supported backend platforms and their aliases
    Backends,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Platform to configure (prompted for interactively when omitted)
    pub platform: Option<String>,

    /// Path of the config file to write (default: ~/.basecamp/default.conf)
    #[arg(short, long, value_name = "FILE")]
    pub conf: Option<PathBuf>,

    /// Cromwell JAR to use: an http(s) URL or a local path
    #[arg(long, value_name = "URI")]
    pub cromwell_jar: Option<String>,

    /// Womtool JAR to use: an http(s) URL or a local path
    #[arg(long, value_name = "URI")]
    pub womtool_jar: Option<String>,

    /// Directory downloaded Cromwell JARs are installed into
    #[arg(long, value_name = "DIR")]
    pub cromwell_jar_dir: Option<PathBuf>,

    /// Directory downloaded Womtool JARs are installed into
    #[arg(long, value_name = "DIR")]
    pub womtool_jar_dir: Option<PathBuf>,

    /// Never prompt; fail if the platform is missing
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
