//! Command-line interface definition for Kiln.
//!
//! # Command Structure
//!
//! - `kiln config` - Print the derived build configuration
//! - `kiln check` - Validate configuration and inputs
//! - `kiln filename` - Render a content-hashed output name
//! - `kiln rules` - Match module paths against the rule table

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, FilenameArgs, ProjectArgs, RulesArgs};
pub use enums::*;

/// Kiln - build policy for a front-end bundle
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Derive the bundler configuration for development or production",
    long_about = "Kiln derives the complete bundler configuration from a single mode signal.\n\
                  Development builds get stable file names, source maps and live reload;\n\
                  production builds get content-hashed names, minifiers and a bundle report."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
