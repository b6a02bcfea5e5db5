//! Kiln CLI - resolve and inspect the build policy for a front-end bundle.
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - Command implementations
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status lines on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
