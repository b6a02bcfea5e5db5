//! Command implementations for the Kiln CLI.
//!
//! - [`config`] - Print the derived build configuration
//! - [`check`] - Validate configuration and inputs
//! - [`filename`] - Render a content-hashed output name
//! - [`rules`] - Match module paths against the rule table
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod check;
pub mod config;
pub mod filename;
pub mod rules;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use config::execute as config_execute;
pub use filename::execute as filename_execute;
pub use rules::execute as rules_execute;
pub use utils::configured_log_level;
