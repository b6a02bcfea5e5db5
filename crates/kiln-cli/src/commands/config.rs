//! Config command implementation.

use tracing::info;

use crate::cli::ConfigArgs;
use crate::commands::utils;
use crate::error::Result;

/// Print the derived configuration as JSON on stdout.
pub fn execute(args: ConfigArgs) -> Result<()> {
    let config = utils::derive(&args.project)?;
    info!(mode = %config.mode, plugins = config.plugins.len(), "derived build configuration");

    let json = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };
    println!("{json}");
    Ok(())
}
