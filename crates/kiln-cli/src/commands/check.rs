//! Check command implementation.
//!
//! Validates the derived configuration, then the inputs it references.

use kiln_config::{ConfigDiscovery, ConfigValidator, FsValidator, SchemaValidator};
use tracing::debug;

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load project settings and derive the configuration
/// 2. Check structural invariants (plugin order, naming, analyzer placement)
/// 3. Unless `--schema-only`: check source root, entry scripts and template
pub fn execute(args: CheckArgs) -> Result<()> {
    if args.project.config.is_none() && ConfigDiscovery::new(&args.project.root).find().is_none() {
        ui::warning("No kiln.toml or package.json \"kiln\" field found, using defaults");
    }

    let config = utils::derive(&args.project)?;
    ui::info(&format!("Checking {} configuration...", config.mode));

    SchemaValidator.validate(&config)?;
    ui::success("Configuration is consistent");

    if args.schema_only {
        return Ok(());
    }

    // Derived paths are relative to the working directory unless --root was absolute.
    let cwd = std::env::current_dir().context("Cannot resolve the working directory")?;
    debug!(context = %config.context.display(), "checking build inputs");
    FsValidator::new(&cwd).validate(&config)?;
    ui::success("Source root, entries and template found");

    Ok(())
}
