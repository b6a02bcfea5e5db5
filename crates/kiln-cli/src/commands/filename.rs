//! Filename command implementation.

use std::path::Path;

use tracing::debug;

use crate::cli::FilenameArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};

/// Print the name `args.file` would be emitted under.
pub fn execute(args: FilenameArgs) -> Result<()> {
    let content = std::fs::read(&args.file).with_path(&args.file)?;
    let mode = utils::resolve_mode(args.mode);

    let ext = match args.ext.as_deref() {
        Some(ext) => ext.to_string(),
        None => extension_of(&args.file)?,
    };
    let name = match args.name {
        Some(name) => name,
        None => stem_of(&args.file)?,
    };

    let template = mode.try_filename(&ext)?;
    debug!(%template, bytes = content.len(), "rendering output name");
    println!("{}", template.render(&name, &content));
    Ok(())
}

fn extension_of(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "{} has no extension, pass --ext",
                path.display()
            ))
        })
}

fn stem_of(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::InvalidArgument(format!("cannot derive a chunk name from {}", path.display()))
        })
}
