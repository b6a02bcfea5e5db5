use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::ModeArg;

/// Available Kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the derived build configuration as JSON
    ///
    /// The mode comes from NODE_ENV unless --mode is given. Anything other
    /// than "development" resolves to production.
    Config(ConfigArgs),

    /// Validate the configuration and the inputs it points at
    ///
    /// Checks plugin ordering and naming invariants, then that the source
    /// root, entry scripts and HTML template exist.
    Check(CheckArgs),

    /// Render the output filename a file would be emitted under
    Filename(FilenameArgs),

    /// Show which handler chain applies to module paths
    Rules(RulesArgs),
}

impl Command {
    /// Project options, for commands that load project settings.
    pub fn project(&self) -> Option<&ProjectArgs> {
        match self {
            Command::Config(args) => Some(&args.project),
            Command::Check(args) => Some(&args.project),
            Command::Filename(_) | Command::Rules(_) => None,
        }
    }
}

/// Options shared by commands that derive a configuration
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root containing kiln.toml or package.json
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Settings file to use instead of searching the project root
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the mode read from NODE_ENV
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Emit single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only check structural invariants, skip the filesystem
    #[arg(long)]
    pub schema_only: bool,
}

/// Arguments for the filename command
#[derive(Args, Debug)]
pub struct FilenameArgs {
    /// File whose content is fingerprinted
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Chunk name (defaults to the file stem)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Asset kind extension (defaults to the file extension)
    #[arg(short, long)]
    pub ext: Option<String>,

    /// Override the mode read from NODE_ENV
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Arguments for the rules command
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Module paths to match against the rule table
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<String>,

    /// Override the mode read from NODE_ENV
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}
