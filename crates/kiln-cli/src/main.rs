//! Kiln CLI entry point: argument parsing, logging setup and command dispatch.

use clap::Parser;
use kiln_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let log_level = args.command.project().and_then(commands::configured_log_level);
    logger::init_logger(args.verbose, args.quiet, args.no_color, log_level.as_deref());
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Filename(filename_args) => commands::filename_execute(filename_args),
        cli::Command::Rules(rules_args) => commands::rules_execute(rules_args),
    };

    result.map_err(error::cli_error_to_miette)
}
