//! Rules command implementation.

use kiln_config::{Handler, module_rules};

use crate::cli::RulesArgs;
use crate::commands::utils;
use crate::error::Result;

/// Print the handler chain each path is transformed with.
pub fn execute(args: RulesArgs) -> Result<()> {
    let rules = module_rules(utils::resolve_mode(args.mode));
    for path in &args.paths {
        println!("{path}: {}", describe(rules.handlers_for(path)));
    }
    Ok(())
}

fn describe(handlers: Option<&[Handler]>) -> String {
    match handlers {
        Some(chain) => chain
            .iter()
            .map(|handler| match handler {
                Handler::CssExtract { hmr: true, .. } => "css-extract(hmr)".to_string(),
                other => other.name().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" -> "),
        None => "(bundler default)".to_string(),
    }
}
