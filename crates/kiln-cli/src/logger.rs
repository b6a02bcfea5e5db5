//! Logging infrastructure for the Kiln CLI.
//!
//! Structured logging on `tracing`. `--verbose` enables debug output for the
//! kiln crates, `--quiet` limits output to errors, and otherwise `RUST_LOG`
//! is honoured, then the project's `log_level`, then an info-level fallback.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "kiln=debug,kiln_cli=debug,kiln_config=debug";
const QUIET_FILTER: &str = "kiln=error,kiln_cli=error,kiln_config=error";
const DEFAULT_FILTER: &str = "kiln=info,kiln_cli=info,kiln_config=info";

/// Initialize the tracing subscriber.
///
/// Call once at startup, before any logging occurs. Log lines go to stderr so
/// that command output on stdout stays machine-readable.
///
/// # Verbosity Levels
///
/// 1. `--verbose` flag: DEBUG for kiln crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. `log_level` from project settings, applied to the kiln crates
/// 5. Default: INFO for kiln crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, log_level: Option<&str>) {
    init_logger_with_filter(filter_for(verbose, quiet, log_level), no_color);
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    // A second initialisation (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool, log_level: Option<&str>) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env()
            .ok()
            .or_else(|| log_level.and_then(settings_filter))
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Filter applying a bare level such as `debug` to the kiln crates.
fn settings_filter(level: &str) -> Option<EnvFilter> {
    let level: tracing::Level = level.trim().parse().ok()?;
    let level = level.as_str().to_ascii_lowercase();
    EnvFilter::try_new(format!("kiln={level},kiln_cli={level},kiln_config={level}")).ok()
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal's capabilities decide.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn no_color_wins_over_force_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        let enabled = should_use_colors();
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
        assert!(!enabled);
    }

    #[test]
    #[serial]
    fn force_color_enables_colors() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        let enabled = should_use_colors();
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
        assert!(enabled);
    }

    #[test]
    fn verbose_filter_enables_debug() {
        assert_eq!(
            filter_for(true, false, Some("error")).to_string(),
            EnvFilter::new(VERBOSE_FILTER).to_string()
        );
    }

    #[test]
    #[serial]
    fn settings_level_applies_without_rust_log() {
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        let filter = filter_for(false, false, Some("TRACE")).to_string();
        assert_eq!(
            filter,
            EnvFilter::new("kiln=trace,kiln_cli=trace,kiln_config=trace").to_string()
        );
    }

    #[test]
    #[serial]
    fn rust_log_wins_over_settings_level() {
        unsafe {
            std::env::set_var("RUST_LOG", "kiln_config=warn");
        }
        let filter = filter_for(false, false, Some("trace")).to_string();
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        assert_eq!(filter, EnvFilter::new("kiln_config=warn").to_string());
    }

    #[test]
    #[serial]
    fn unknown_settings_level_falls_back_to_default() {
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        assert_eq!(
            filter_for(false, false, Some("loud")).to_string(),
            EnvFilter::new(DEFAULT_FILTER).to_string()
        );
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logger(false, true, true, None);
        init_logger(true, false, true, Some("debug"));
    }
}
