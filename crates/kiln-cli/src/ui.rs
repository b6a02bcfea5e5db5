//! Status lines on stderr.
//!
//! Command results (JSON, file names) go to stdout; everything meant for a
//! human goes through here so piping `kiln config` stays clean.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;

static COLOR: AtomicBool = AtomicBool::new(true);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Success,
    Info,
    Warning,
}

/// Decide once whether status lines are colored.
pub fn init_colors(no_color: bool) {
    COLOR.store(!no_color && crate::logger::should_use_colors(), Ordering::Relaxed);
}

fn render(level: Level, message: &str, color: bool) -> String {
    let marker = match level {
        Level::Success => "✓",
        Level::Info => "ℹ",
        Level::Warning => "⚠",
    };

    if !color {
        return format!("{marker} {message}");
    }

    match level {
        Level::Success => format!("{} {}", marker.green().bold(), message),
        Level::Info => format!("{} {}", marker.blue().bold(), message),
        Level::Warning => format!("{} {}", marker.yellow().bold(), message.yellow()),
    }
}

fn emit(level: Level, message: &str) {
    eprintln!("{}", render(level, message, COLOR.load(Ordering::Relaxed)));
}

pub fn success(message: &str) {
    emit(Level::Success, message);
}

pub fn info(message: &str) {
    emit(Level::Info, message);
}

pub fn warning(message: &str) {
    emit(Level::Warning, message);
}
