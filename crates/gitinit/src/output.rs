//! Styled terminal output for bootstrap progress
//!
//! Completed steps and notes go to stdout; warnings and the final error of a
//! failed run go to stderr so they stay visible when stdout is piped.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A finished step, e.g. `Repository "my-app" created`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// The error that ended the run
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// A skipped step, e.g. `Already a Git repository!`
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// A note about the flow, e.g. `initial commit skipped`
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Banner printed once at startup
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Summary line after a completed run, e.g. the repository's web URL
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Spinner shown while a GitHub request is in flight; hidden when `quiet`
pub fn spinner(msg: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(template.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
