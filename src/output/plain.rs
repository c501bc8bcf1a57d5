//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::signal::{Effect, Signal, SignalKind};
use console::{style, Style};
use std::io::{self, Write};

/// Print a signal in human-readable form to stdout.
pub fn print_plain(signal: &Signal) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_plain(&mut out, signal)
}

/// Write a signal in human-readable form.
///
/// The first line carries the state badge; a multi-line message is
/// indented under it.
pub fn write_plain<W: Write>(out: &mut W, signal: &Signal) -> io::Result<()> {
    let (badge, badge_style) = match (signal.kind, signal.point.as_ref().map(|p| p.effect)) {
        (SignalKind::Error, _) | (SignalKind::Status, None) => ("ERROR", Style::new().yellow().bold()),
        (SignalKind::Status, Some(Effect::SetColor)) => ("OK", Style::new().green().bold()),
        (SignalKind::Status, Some(Effect::Blink)) => ("ALERT", Style::new().red().bold().blink()),
    };

    let timestamp = signal.evaluated_at.format("%Y-%m-%d %H:%M:%S");
    let mut lines = signal.message.lines();

    writeln!(
        out,
        "{} {:<5} {} {}",
        style(timestamp).dim(),
        badge_style.apply_to(badge),
        style(&signal.name).bold(),
        lines.next().unwrap_or_default()
    )?;
    for line in lines {
        writeln!(out, "{:>26}{}", "", line)?;
    }

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}
