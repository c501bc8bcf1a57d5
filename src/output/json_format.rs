//! JSON output formatting.
//!
//! One compact object per line, so a watch session is a JSON Lines stream.

use crate::signal::Signal;
use std::io::{self, Write};

/// Print a signal as a single JSON line to stdout.
pub fn print_json(signal: &Signal) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, signal)
}

/// Write a signal as a single JSON line.
pub fn write_json<W: Write>(out: &mut W, signal: &Signal) -> io::Result<()> {
    serde_json::to_writer(&mut *out, signal).map_err(io::Error::other)?;
    writeln!(out)?;
    out.flush()
}
