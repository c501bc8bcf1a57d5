//! Output formatting module.
//!
//! Renders signals for a terminal (plain) or for another program (JSON).

mod json_format;
mod plain;

pub use json_format::{print_json, write_json};
pub use plain::{print_error, print_info, print_plain, print_warning, write_plain};

use crate::cli::OutputFormat;
use crate::signal::Signal;
use std::io;

/// Format and print a signal according to the specified format.
pub fn print_signal(signal: &Signal, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => print_plain(signal),
        OutputFormat::Json => print_json(signal),
    }
}
