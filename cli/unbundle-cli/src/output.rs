//! Console output for unbundle.
//!
//! Progress and instructions go to stdout, errors to stderr. Colors are
//! only used when the stream is a terminal.

use owo_colors::{OwoColorize, Stream, Style};
use unbundle_capabilities::Instructions;

/// Print a stage header
/// Example: "📦 Extracting files..."
pub fn action(message: &str) {
    println!("{}", message.if_supports_color(Stream::Stdout, |m| m.bold()));
}

/// Print one extracted file
/// Example: "  ✓ src/main.rs"
pub fn written(path: &str) {
    println!("  {} {}", "✓".if_supports_color(Stream::Stdout, |m| m.green()), path);
}

/// Print the follow-up block. Nothing in it is run.
pub fn instructions(instructions: &Instructions) {
    for line in instructions.lines() {
        println!("{line}");
    }
}

/// Print an error message (red)
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        "Error:".if_supports_color(Stream::Stderr, |m| m.style(Style::new().red().bold())),
        message
    );
}
