//! Console status lines for the operator running a script.
//!
//! These complement the `tracing` logs: one prefixed line per outcome,
//! printed whatever `RUST_LOG` says.

use console::style;

pub fn print_header(msg: &str) {
    println!("{}", style(format!("🔧 {}", msg)).bold());
}

pub fn print_success(msg: &str) {
    println!("{}", style(format!("✅ {}", msg)).green());
}

pub fn print_failure(msg: &str) {
    eprintln!("{}", style(format!("❌ {}", msg)).red());
}

/// A refused action rather than an error, so it stays on stdout
pub fn print_cancelled(msg: &str) {
    println!("{}", style(format!("❌ {}", msg)).red());
}

pub fn print_info(msg: &str) {
    println!("{}", style(msg).cyan());
}
