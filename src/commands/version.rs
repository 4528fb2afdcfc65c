//! Version command implementation

use crate::error::Result;
use crate::instructions::TEMPLATE_VERSION;

/// Run version command
pub fn run() -> Result<()> {
    println!("aide {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Template version: {TEMPLATE_VERSION}");

    Ok(())
}

fn rustc_version() -> &'static str {
    // Minimum supported rustc, from Cargo.toml
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
