//! Command implementations for Aide CLI

pub mod completions;
pub mod generate;
pub mod status;
pub mod template;
pub mod version;
