//! Aide - agent instructions manager
//!
//! Seeds a marker-delimited agent instructions file into a workspace and keeps
//! it in step with its template without ever overwriting sections a user has
//! edited. The merge itself is available as a pure function:
//!
//! ```
//! use aide::instructions::{default_template, merge};
//!
//! let existing = "<!-- AIDE:BEGIN Project overview -->\nMy notes\n<!-- AIDE:END Project overview -->\n";
//! let (text, changed) = merge(Some(existing), default_template()).into_parts();
//! assert!(changed);
//! assert!(text.starts_with(existing.trim_end()));
//! assert!(text.contains("<!-- AIDE:BEGIN Build & run -->"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod instructions;
pub mod storage;
pub mod ui;
pub mod workspace;
