//! Marker syntax for named instruction blocks
//!
//! A block is delimited by a begin marker and an end marker carrying the same
//! name. With the default syntax:
//!
//! ```text
//! <!-- AIDE:BEGIN Build & run -->
//! - Test: `npm test`
//! <!-- AIDE:END Build & run -->
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// Default begin token
pub const DEFAULT_BEGIN: &str = "<!-- AIDE:BEGIN ";

/// Default end token
pub const DEFAULT_END: &str = "<!-- AIDE:END ";

/// Default closing token
pub const DEFAULT_CLOSE: &str = " -->";

/// Begin/end token pair used to delimit named blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct MarkerSyntax {
    /// Text preceding the block name in a begin marker
    pub begin: String,
    /// Text preceding the block name in an end marker
    pub end: String,
    /// Text following the block name in both markers
    pub close: String,
}

impl Default for MarkerSyntax {
    fn default() -> Self {
        Self {
            begin: DEFAULT_BEGIN.to_string(),
            end: DEFAULT_END.to_string(),
            close: DEFAULT_CLOSE.to_string(),
        }
    }
}

impl MarkerSyntax {
    /// Render the begin marker for `name`
    pub fn begin_marker(&self, name: &str) -> String {
        format!("{}{}{}", self.begin, name, self.close)
    }

    /// Render the end marker for `name`
    pub fn end_marker(&self, name: &str) -> String {
        format!("{}{}{}", self.end, name, self.close)
    }

    /// Whether `text` follows the marker convention at all.
    ///
    /// Only the token prefixes are checked (any begin and any end marker),
    /// not whether they pair up.
    pub fn is_managed(&self, text: &str) -> bool {
        text.contains(self.begin.trim_end()) && text.contains(self.end.trim_end())
    }

    /// Whether `text` holds both markers for `name`
    pub fn contains_block(&self, text: &str, name: &str) -> bool {
        text.contains(&self.begin_marker(name)) && text.contains(&self.end_marker(name))
    }

    /// Whether `name` can be carried by a marker
    pub fn is_valid_name(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        match self.close.chars().last() {
            Some(terminator) => !name.contains(terminator),
            None => true,
        }
    }

    /// Reject syntaxes that cannot delimit blocks unambiguously
    pub fn validate(&self) -> Result<()> {
        if self.begin.trim().is_empty() || self.end.trim().is_empty() {
            return Err(config::invalid("marker begin and end tokens must not be empty"));
        }
        if self.close.is_empty() {
            return Err(config::invalid("marker close token must not be empty"));
        }
        if self.begin.trim_end() == self.end.trim_end() {
            return Err(config::invalid("marker begin and end tokens must differ"));
        }
        Ok(())
    }
}
