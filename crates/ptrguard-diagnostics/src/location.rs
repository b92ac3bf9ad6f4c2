//! Source locations and the `"file:line:col"` string contract.

use serde::{Deserialize, Serialize};

/// Source code location. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Parse a `"<file>:<line>:<col>"` evidence location back into a
/// `Location`. The filename may itself contain `:`, so the last two
/// `:`-separated fields are column and line respectively.
///
/// Any parse failure yields `None`; callers omit the affected message
/// rather than failing the whole render.
pub fn parse_location(text: &str) -> Option<Location> {
    let (rest, column_str) = text.rsplit_once(':')?;
    let (file, line_str) = rest.rsplit_once(':')?;
    if file.is_empty() {
        return None;
    }
    let line = line_str.parse().ok()?;
    let column = column_str.parse().ok()?;
    Some(Location {
        file: file.to_string(),
        line,
        column,
    })
}
