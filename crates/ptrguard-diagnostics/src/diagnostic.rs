//! Core diagnostic types.
//!
//! The renderer produces `Diagnostic` values and all formatters (human,
//! JSON) consume them.

use serde::{Deserialize, Serialize};

use crate::location::Location;

/// A rendered finding: one primary remark per slot result, optionally
/// followed by one note per retained evidence sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique ID: INFER-<usr>#<slot> for remarks, with a -sN suffix for
    /// the N-th evidence note under it.
    pub id: String,
    pub severity: Severity,
    pub message: String,
    /// Remarks carry no location (the consumer maps the symbol back to its
    /// declaration); notes point at the evidence site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Severity level, matching the remark/note pair of the diagnostics
/// engine this output feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A secondary message attached to a remark.
    Note,
    /// A primary inference finding.
    Remark,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Note => write!(f, "note"),
            Self::Remark => write!(f, "remark"),
        }
    }
}
