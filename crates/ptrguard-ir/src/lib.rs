//! PtrGuard IR — shared data model for nullability analysis.
//!
//! The front end (an external compiler pass) produces type expression trees
//! and classified evidence samples; this crate provides:
//! - The nullability annotation values and slot numbering
//! - Type expression trees and the alias-definition environment
//! - Evidence samples and the per-symbol inference record (the wire contract
//!   consumed by reporting and bindings-generation tools)

pub mod evidence;
pub mod inference;
pub mod nullability;
pub mod types;

use std::path::Path;

use inference::AnalysisInput;
use types::ResolveRequest;

/// Errors reading the JSON inputs produced by the front end.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed input in {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a JSON analysis input (symbols, slot counts, evidence samples).
pub fn load_analysis_input(path: &Path) -> Result<AnalysisInput, InputError> {
    let data = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| InputError::Malformed {
        path: path.display().to_string(),
        source,
    })
}

/// Load a JSON resolve request (alias environment plus one type expression).
pub fn load_resolve_request(path: &Path) -> Result<ResolveRequest, InputError> {
    let data = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| InputError::Malformed {
        path: path.display().to_string(),
        source,
    })
}
