//! Slots and evidence samples.
//!
//! A slot is one nullability-relevant position in a function signature.
//! Evidence samples are produced by an external usage-scanning pass, one
//! per observed usage site, and consumed once by aggregation.

use serde::{Deserialize, Serialize};

use crate::nullability::Nullability;

/// One nullability-relevant position: slot 0 is the return type, slot
/// `n >= 1` is parameter `n - 1`. Slot identity is stable across
/// resolution passes and evidence collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Slot(pub u32);

impl Slot {
    pub const RETURN: Slot = Slot(0);

    /// Offset of the first parameter slot.
    const PARAM_BASE: u32 = 1;

    pub fn param(index: u32) -> Slot {
        Slot(Slot::PARAM_BASE + index)
    }

    pub fn is_return(self) -> bool {
        self.0 == 0
    }

    /// Zero-based parameter index, or `None` for the return slot.
    pub fn param_index(self) -> Option<u32> {
        self.0.checked_sub(Slot::PARAM_BASE)
    }
}

/// What kind of observation a sample records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    /// The declaration itself carries a written nullability annotation.
    Annotation,
    /// Dereferenced without a preceding null check.
    UncheckedDereference,
    /// Compared against null before use.
    NullComparison,
    /// A call site passes an argument proven non-null.
    NonNullArgument,
    /// A call site passes an argument that may be null.
    NullableArgument,
    /// A return path yields a possibly-null value.
    NullableReturn,
}

impl EvidenceKind {
    /// Explicit-annotation evidence is authoritative over usage-derived
    /// evidence during aggregation.
    pub fn is_explicit(self) -> bool {
        matches!(self, EvidenceKind::Annotation)
    }
}

impl std::fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Annotation => write!(f, "annotation"),
            Self::UncheckedDereference => write!(f, "unchecked dereference"),
            Self::NullComparison => write!(f, "null comparison"),
            Self::NonNullArgument => write!(f, "nonnull argument"),
            Self::NullableArgument => write!(f, "nullable argument"),
            Self::NullableReturn => write!(f, "nullable return"),
        }
    }
}

/// One observation about one slot's nullability.
///
/// `location` uses the literal `"<file>:<line>:<col>"` contract (1-based
/// line and column); it must survive serialization across the inference
/// boundary, so it is a plain string rather than a position type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSample {
    pub slot: Slot,
    pub nullability: Nullability,
    pub kind: EvidenceKind,
    pub location: String,
}

impl EvidenceSample {
    pub fn new(
        slot: Slot,
        nullability: Nullability,
        kind: EvidenceKind,
        location: impl Into<String>,
    ) -> EvidenceSample {
        EvidenceSample {
            slot,
            nullability,
            kind,
            location: location.into(),
        }
    }
}
