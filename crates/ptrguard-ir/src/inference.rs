//! Inference records — the per-symbol output contract.
//!
//! An `Inference` is produced once per analyzed declaration per run and is
//! immutable afterwards. Its nesting (symbol → slots → samples) is the
//! stable contract reporting and bindings-generation tools rely on.

use serde::{Deserialize, Serialize};

use crate::evidence::{EvidenceSample, Slot};
use crate::nullability::Nullability;

/// A stable cross-reference key for a declaration, plus an optional
/// human-readable name for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Unified symbol reference (linker-style stable identity).
    pub usr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Symbol {
    pub fn new(usr: impl Into<String>) -> Symbol {
        Symbol {
            usr: usr.into(),
            name: None,
        }
    }

    pub fn named(usr: impl Into<String>, name: impl Into<String>) -> Symbol {
        Symbol {
            usr: usr.into(),
            name: Some(name.into()),
        }
    }

    /// Name for display, falling back to the USR.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.usr)
    }
}

/// The inferred verdict for one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotInference {
    pub slot: Slot,
    /// The verdict after aggregating this slot's evidence.
    pub nullability: Nullability,
    /// True when retained samples assert mutually exclusive nullability
    /// with no subsumption rule resolving the disagreement.
    pub conflict: bool,
    /// Retained evidence for explainability, bounded, in arrival order.
    /// Every distinct concrete nullability among the slot's samples keeps
    /// at least one sample, so a conflict is visible here.
    pub sample_evidence: Vec<EvidenceSample>,
}

impl SlotInference {
    /// A trivial result adds nothing the user doesn't already have: no
    /// conflict, and the declaration was already annotated.
    pub fn is_trivial(&self) -> bool {
        !self.conflict && self.sample_evidence.iter().any(|s| s.kind.is_explicit())
    }
}

/// Per-symbol inference: the ordered slot results for one declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inference {
    pub symbol: Symbol,
    pub slot_inference: Vec<SlotInference>,
}

/// Evidence collected for one symbol, as produced by the usage-scanning
/// front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolEvidence {
    pub symbol: Symbol,
    /// Number of parameters in the signature; slots run from the return
    /// slot through `Slot::param(param_count - 1)`.
    pub param_count: u32,
    #[serde(default)]
    pub samples: Vec<EvidenceSample>,
}

/// The full input to one inference run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub symbols: Vec<SymbolEvidence>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::EvidenceKind;

    fn sample(kind: EvidenceKind, nullability: Nullability) -> EvidenceSample {
        EvidenceSample::new(Slot::RETURN, nullability, kind, "a.cc:1:1")
    }

    #[test]
    fn test_symbol_display_name() {
        assert_eq!(Symbol::new("c:@F@f").display_name(), "c:@F@f");
        assert_eq!(Symbol::named("c:@F@f", "f").display_name(), "f");
    }

    #[test]
    fn test_trivial_annotated_no_conflict() {
        let si = SlotInference {
            slot: Slot::RETURN,
            nullability: Nullability::Nullable,
            conflict: false,
            sample_evidence: vec![sample(EvidenceKind::Annotation, Nullability::Nullable)],
        };
        assert!(si.is_trivial());
    }

    #[test]
    fn test_not_trivial_with_conflict() {
        let si = SlotInference {
            slot: Slot::RETURN,
            nullability: Nullability::Nullable,
            conflict: true,
            sample_evidence: vec![
                sample(EvidenceKind::Annotation, Nullability::Nullable),
                sample(EvidenceKind::UncheckedDereference, Nullability::NonNull),
            ],
        };
        assert!(!si.is_trivial());
    }

    #[test]
    fn test_not_trivial_usage_only() {
        let si = SlotInference {
            slot: Slot::RETURN,
            nullability: Nullability::NonNull,
            conflict: false,
            sample_evidence: vec![sample(
                EvidenceKind::UncheckedDereference,
                Nullability::NonNull,
            )],
        };
        assert!(!si.is_trivial());
    }

    #[test]
    fn test_inference_json_roundtrip() {
        let inference = Inference {
            symbol: Symbol::named("c:@F@get", "get"),
            slot_inference: vec![SlotInference {
                slot: Slot::param(0),
                nullability: Nullability::NonNull,
                conflict: false,
                sample_evidence: vec![sample(
                    EvidenceKind::UncheckedDereference,
                    Nullability::NonNull,
                )],
            }],
        };
        let json = serde_json::to_string(&inference).unwrap();
        let parsed: Inference = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, inference);
    }
}
