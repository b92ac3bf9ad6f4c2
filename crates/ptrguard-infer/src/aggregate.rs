//! Evidence aggregation: one verdict per slot.
//!
//! Verdict policy:
//! 1. Explicit annotations are authoritative. Disagreeing usage evidence
//!    sets the conflict flag but never overrides them.
//! 2. Usage-only evidence merges: one distinct concrete value wins; two or
//!    more set the conflict flag and the verdict falls back to
//!    `unspecified` rather than picking a side.
//! 3. No evidence yields `unspecified` with no conflict.
//!
//! Verdict and conflict flag are computed from value sets, so aggregation
//! is insensitive to sample arrival order. Retained samples keep arrival
//! order for display, but every distinct concrete value keeps a witness
//! sample, so a conflict is always visible in the retained evidence.

use std::collections::BTreeMap;

use ptrguard_ir::evidence::{EvidenceSample, Slot};
use ptrguard_ir::inference::{Inference, SlotInference, Symbol};
use ptrguard_ir::nullability::Nullability;

/// Cap on evidence retained per slot for diagnostics.
pub const MAX_RETAINED_SAMPLES: usize = 5;

/// Infer one verdict per slot of a declaration with `param_count`
/// parameters. Every slot appears in the result, evidence or not; samples
/// naming a slot outside the declared range still get a result rather
/// than being dropped.
pub fn infer(symbol: Symbol, param_count: u32, samples: &[EvidenceSample]) -> Inference {
    let mut by_slot: BTreeMap<Slot, Vec<&EvidenceSample>> = BTreeMap::new();
    by_slot.insert(Slot::RETURN, Vec::new());
    for index in 0..param_count {
        by_slot.insert(Slot::param(index), Vec::new());
    }
    for sample in samples {
        by_slot.entry(sample.slot).or_default().push(sample);
    }

    let slot_inference = by_slot
        .into_iter()
        .map(|(slot, group)| infer_slot(slot, &group))
        .collect();

    Inference {
        symbol,
        slot_inference,
    }
}

fn infer_slot(slot: Slot, samples: &[&EvidenceSample]) -> SlotInference {
    let explicit_values = distinct_concrete(samples, true);
    let usage_values = distinct_concrete(samples, false);

    let (nullability, conflict) = if !explicit_values.is_empty() {
        if explicit_values.len() > 1 {
            // The declaration contradicts itself (e.g. redeclarations with
            // different annotations). Conservative fallback.
            (Nullability::Unspecified, true)
        } else {
            let verdict = explicit_values[0];
            let disagrees = usage_values.iter().any(|&v| v != verdict);
            (verdict, disagrees)
        }
    } else {
        match usage_values[..] {
            [] => (Nullability::Unspecified, false),
            [only] => (only, false),
            _ => (Nullability::Unspecified, true),
        }
    };

    SlotInference {
        slot,
        nullability,
        conflict,
        sample_evidence: retained_samples(samples),
    }
}

/// Bound the retained evidence, keeping arrival order.
///
/// The first sample of each distinct concrete value is always kept, so
/// when the slot conflicts the retained set contains the disagreement
/// rather than five early samples that happen to agree. At most two
/// concrete values exist, so the witnesses never exceed the cap.
fn retained_samples(samples: &[&EvidenceSample]) -> Vec<EvidenceSample> {
    let mut witnessed: Vec<Nullability> = Vec::new();
    let mut kept: Vec<usize> = Vec::new();
    for (index, sample) in samples.iter().enumerate() {
        if sample.nullability.is_concrete() && !witnessed.contains(&sample.nullability) {
            witnessed.push(sample.nullability);
            kept.push(index);
        }
    }
    for index in 0..samples.len() {
        if kept.len() == MAX_RETAINED_SAMPLES {
            break;
        }
        if !kept.contains(&index) {
            kept.push(index);
        }
    }
    kept.sort_unstable();
    kept.into_iter().map(|i| (*samples[i]).clone()).collect()
}

/// Distinct concrete nullability values among the slot's samples, sorted
/// for order-insensitivity. `Unspecified` observations assert nothing and
/// are ignored.
fn distinct_concrete(samples: &[&EvidenceSample], explicit: bool) -> Vec<Nullability> {
    let mut values: Vec<Nullability> = samples
        .iter()
        .filter(|s| s.kind.is_explicit() == explicit)
        .map(|s| s.nullability)
        .filter(|n| n.is_concrete())
        .collect();
    values.sort_unstable();
    values.dedup();
    values
}
