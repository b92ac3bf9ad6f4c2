//! Inference orchestrator — runs aggregation over an analysis input and
//! maps results to diagnostics.
//!
//! `resolve` and `infer` are pure per-symbol functions, so a driver may
//! fan this loop out across symbols; nothing here shares mutable state.

use ptrguard_diagnostics::diagnostic::Diagnostic;
use ptrguard_diagnostics::render::{render_inference, RenderOptions};
use ptrguard_infer::infer;
use ptrguard_ir::inference::{AnalysisInput, Inference};

use crate::config::Config;

/// Run slot inference for every symbol in the input.
///
/// Unless `include_trivial` is set, slot results that only restate an
/// existing annotation are dropped, and symbols left with no slot results
/// are dropped entirely — matching what gets serialized and rendered.
pub fn run_inference(input: &AnalysisInput, config: &Config) -> Vec<Inference> {
    let mut results: Vec<Inference> = input
        .symbols
        .iter()
        .map(|s| infer(s.symbol.clone(), s.param_count, &s.samples))
        .collect();

    if !config.report.include_trivial {
        for inference in &mut results {
            inference.slot_inference.retain(|s| !s.is_trivial());
        }
        results.retain(|i| i.slot_inference.iter().any(|s| !s.sample_evidence.is_empty()));
    }
    results
}

/// Map inference results to diagnostics, honoring the report config.
/// Trivial results were already filtered by `run_inference`.
pub fn diagnostics_for(results: &[Inference], config: &Config) -> Vec<Diagnostic> {
    let options = RenderOptions {
        include_trivial: true,
        show_evidence: config.report.show_evidence,
    };
    let mut diags: Vec<Diagnostic> = results
        .iter()
        .flat_map(|inference| render_inference(inference, &options))
        .collect();
    if config.report.max_diagnostics > 0 {
        diags.truncate(config.report.max_diagnostics);
    }
    diags
}
