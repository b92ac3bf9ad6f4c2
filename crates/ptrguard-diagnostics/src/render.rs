//! Rendering inference results as diagnostics.

use ptrguard_ir::evidence::Slot;
use ptrguard_ir::inference::Inference;

use crate::diagnostic::{Diagnostic, Severity};
use crate::location::parse_location;

/// Rendering toggles, normally taken from the report configuration.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include slot results that only restate an existing annotation.
    pub include_trivial: bool,
    /// Emit one note per retained evidence sample.
    pub show_evidence: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            include_trivial: false,
            show_evidence: true,
        }
    }
}

/// Source-level name for a slot.
pub fn slot_name(slot: Slot) -> String {
    match slot.param_index() {
        None => "return type".to_string(),
        Some(index) => format!("parameter {index}"),
    }
}

/// Map one inference to its diagnostics: a primary remark per slot result
/// with anything to say, plus evidence notes. Samples whose location
/// string does not parse are silently skipped.
pub fn render_inference(inference: &Inference, options: &RenderOptions) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    let symbol = &inference.symbol;

    for slot_result in &inference.slot_inference {
        if !options.include_trivial && slot_result.is_trivial() {
            continue;
        }
        // A slot with no retained evidence has nothing to explain.
        if slot_result.sample_evidence.is_empty() {
            continue;
        }

        let primary_id = format!("INFER-{}#{}", symbol.usr, slot_result.slot.0);
        diags.push(Diagnostic {
            id: primary_id.clone(),
            severity: Severity::Remark,
            message: format!(
                "{}: would mark {} as {}",
                symbol.display_name(),
                slot_name(slot_result.slot),
                slot_result.nullability
            ),
            location: None,
        });

        if options.show_evidence {
            for (index, sample) in slot_result.sample_evidence.iter().enumerate() {
                let Some(location) = parse_location(&sample.location) else {
                    continue;
                };
                diags.push(Diagnostic {
                    id: format!("{primary_id}-s{index}"),
                    severity: Severity::Note,
                    message: format!("{} here", sample.kind),
                    location: Some(location),
                });
            }
        }
    }

    diags
}

/// Format diagnostics as plain text, one line per message, notes indented
/// under their remark.
pub fn format_human(diags: &[Diagnostic]) -> String {
    if diags.is_empty() {
        return "no inferences\n".to_string();
    }
    let mut out = String::new();
    for diag in diags {
        match (diag.severity, &diag.location) {
            (Severity::Remark, _) => {
                out.push_str(&format!("remark: {}\n", diag.message));
            }
            (Severity::Note, Some(location)) => {
                out.push_str(&format!("  note: {location}: {}\n", diag.message));
            }
            (Severity::Note, None) => {
                out.push_str(&format!("  note: {}\n", diag.message));
            }
        }
    }
    out
}
