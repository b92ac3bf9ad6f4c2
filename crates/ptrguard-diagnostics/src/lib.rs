//! PtrGuard diagnostics — diagnostic records and formatters.
//!
//! Inference results are mapped to primary remarks ("would mark X as Y")
//! with per-sample notes, then formatted for humans or serialized as JSON.

pub mod diagnostic;
pub mod location;
pub mod render;
