//! PtrGuard infer — slot-level nullability inference.
//!
//! Aggregates scattered, sometimes-conflicting evidence samples into one
//! verdict per slot, with explicit conflict detection.

pub mod aggregate;

pub use aggregate::{infer, MAX_RETAINED_SAMPLES};
