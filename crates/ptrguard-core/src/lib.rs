//! PtrGuard core — configuration and the inference orchestrator.

pub mod config;
pub mod orchestrator;
