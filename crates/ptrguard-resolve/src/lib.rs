//! PtrGuard resolve — type sugar resolution.
//!
//! Walks a type expression outside-in, expanding alias templates through
//! the alias-definition environment, and produces the canonical ordered
//! sequence of nullability annotations, one per pointer level of the
//! fully resolved type.

pub mod resolve;
mod substitute;

pub use resolve::{resolve, ResolveError};
