//! The type sugar resolver.
//!
//! `resolve` returns the nullability annotations of a type in outside-in
//! (prefix) order: one annotation per pointer level of the fully resolved
//! type, after expanding alias templates, template-template parameters,
//! dependent member aliases, and parameter packs.
//!
//! Precision gaps degrade to empty sub-sequences rather than failing:
//! references to an enclosing (non-innermost) template's parameters, and
//! members of class templates the environment does not model. Callers must
//! treat a shorter-than-expected sequence as "unknown annotations here".

use ptrguard_ir::nullability::Nullability;
use ptrguard_ir::types::{AliasEnv, TypeExpr};
use thiserror::Error;

use crate::substitute::{bind_arguments, substitute};

/// Malformed input: the expression could not have come from a well-typed
/// declaration. Precision gaps are not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("alias `{name}` applied with {got} arguments, expected {expected}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// A pack-terminated parameter list accepts any count at or above the
    /// fixed prefix, so too few gets its own wording.
    #[error("alias `{name}` applied with {got} arguments, expected at least {min}")]
    TooFewArguments { name: String, min: usize, got: usize },
}

/// Resolve a type expression to its nullability annotation sequence.
///
/// Pure function of the expression and the alias environment reachable
/// from it; the environment is read-only.
pub fn resolve(expr: &TypeExpr, env: &AliasEnv) -> Result<Vec<Nullability>, ResolveError> {
    match expr {
        TypeExpr::Base(_) => Ok(Vec::new()),

        TypeExpr::Pointer { marker, pointee } => {
            let mut seq = vec![marker.unwrap_or_default()];
            seq.extend(resolve(pointee, env)?);
            Ok(seq)
        }

        // A written attribute lands on the outermost pointer level of the
        // annotated type. Annotating a type with no pointer levels
        // contributes nothing.
        TypeExpr::Annotated { marker, inner } => {
            let mut seq = resolve(inner, env)?;
            if let Some(outer) = seq.first_mut() {
                *outer = *marker;
            }
            Ok(seq)
        }

        TypeExpr::Alias { name, args } => match env.alias(name) {
            Some(def) => {
                let bindings = bind_arguments(name, &def.params, args)?;
                resolve(&substitute(&def.body, &bindings), env)
            }
            // An opaque class-template specialization: nothing to expand,
            // but its arguments still carry annotations in declaration
            // order (e.g. `Pair<int* _Nullable, int*>`).
            None => resolve_all(args, env),
        },

        // An unbound formal is a reference to an enclosing template's
        // parameter, which we do not model.
        TypeExpr::Param(_) => Ok(Vec::new()),

        // A bare template name has no pointer structure of its own.
        TypeExpr::TemplateRef(_) => Ok(Vec::new()),

        TypeExpr::Member {
            class,
            args,
            member,
        } => {
            let Some(class_def) = env.class(class) else {
                return Ok(Vec::new());
            };
            let Some(body) = class_def.members.get(member) else {
                return Ok(Vec::new());
            };
            let bindings = bind_arguments(class, &class_def.params, args)?;
            resolve(&substitute(body, &bindings), env)
        }

        // An expansion that survived substitution ranges over an unbound
        // pack parameter.
        TypeExpr::PackExpansion(_) => Ok(Vec::new()),
    }
}

fn resolve_all(args: &[TypeExpr], env: &AliasEnv) -> Result<Vec<Nullability>, ResolveError> {
    let mut seq = Vec::new();
    for arg in args {
        seq.extend(resolve(arg, env)?);
    }
    Ok(seq)
}
