//! Substitution of template arguments into alias bodies.
//!
//! Arguments arrive fully formed in the caller's environment and are
//! spliced in as trees; names inside an argument are never re-bound by the
//! alias's own parameters, which makes the substitution capture-avoiding
//! without any renaming.

use std::collections::HashMap;

use ptrguard_ir::types::{TemplateParam, TypeExpr};

use crate::resolve::ResolveError;

/// What a formal parameter is bound to at an application site.
#[derive(Debug, Clone)]
pub(crate) enum Binding {
    /// An ordinary type argument.
    Ty(TypeExpr),
    /// An alias name bound to a template-template parameter.
    Template(String),
    /// The elements collected by a trailing parameter pack.
    Pack(Vec<TypeExpr>),
}

pub(crate) type Bindings = HashMap<String, Binding>;

/// Bind an application's arguments to the definition's formals.
///
/// A trailing pack parameter collects all remaining arguments; otherwise
/// the argument count must match exactly.
pub(crate) fn bind_arguments(
    name: &str,
    params: &[TemplateParam],
    args: &[TypeExpr],
) -> Result<Bindings, ResolveError> {
    let has_pack = params.last().is_some_and(|p| p.is_pack);
    let fixed = params.len() - usize::from(has_pack);

    if has_pack {
        if args.len() < fixed {
            return Err(ResolveError::TooFewArguments {
                name: name.to_string(),
                min: fixed,
                got: args.len(),
            });
        }
    } else if args.len() != fixed {
        return Err(ResolveError::ArityMismatch {
            name: name.to_string(),
            expected: fixed,
            got: args.len(),
        });
    }

    let mut bindings = Bindings::new();
    for (param, arg) in params[..fixed].iter().zip(args) {
        let binding = match arg {
            TypeExpr::TemplateRef(target) => Binding::Template(target.clone()),
            other => Binding::Ty(other.clone()),
        };
        bindings.insert(param.name.clone(), binding);
    }
    if has_pack {
        let pack = &params[fixed];
        bindings.insert(pack.name.clone(), Binding::Pack(args[fixed..].to_vec()));
    }
    Ok(bindings)
}

/// Rewrite `body` with every bound formal replaced by its argument.
///
/// Pack expansions are expanded where they appear in argument lists; an
/// expansion over an unbound pack survives untouched and the resolver
/// degrades it to an empty sub-sequence.
pub(crate) fn substitute(body: &TypeExpr, bindings: &Bindings) -> TypeExpr {
    match body {
        TypeExpr::Base(_) | TypeExpr::TemplateRef(_) => body.clone(),
        TypeExpr::Param(name) => match bindings.get(name) {
            Some(Binding::Ty(arg)) => arg.clone(),
            // Template/pack bindings in type position, or an unbound outer
            // parameter: leave for the resolver's degradation policy.
            _ => body.clone(),
        },
        TypeExpr::Pointer { marker, pointee } => TypeExpr::Pointer {
            marker: *marker,
            pointee: Box::new(substitute(pointee, bindings)),
        },
        TypeExpr::Annotated { marker, inner } => TypeExpr::Annotated {
            marker: *marker,
            inner: Box::new(substitute(inner, bindings)),
        },
        TypeExpr::Alias { name, args } => TypeExpr::Alias {
            name: rebind_name(name, bindings),
            args: substitute_args(args, bindings),
        },
        TypeExpr::Member {
            class,
            args,
            member,
        } => TypeExpr::Member {
            class: rebind_name(class, bindings),
            args: substitute_args(args, bindings),
            member: member.clone(),
        },
        TypeExpr::PackExpansion(pattern) => {
            TypeExpr::PackExpansion(Box::new(substitute(pattern, bindings)))
        }
    }
}

/// A template name position may itself be a template-template formal.
fn rebind_name(name: &str, bindings: &Bindings) -> String {
    match bindings.get(name) {
        Some(Binding::Template(target)) => target.clone(),
        _ => name.to_string(),
    }
}

fn substitute_args(args: &[TypeExpr], bindings: &Bindings) -> Vec<TypeExpr> {
    let mut out = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            TypeExpr::PackExpansion(pattern) => match expand_pack(pattern, bindings) {
                Some(elements) => out.extend(elements),
                None => out.push(arg.clone()),
            },
            other => out.push(substitute(other, bindings)),
        }
    }
    out
}

/// Expand `pattern...` once per element of the pack it ranges over,
/// in declaration order. `None` when no bound pack parameter occurs in
/// the pattern.
fn expand_pack(pattern: &TypeExpr, bindings: &Bindings) -> Option<Vec<TypeExpr>> {
    let pack_name = pack_param_of(pattern, bindings)?;
    let Some(Binding::Pack(elements)) = bindings.get(&pack_name) else {
        return None;
    };
    let expanded = elements
        .iter()
        .map(|element| {
            let mut per_element = bindings.clone();
            per_element.insert(pack_name.clone(), Binding::Ty(element.clone()));
            substitute(pattern, &per_element)
        })
        .collect();
    Some(expanded)
}

/// The pack parameter a pattern expands over, if any.
fn pack_param_of(pattern: &TypeExpr, bindings: &Bindings) -> Option<String> {
    match pattern {
        TypeExpr::Param(name) => {
            matches!(bindings.get(name), Some(Binding::Pack(_))).then(|| name.clone())
        }
        TypeExpr::Pointer { pointee, .. } => pack_param_of(pointee, bindings),
        TypeExpr::Annotated { inner, .. } => pack_param_of(inner, bindings),
        TypeExpr::PackExpansion(inner) => pack_param_of(inner, bindings),
        TypeExpr::Alias { args, .. } | TypeExpr::Member { args, .. } => {
            args.iter().find_map(|a| pack_param_of(a, bindings))
        }
        TypeExpr::Base(_) | TypeExpr::TemplateRef(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptrguard_ir::nullability::Nullability;

    #[test]
    fn test_bind_exact_arity() {
        let params = vec![TemplateParam::new("T"), TemplateParam::new("U")];
        let args = vec![TypeExpr::base("int"), TypeExpr::base("char")];
        let bindings = bind_arguments("Pair", &params, &args).unwrap();
        assert!(matches!(bindings.get("T"), Some(Binding::Ty(_))));
        assert!(matches!(bindings.get("U"), Some(Binding::Ty(_))));
    }

    #[test]
    fn test_bind_arity_mismatch() {
        let params = vec![TemplateParam::new("T")];
        let err = bind_arguments("Wrap", &params, &[]).unwrap_err();
        assert_eq!(
            err,
            ResolveError::ArityMismatch {
                name: "Wrap".into(),
                expected: 1,
                got: 0
            }
        );
    }

    #[test]
    fn test_bind_pack_too_few_fixed_arguments() {
        let params = vec![TemplateParam::new("T"), TemplateParam::pack("Rest")];
        let err = bind_arguments("First", &params, &[]).unwrap_err();
        assert_eq!(
            err,
            ResolveError::TooFewArguments {
                name: "First".into(),
                min: 1,
                got: 0
            }
        );
        assert!(err.to_string().contains("expected at least 1"));
    }

    #[test]
    fn test_bind_template_ref() {
        let params = vec![TemplateParam::new("F")];
        let args = vec![TypeExpr::TemplateRef("Nullable".into())];
        let bindings = bind_arguments("Apply", &params, &args).unwrap();
        match bindings.get("F") {
            Some(Binding::Template(target)) => assert_eq!(target, "Nullable"),
            other => panic!("expected template binding, got {other:?}"),
        }
    }

    #[test]
    fn test_bind_trailing_pack_collects_rest() {
        let params = vec![TemplateParam::new("T"), TemplateParam::pack("Rest")];
        let args = vec![
            TypeExpr::base("int"),
            TypeExpr::base("char"),
            TypeExpr::base("bool"),
        ];
        let bindings = bind_arguments("First", &params, &args).unwrap();
        match bindings.get("Rest") {
            Some(Binding::Pack(elements)) => assert_eq!(elements.len(), 2),
            other => panic!("expected pack binding, got {other:?}"),
        }
    }

    #[test]
    fn test_bind_empty_pack() {
        let params = vec![TemplateParam::pack("Xs")];
        let bindings = bind_arguments("Tuple", &params, &[]).unwrap();
        match bindings.get("Xs") {
            Some(Binding::Pack(elements)) => assert!(elements.is_empty()),
            other => panic!("expected pack binding, got {other:?}"),
        }
    }

    #[test]
    fn test_substitute_param() {
        let mut bindings = Bindings::new();
        bindings.insert(
            "T".into(),
            Binding::Ty(TypeExpr::pointer(TypeExpr::base("int"))),
        );
        let body = TypeExpr::annotated(Nullability::Nullable, TypeExpr::param("T"));
        let result = substitute(&body, &bindings);
        assert_eq!(
            result,
            TypeExpr::annotated(
                Nullability::Nullable,
                TypeExpr::pointer(TypeExpr::base("int"))
            )
        );
    }

    #[test]
    fn test_substitute_does_not_capture_argument_names() {
        // The argument mentions a name `T` that the alias also uses as a
        // formal; the argument tree must be spliced in untouched.
        let mut bindings = Bindings::new();
        bindings.insert("T".into(), Binding::Ty(TypeExpr::alias("T", vec![])));
        let body = TypeExpr::pointer(TypeExpr::param("T"));
        let result = substitute(&body, &bindings);
        assert_eq!(result, TypeExpr::pointer(TypeExpr::alias("T", vec![])));
    }

    #[test]
    fn test_pack_expansion_in_args() {
        let mut bindings = Bindings::new();
        bindings.insert(
            "Xs".into(),
            Binding::Pack(vec![TypeExpr::base("int"), TypeExpr::base("char")]),
        );
        let args = vec![TypeExpr::pack_expansion(TypeExpr::annotated(
            Nullability::Nullable,
            TypeExpr::param("Xs"),
        ))];
        let out = substitute_args(&args, &bindings);
        assert_eq!(out.len(), 2);
        assert_eq!(
            out[0],
            TypeExpr::annotated(Nullability::Nullable, TypeExpr::base("int"))
        );
        assert_eq!(
            out[1],
            TypeExpr::annotated(Nullability::Nullable, TypeExpr::base("char"))
        );
    }

    #[test]
    fn test_unbound_pack_expansion_survives() {
        let bindings = Bindings::new();
        let args = vec![TypeExpr::pack_expansion(TypeExpr::param("Xs"))];
        let out = substitute_args(&args, &bindings);
        assert_eq!(out, args);
    }
}
