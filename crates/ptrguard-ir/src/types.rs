//! Type expression trees and the alias-definition environment.
//!
//! The front end lowers a possibly-sugared C-family type into this closed
//! tagged union. Keeping the node kinds closed makes unmodeled cases a
//! compile-time-visible decision in the resolver rather than a silent
//! fallthrough over an open class hierarchy.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::nullability::Nullability;

/// A type expression, immutable during resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeExpr {
    /// A non-pointer leaf type (`int`, `void`, a concrete class).
    Base(String),
    /// Pointer-to, optionally carrying a written nullability marker.
    Pointer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        marker: Option<Nullability>,
        pointee: Box<TypeExpr>,
    },
    /// A nullability attribute applied to a named or substituted type, as
    /// written in alias bodies: `T _Nullable`. The marker lands on the
    /// outermost pointer level of whatever `inner` resolves to.
    Annotated {
        marker: Nullability,
        inner: Box<TypeExpr>,
    },
    /// Application of a named template. If the name has a definition in the
    /// environment it is an alias to expand; otherwise it is an opaque
    /// class-template specialization whose arguments are still walked.
    Alias { name: String, args: Vec<TypeExpr> },
    /// A reference to a formal template parameter.
    Param(String),
    /// An alias name passed as a template-template argument.
    TemplateRef(String),
    /// Dependent member-type access: `Class<Args>::member`.
    Member {
        class: String,
        args: Vec<TypeExpr>,
        member: String,
    },
    /// `Pattern...` inside a template argument list.
    PackExpansion(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn base(name: impl Into<String>) -> TypeExpr {
        TypeExpr::Base(name.into())
    }

    /// An unannotated pointer to `pointee`.
    pub fn pointer(pointee: TypeExpr) -> TypeExpr {
        TypeExpr::Pointer {
            marker: None,
            pointee: Box::new(pointee),
        }
    }

    /// A pointer carrying a written nullability marker.
    pub fn pointer_with(marker: Nullability, pointee: TypeExpr) -> TypeExpr {
        TypeExpr::Pointer {
            marker: Some(marker),
            pointee: Box::new(pointee),
        }
    }

    pub fn annotated(marker: Nullability, inner: TypeExpr) -> TypeExpr {
        TypeExpr::Annotated {
            marker,
            inner: Box::new(inner),
        }
    }

    pub fn alias(name: impl Into<String>, args: Vec<TypeExpr>) -> TypeExpr {
        TypeExpr::Alias {
            name: name.into(),
            args,
        }
    }

    pub fn param(name: impl Into<String>) -> TypeExpr {
        TypeExpr::Param(name.into())
    }

    pub fn member(class: impl Into<String>, args: Vec<TypeExpr>, member: impl Into<String>) -> TypeExpr {
        TypeExpr::Member {
            class: class.into(),
            args,
            member: member.into(),
        }
    }

    pub fn pack_expansion(pattern: TypeExpr) -> TypeExpr {
        TypeExpr::PackExpansion(Box::new(pattern))
    }
}

/// A formal template parameter of an alias or class template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateParam {
    pub name: String,
    /// A trailing pack collects all remaining arguments.
    #[serde(default)]
    pub is_pack: bool,
}

impl TemplateParam {
    pub fn new(name: impl Into<String>) -> TemplateParam {
        TemplateParam {
            name: name.into(),
            is_pack: false,
        }
    }

    pub fn pack(name: impl Into<String>) -> TemplateParam {
        TemplateParam {
            name: name.into(),
            is_pack: true,
        }
    }
}

/// An alias template definition: `template <params> using Name = body;`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasDef {
    pub params: Vec<TemplateParam>,
    pub body: TypeExpr,
}

/// A class template with member type aliases: `Class<Args>::member`.
///
/// Only the innermost template's own parameters are modeled. Members of
/// nested class templates, and member bodies referencing an enclosing
/// template's parameters, are out of model and resolve to empty sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassTemplate {
    pub params: Vec<TemplateParam>,
    #[serde(default)]
    pub members: HashMap<String, TypeExpr>,
}

/// The alias-definition environment reachable from a type expression.
/// Read-only during resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AliasEnv {
    #[serde(default)]
    pub aliases: HashMap<String, AliasDef>,
    #[serde(default)]
    pub classes: HashMap<String, ClassTemplate>,
}

impl AliasEnv {
    pub fn new() -> AliasEnv {
        AliasEnv::default()
    }

    /// Define an alias template with non-pack parameters.
    pub fn define_alias(&mut self, name: impl Into<String>, params: &[&str], body: TypeExpr) {
        self.aliases.insert(
            name.into(),
            AliasDef {
                params: params.iter().map(|p| TemplateParam::new(*p)).collect(),
                body,
            },
        );
    }

    /// Define an alias template with explicit parameter declarations
    /// (needed for packs).
    pub fn define_alias_with(
        &mut self,
        name: impl Into<String>,
        params: Vec<TemplateParam>,
        body: TypeExpr,
    ) {
        self.aliases.insert(name.into(), AliasDef { params, body });
    }

    /// Define a class template and its member type aliases.
    pub fn define_class(
        &mut self,
        name: impl Into<String>,
        params: Vec<TemplateParam>,
        members: Vec<(&str, TypeExpr)>,
    ) {
        self.classes.insert(
            name.into(),
            ClassTemplate {
                params,
                members: members
                    .into_iter()
                    .map(|(m, body)| (m.to_string(), body))
                    .collect(),
            },
        );
    }

    pub fn alias(&self, name: &str) -> Option<&AliasDef> {
        self.aliases.get(name)
    }

    pub fn class(&self, name: &str) -> Option<&ClassTemplate> {
        self.classes.get(name)
    }
}

/// A resolve request as consumed from the front end: one type expression
/// plus the alias definitions reachable from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub environment: AliasEnv,
    #[serde(rename = "type")]
    pub type_expr: TypeExpr,
}
