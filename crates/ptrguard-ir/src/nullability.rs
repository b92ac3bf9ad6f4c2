//! Nullability annotation values, one per pointer level.

use serde::{Deserialize, Serialize};

/// Nullability of one pointer level in a function signature.
///
/// `Unspecified` is both the default for unannotated pointers and the
/// conservative fallback verdict when evidence conflicts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Nullability {
    /// No annotation written, or evidence is inconclusive.
    #[default]
    Unspecified,
    /// The pointer must never be null.
    NonNull,
    /// The pointer may legitimately be null.
    Nullable,
}

impl Nullability {
    /// True for a value that asserts something (`NonNull` or `Nullable`).
    pub fn is_concrete(self) -> bool {
        !matches!(self, Nullability::Unspecified)
    }

    /// Merge two observations. `Unspecified` yields to a concrete value;
    /// two disagreeing concrete values have no merge (`None`).
    pub fn merge(self, other: Nullability) -> Option<Nullability> {
        match (self, other) {
            (a, b) if a == b => Some(a),
            (Nullability::Unspecified, x) | (x, Nullability::Unspecified) => Some(x),
            _ => None,
        }
    }
}

impl std::fmt::Display for Nullability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unspecified => write!(f, "unspecified"),
            Self::NonNull => write!(f, "nonnull"),
            Self::Nullable => write!(f, "nullable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_same() {
        assert_eq!(
            Nullability::NonNull.merge(Nullability::NonNull),
            Some(Nullability::NonNull)
        );
        assert_eq!(
            Nullability::Nullable.merge(Nullability::Nullable),
            Some(Nullability::Nullable)
        );
    }

    #[test]
    fn test_merge_with_unspecified() {
        assert_eq!(
            Nullability::Unspecified.merge(Nullability::Nullable),
            Some(Nullability::Nullable)
        );
        assert_eq!(
            Nullability::NonNull.merge(Nullability::Unspecified),
            Some(Nullability::NonNull)
        );
    }

    #[test]
    fn test_merge_conflict() {
        assert_eq!(Nullability::NonNull.merge(Nullability::Nullable), None);
        assert_eq!(Nullability::Nullable.merge(Nullability::NonNull), None);
    }

    #[test]
    fn test_default_is_unspecified() {
        assert_eq!(Nullability::default(), Nullability::Unspecified);
        assert!(!Nullability::default().is_concrete());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Nullability::NonNull).unwrap(),
            "\"nonnull\""
        );
        assert_eq!(
            serde_json::from_str::<Nullability>("\"nullable\"").unwrap(),
            Nullability::Nullable
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Nullability::Unspecified.to_string(), "unspecified");
        assert_eq!(Nullability::NonNull.to_string(), "nonnull");
        assert_eq!(Nullability::Nullable.to_string(), "nullable");
    }
}
