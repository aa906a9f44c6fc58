//! Variant equivalence.
//!
//! `equivalent` decomposes into two steps:
//! - `looks_like`: variant identity plus wildcard short-circuits, which
//!   decides most comparisons without touching arguments
//! - `same_args`: positional argument comparison, consulted only when
//!   `looks_like` is `Undecided`
//!
//! Custom equivalences registered on the builder are meant to reuse
//! `looks_like` and replace only the argument tail.

use varmatch_ir::{FamilyId, Name};
use varmatch_values::{Arg, Handle, HandleShape, Lineage, Value};

use crate::engine::Engine;

/// Three-valued outcome of `Engine::looks_like`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resemblance {
    /// Equivalent without comparing arguments.
    Same,
    /// Different variants; arguments are irrelevant.
    Different,
    /// Same variant; the arguments decide.
    Undecided,
}

impl Resemblance {
    /// `Some` when the outcome is already decided.
    pub fn decided(self) -> Option<bool> {
        match self {
            Resemblance::Same => Some(true),
            Resemblance::Different => Some(false),
            Resemblance::Undecided => None,
        }
    }
}

impl Engine {
    /// Whether `a` and `b` denote the same variant, wildcards included.
    ///
    /// Handles from families that share no ancestry are never the same
    /// variant, even when their tags are spelled alike.
    pub fn same_variant(&self, a: &Handle, b: &Handle) -> bool {
        if Handle::same_instance(a, b) {
            return true;
        }
        match (a.shape(), b.shape()) {
            (HandleShape::ClassWildcard(target), _) => self.wildcard_covers(*target, b),
            (_, HandleShape::ClassWildcard(target)) => self.wildcard_covers(*target, a),
            (HandleShape::Concrete(x), HandleShape::Concrete(y)) => {
                x.tag() == y.tag() && self.lineages_compatible(x.lineage(), y.lineage())
            }
        }
    }

    /// Variant identity with wildcard short-circuits.
    pub fn looks_like(&self, a: &Handle, b: &Handle) -> Resemblance {
        if !self.same_variant(a, b) {
            return Resemblance::Different;
        }
        if a.is_class_wildcard() || b.is_class_wildcard() {
            return Resemblance::Same;
        }
        let n = a.arg_count();
        if n == b.arg_count() && (a.arg_wildcard_count() == n || b.arg_wildcard_count() == n) {
            return Resemblance::Same;
        }
        Resemblance::Undecided
    }

    /// Positional argument comparison.
    ///
    /// A missing argument list only matches another missing list. A
    /// value-wildcard on either side matches any value at that position.
    pub fn same_args(&self, a: &Handle, b: &Handle) -> bool {
        match (a.args(), b.args()) {
            (None, None) => true,
            (Some(xs), Some(ys)) => {
                xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| self.args_match(x, y))
            }
            _ => false,
        }
    }

    /// The built-in equivalence rule, ignoring any registered override.
    pub fn default_equivalent(&self, a: &Handle, b: &Handle) -> bool {
        self.looks_like(a, b)
            .decided()
            .unwrap_or_else(|| self.same_args(a, b))
    }

    /// General-purpose "is" predicate.
    ///
    /// Uses the override registered on the nearest family of the first
    /// concrete operand (its sub-type, declaring family, then ancestors),
    /// else `default_equivalent`.
    pub fn equivalent(&self, a: &Handle, b: &Handle) -> bool {
        if Handle::same_instance(a, b) {
            return true;
        }
        let subject = a.as_concrete().or_else(|| b.as_concrete());
        if let Some(custom) = subject.and_then(|v| self.override_for(v.lineage().most_derived())) {
            return custom(self, a, b);
        }
        self.default_equivalent(a, b)
    }

    /// Whether `handle` carries `tag`.
    ///
    /// The catch-all tag `_` matches every handle, and a class wildcard
    /// matches every tag.
    pub fn is_variant(&self, handle: &Handle, tag: &str) -> bool {
        // `_` is pre-interned as `Name::CATCH_ALL`.
        tag_matches(handle, self.interner().get(tag))
    }

    /// Whether `handle` carries any of `tags`.
    pub fn is_variant_any(&self, handle: &Handle, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.is_variant(handle, tag))
    }

    /// Whether `handle` is equivalent to any of `candidates`.
    pub fn is_any_of(&self, handle: &Handle, candidates: &[Handle]) -> bool {
        candidates.iter().any(|c| self.equivalent(handle, c))
    }

    fn args_match(&self, a: &Arg, b: &Arg) -> bool {
        match (a, b) {
            (Arg::Any, _) | (_, Arg::Any) => true,
            (Arg::Value(x), Arg::Value(y)) => self.values_equal(x, y),
        }
    }

    /// Exact equality for primitives and strings, structural for
    /// collections, and `equivalent` for nested variants.
    fn values_equal(&self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Variant(x), Value::Variant(y)) => self.equivalent(x, y),
            (Value::List(xs), Value::List(ys)) | (Value::Tuple(xs), Value::Tuple(ys)) => {
                xs.len() == ys.len() && xs.iter().zip(ys.iter()).all(|(x, y)| self.values_equal(x, y))
            }
            (Value::Map(xs), Value::Map(ys)) => {
                xs.len() == ys.len()
                    && xs
                        .iter()
                        .zip(ys.iter())
                        .all(|((k1, v1), (k2, v2))| k1 == k2 && self.values_equal(v1, v2))
            }
            _ => a == b,
        }
    }

    /// Whether a class wildcard over `target` selects `other`.
    fn wildcard_covers(&self, target: FamilyId, other: &Handle) -> bool {
        if target.is_root() {
            return true;
        }
        match other.shape() {
            HandleShape::Concrete(v) => self.wildcard_covers_lineage(target, v.lineage()),
            HandleShape::ClassWildcard(family) => {
                *family == target
                    || self.registry().is_a(*family, target)
                    || self.registry().is_a(target, *family)
            }
        }
    }

    /// Whether a class wildcard over `target` selects variants declared with
    /// `lineage`: the target is an ancestor or a descendant of the lineage.
    pub(crate) fn wildcard_covers_lineage(&self, target: FamilyId, lineage: Lineage) -> bool {
        target.is_root()
            || lineage.contains(target)
            || self.registry().is_a(lineage.most_derived(), target)
            || self.registry().is_a(target, lineage.family)
    }

    fn lineages_compatible(&self, a: Lineage, b: Lineage) -> bool {
        a.family == b.family
            || self.registry().is_a(a.family, b.family)
            || self.registry().is_a(b.family, a.family)
    }
}

/// Tag-level equality: `subject.tag == selector`, with `_` on either side
/// matching anything. A class-wildcard subject has no tag and renders as `_`.
pub(crate) fn tag_matches(subject: &Handle, selector: Option<Name>) -> bool {
    match subject.tag() {
        None => true,
        Some(tag) => {
            tag == Name::CATCH_ALL
                || selector.is_some_and(|sel| sel == tag || sel == Name::CATCH_ALL)
        }
    }
}
