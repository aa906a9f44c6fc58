//! Contracts: family-scoped matchers.

use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use varmatch::{Arg, FamilyId, Handle, MatchArm};

use crate::fixtures::world;

/// A foreign handle is ignored without running any arm, catch-all included.
#[test]
fn matcher_ignores_foreign_family() {
    let w = world();
    let calls = AtomicUsize::new(0);
    let counted = |_: &Handle| {
        calls.fetch_add(1, Ordering::SeqCst);
    };
    let matcher = w
        .engine
        .build_matcher(w.x, vec![MatchArm::new("_", counted)])
        .unwrap();
    let foreign = w.engine.variant(w.y, "Tag", vec![Arg::val(1)]).unwrap();
    assert_eq!(matcher.call(&foreign).unwrap(), None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(matcher.call(&w.pair(1, 1)).unwrap(), Some(()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// A root-scoped matcher accepts every family.
#[test]
fn matcher_root_scope() {
    let w = world();
    let matcher = w
        .engine
        .build_matcher(FamilyId::ROOT, vec![MatchArm::new("_", |_: &Handle| true)])
        .unwrap()
        .into_fn();
    assert_eq!(matcher(&w.pair(1, 1)).unwrap(), Some(true));
    assert_eq!(matcher(&w.at(0)).unwrap(), Some(true));
}
