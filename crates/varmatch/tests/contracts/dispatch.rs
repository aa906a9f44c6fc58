//! Contracts: dispatch priority.

use pretty_assertions::assert_eq;
use varmatch::{Arg, EngineError, Handle, MalformedReason, MatchArm, Value};

use crate::fixtures::world;

fn h(name: &'static str) -> impl Fn(&Handle) -> &'static str + Send + Sync {
    move |_| name
}

/// An exact pattern beats a tag pattern listed before it.
#[test]
fn dispatch_exact_beats_tag() {
    let w = world();
    let arms = vec![
        MatchArm::new("Tag", h("h1")),
        MatchArm::new(w.x_of("Tag", vec![Arg::val(1)]), h("h2")),
    ];
    let subject = w.x_of("Tag", vec![Arg::val(1)]);
    assert_eq!(w.engine.dispatch(&subject, &arms).unwrap(), Some("h2"));
}

/// Fewer argument wildcards win regardless of order.
#[test]
fn dispatch_fewer_wildcards_win() {
    let w = world();
    let arms = vec![
        MatchArm::new(w.x_of("Pair", vec![Arg::Any, Arg::Any]), h("hA")),
        MatchArm::new(w.x_of("Pair", vec![Arg::val(5), Arg::Any]), h("hB")),
    ];
    assert_eq!(w.engine.dispatch(&w.pair(5, 7), &arms).unwrap(), Some("hB"));
}

/// Three-wildcard, two-wildcard and one-wildcard forms order by count.
#[test]
fn dispatch_wildcard_ladder() {
    let w = world();
    let triple = |a: Arg, b: Arg, c: Arg| w.x_of("Triple", vec![a, b, c]);
    let arms = vec![
        MatchArm::new(triple(Arg::Any, Arg::Any, Arg::Any), h("three")),
        MatchArm::new(triple(Arg::val(1), Arg::Any, Arg::Any), h("two")),
        MatchArm::new(triple(Arg::val(1), Arg::val(2), Arg::Any), h("one")),
    ];
    let subject = |a, b, c| triple(Arg::val(a), Arg::val(b), Arg::val(c));
    assert_eq!(w.engine.dispatch(&subject(1, 2, 3), &arms).unwrap(), Some("one"));
    assert_eq!(w.engine.dispatch(&subject(1, 9, 3), &arms).unwrap(), Some("two"));
    assert_eq!(w.engine.dispatch(&subject(0, 2, 3), &arms).unwrap(), Some("three"));
}

/// Full order: exact, argument wildcards, tags, class wildcards, catch-all.
#[test]
fn dispatch_priority_tiers() {
    let w = world();
    let subject = w.pair(1, 2);
    let tiers = vec![
        MatchArm::new("_", h("catch-all")),
        MatchArm::new(w.engine.class_wildcard(w.x).unwrap(), h("class")),
        MatchArm::new("Pair", h("tag")),
        MatchArm::new(w.x_of("Pair", vec![Arg::Any, Arg::val(2)]), h("wild")),
        MatchArm::new(w.pair(1, 2), h("exact")),
    ];
    let expected = ["catch-all", "class", "tag", "wild", "exact"];
    for n in 1..=tiers.len() {
        assert_eq!(
            w.engine.dispatch(&subject, &tiers[..n]).unwrap(),
            Some(expected[n - 1])
        );
    }
}

/// No match is a normal outcome.
#[test]
fn dispatch_none_when_unmatched() {
    let w = world();
    let arms = vec![
        MatchArm::new("Triple", h("triple")),
        MatchArm::new(w.pair(9, 9), h("other pair")),
        MatchArm::new(w.engine.class_wildcard(w.y).unwrap(), h("y")),
    ];
    assert_eq!(w.engine.dispatch(&w.pair(1, 2), &arms).unwrap(), None);
}

/// One malformed arm fails the whole call before any handler runs.
#[test]
fn dispatch_malformed_is_fatal() {
    let w = world();
    let arms = vec![
        MatchArm::new(w.pair(1, 2), h("exact")),
        MatchArm::new(Value::float(1.0), h("bad")),
    ];
    assert_eq!(
        w.engine.dispatch(&w.pair(1, 2), &arms),
        Err(EngineError::MalformedPattern {
            index: 1,
            reason: MalformedReason::SelectorKind { found: "float" }
        })
    );
}

/// Coverage reports the variants a set of arms can miss.
#[test]
fn dispatch_coverage_report() {
    let w = world();
    let arms = vec![
        MatchArm::new("Tag", h("tag")),
        MatchArm::new(w.engine.variant_any(w.x, "Pair").unwrap(), h("pair")),
    ];
    let report = w.engine.coverage(w.x, &arms).unwrap();
    assert_eq!(report.uncovered, vec!["Triple".to_string(), "Bare".to_string()]);
    assert!(!report.is_exhaustive());
}
