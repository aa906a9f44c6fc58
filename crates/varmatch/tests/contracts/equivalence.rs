//! Contracts: equivalence.

use pretty_assertions::assert_eq;
use varmatch::{Arg, Resemblance};

use crate::fixtures::{world, SECONDS_PER_DAY};

/// Equivalence is reflexive through the identity fast path.
#[test]
fn equivalence_reflexive() {
    let w = world();
    let h = w.pair(1, 2);
    assert!(w.engine.equivalent(&h, &h));
}

/// Changing one argument breaks equivalence.
#[test]
fn equivalence_argument_sensitive() {
    let w = world();
    assert!(w.engine.equivalent(&w.pair(1, 2), &w.pair(1, 2)));
    assert!(!w.engine.equivalent(&w.pair(1, 2), &w.pair(1, 3)));
    assert!(!w.engine.equivalent(&w.pair(1, 2), &w.pair(0, 2)));
}

/// A full-wildcard form absorbs any arguments of its tag.
#[test]
fn equivalence_full_wildcard_absorbs() {
    let w = world();
    let any_pair = w.engine.variant_any(w.x, "Pair").unwrap();
    assert!(w.engine.equivalent(&w.pair(8, -3), &any_pair));
    assert!(w.engine.equivalent(&any_pair, &w.pair(8, -3)));
    let tag = w.x_of("Tag", vec![Arg::val(1)]);
    assert!(!w.engine.equivalent(&tag, &any_pair));
}

/// The catch-all is equivalent to every concrete handle of every family.
#[test]
fn equivalence_catch_all_universal() {
    let w = world();
    let catch_all = w.engine.catch_all();
    let y_tag = w.engine.variant(w.y, "Tag", vec![Arg::val(1)]).unwrap();
    for h in [w.pair(1, 2), y_tag, w.at(5)] {
        assert!(w.engine.equivalent(&h, &catch_all));
    }
}

/// Same tag in unrelated families: not equivalent, not an error.
#[test]
fn equivalence_unrelated_lineage_is_false() {
    let w = world();
    let x_tag = w.x_of("Tag", vec![Arg::val(1)]);
    let y_tag = w.engine.variant(w.y, "Tag", vec![Arg::val(1)]).unwrap();
    assert!(!w.engine.equivalent(&x_tag, &y_tag));
    assert!(!w.engine.equivalent(&y_tag, &x_tag));
}

/// Argument lengths are compared across both handles.
#[test]
fn equivalence_symmetric_length() {
    let w = world();
    let one = w.x_of("Bare", vec![Arg::Any]);
    let two = w.x_of("Bare", vec![Arg::val(1), Arg::val(2)]);
    assert_eq!(w.engine.looks_like(&one, &two), Resemblance::Undecided);
    assert!(!w.engine.equivalent(&one, &two));
    assert!(!w.engine.equivalent(&two, &one));
}

/// A custom equivalence replaces only the argument comparison.
#[test]
fn equivalence_custom_calendar_day() {
    let w = world();
    let morning = w.at(3 * SECONDS_PER_DAY + 100);
    let evening = w.at(3 * SECONDS_PER_DAY + 80_000);
    let next_day = w.at(4 * SECONDS_PER_DAY + 100);
    assert!(w.engine.equivalent(&morning, &evening));
    assert!(!w.engine.equivalent(&morning, &next_day));
    assert!(!w.engine.default_equivalent(&morning, &evening));
    assert!(w.engine.equivalent(&morning, &w.engine.variant_any(w.moment, "At").unwrap()));
    assert!(w.engine.is_any_of(&evening, &[next_day, morning]));
}

/// Tag queries.
#[test]
fn equivalence_is_variant() {
    let w = world();
    let h = w.pair(1, 2);
    assert!(w.engine.is_variant(&h, "Pair"));
    assert!(w.engine.is_variant_any(&h, &["Tag", "Pair"]));
    assert!(!w.engine.is_variant_any(&h, &["Tag", "Triple"]));
}

/// `describe` renders shape, not values.
#[test]
fn equivalence_describe_shape() {
    let w = world();
    let a = w.x_of("Pair", vec![Arg::val(1), Arg::val("a")]);
    let b = w.x_of("Pair", vec![Arg::val(2), Arg::val("b")]);
    let c = w.x_of("Pair", vec![Arg::Any, Arg::val("a")]);
    assert_eq!(w.engine.describe(&a), "X::Pair(int, string)");
    assert_eq!(w.engine.describe(&a), w.engine.describe(&b));
    assert_ne!(w.engine.describe(&a), w.engine.describe(&c));
    assert_eq!(w.engine.describe(&c), "X::Pair(_, string)");
    assert_eq!(w.engine.describe(&w.engine.catch_all()), "Any::_");
}
