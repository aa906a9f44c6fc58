//! Contracts: one engine shared across threads.

use rayon::prelude::*;
use varmatch::{Arg, Handle, MatchArm};

use crate::fixtures::world;

/// Concurrent construction, equivalence and dispatch agree with the
/// sequential results.
#[test]
fn parallel_shared_engine() {
    let w = world();
    let arms = vec![
        MatchArm::new(w.x_of("Pair", vec![Arg::val(0), Arg::Any]), |_: &Handle| 0),
        MatchArm::new("Pair", |h: &Handle| {
            h.args()
                .and_then(|a| a.first())
                .and_then(Arg::as_value)
                .and_then(varmatch::Value::as_int)
                .unwrap_or(-1)
        }),
    ];

    let results: Vec<i64> = (0..1_000_i64)
        .into_par_iter()
        .map(|i| {
            let subject = w.pair(i % 10, i);
            assert!(w.engine.equivalent(&subject, &w.pair(i % 10, i)));
            w.engine.dispatch(&subject, &arms).unwrap().unwrap()
        })
        .collect();

    for (i, got) in (0..1_000_i64).zip(results) {
        assert_eq!(got, i % 10);
    }
    // Every construction resolved the same key.
    assert_eq!(w.engine.lineage_cache().len(), 1);
}

/// Descriptions memoized on a shared handle are computed once and agree.
#[test]
fn parallel_shared_description() {
    let w = world();
    let handle = w.pair(1, 2);
    let rendered: Vec<String> = (0..64)
        .into_par_iter()
        .map(|_| w.engine.describe(&handle).into_owned())
        .collect();
    assert!(rendered.iter().all(|s| s == "X::Pair(int, int)"));
}
