//! Families shared by the contract and property tests.
//!
//! - `X`: `Tag(1)`, `Pair(2)`, `Triple(3)`, `Bare(*)`
//! - `Y`: unrelated to `X`, also declares `Tag(1)`
//! - `Moment`: `At(1)` in seconds, compared by calendar day

#![allow(dead_code, reason = "shared between test crates")]

use varmatch::{Arg, Engine, FamilyId, FamilyRegistry, Handle, SharedInterner};

pub const SECONDS_PER_DAY: i64 = 86_400;

pub struct World {
    pub engine: Engine,
    pub x: FamilyId,
    pub y: FamilyId,
    pub moment: FamilyId,
}

pub fn world() -> World {
    let mut reg = FamilyRegistry::new(SharedInterner::new());
    let x = reg.declare_family("X").unwrap();
    reg.declare_variant(x, "Tag", Some(1)).unwrap();
    reg.declare_variant(x, "Pair", Some(2)).unwrap();
    reg.declare_variant(x, "Triple", Some(3)).unwrap();
    reg.declare_variant(x, "Bare", None).unwrap();
    let y = reg.declare_family("Y").unwrap();
    reg.declare_variant(y, "Tag", Some(1)).unwrap();
    let moment = reg.declare_family("Moment").unwrap();
    reg.declare_variant(moment, "At", Some(1)).unwrap();

    let engine = Engine::builder(reg.freeze())
        .equivalence(moment, |engine, a, b| {
            engine.looks_like(a, b).decided().unwrap_or_else(|| day(a) == day(b))
        })
        .build();
    World {
        engine,
        x,
        y,
        moment,
    }
}

fn day(handle: &Handle) -> Option<i64> {
    let seconds = handle.args()?.first()?.as_value()?.as_int()?;
    Some(seconds.div_euclid(SECONDS_PER_DAY))
}

impl World {
    pub fn x_of(&self, tag: &str, args: Vec<Arg>) -> Handle {
        self.engine.variant(self.x, tag, args).unwrap()
    }

    pub fn pair(&self, a: i64, b: i64) -> Handle {
        self.x_of("Pair", vec![Arg::val(a), Arg::val(b)])
    }

    pub fn at(&self, seconds: i64) -> Handle {
        self.engine
            .variant(self.moment, "At", vec![Arg::val(seconds)])
            .unwrap()
    }
}
