//! Shared families for unit tests.
//!
//! ```text
//! Any
//! ├── Shape        Circle(1) Rect(2) Origin(0) Poly(*) Square(1, sub-typed)
//! │   └── Shape::Square
//! ├── Event        Click(2) Key(1)
//! │   └── UiEvent  Hover(1)
//! └── Other        Circle(1)
//! ```

#![allow(clippy::unwrap_used, reason = "fixtures panic on setup failure")]

use varmatch_ir::{FamilyId, SharedInterner};
use varmatch_types::FamilyRegistry;
use varmatch_values::{Arg, Handle};

use crate::{Engine, EngineBuilder, EngineConfig};

pub(crate) struct Fixture {
    pub engine: Engine,
    pub shape: FamilyId,
    pub square: FamilyId,
    pub event: FamilyId,
    pub ui_event: FamilyId,
    pub other: FamilyId,
}

pub(crate) fn registry() -> FamilyRegistry {
    let mut reg = FamilyRegistry::new(SharedInterner::new());
    let shape = reg.declare_family("Shape").unwrap();
    reg.declare_variant(shape, "Circle", Some(1)).unwrap();
    reg.declare_variant(shape, "Rect", Some(2)).unwrap();
    reg.declare_variant(shape, "Origin", Some(0)).unwrap();
    reg.declare_variant(shape, "Poly", None).unwrap();
    reg.declare_subtyped_variant(shape, "Square", Some(1)).unwrap();

    let event = reg.declare_family("Event").unwrap();
    reg.declare_variant(event, "Click", Some(2)).unwrap();
    reg.declare_variant(event, "Key", Some(1)).unwrap();
    let ui_event = reg.declare_family_extending("UiEvent", event).unwrap();
    reg.declare_variant(ui_event, "Hover", Some(1)).unwrap();

    let other = reg.declare_family("Other").unwrap();
    reg.declare_variant(other, "Circle", Some(1)).unwrap();
    reg
}

pub(crate) fn fixture() -> Fixture {
    fixture_with(EngineConfig::default(), |b| b)
}

pub(crate) fn fixture_with(
    config: EngineConfig,
    customize: impl FnOnce(EngineBuilder) -> EngineBuilder,
) -> Fixture {
    let reg = registry();
    let id = |name: &str| reg.family_by_name(name).unwrap();
    let (shape, square, event, ui_event, other) = (
        id("Shape"),
        id("Shape::Square"),
        id("Event"),
        id("UiEvent"),
        id("Other"),
    );
    let engine = customize(EngineBuilder::new(reg.freeze()).config(config)).build();
    Fixture {
        engine,
        shape,
        square,
        event,
        ui_event,
        other,
    }
}

impl Fixture {
    pub fn shape_of(&self, tag: &str, args: Vec<Arg>) -> Handle {
        self.engine.variant(self.shape, tag, args).unwrap()
    }

    pub fn circle(&self, r: i64) -> Handle {
        self.shape_of("Circle", vec![Arg::val(r)])
    }

    pub fn rect(&self, w: i64, h: i64) -> Handle {
        self.shape_of("Rect", vec![Arg::val(w), Arg::val(h)])
    }

    pub fn click(&self, x: i64, y: i64) -> Handle {
        self.engine
            .variant(self.event, "Click", vec![Arg::val(x), Arg::val(y)])
            .unwrap()
    }
}
