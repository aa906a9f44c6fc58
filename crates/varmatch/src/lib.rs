//! Varmatch - variant values with wildcard-aware equivalence and priority
//! pattern dispatch.
//!
//! Declare families on a `FamilyRegistry`, freeze it, and hand it to an
//! `Engine`:
//!
//! ```
//! use varmatch::{Arg, Engine, FamilyRegistry, MatchArm, SharedInterner};
//!
//! let mut registry = FamilyRegistry::new(SharedInterner::new());
//! let shape = registry.declare_family("Shape")?;
//! registry.declare_variant(shape, "Circle", Some(1))?;
//! registry.declare_variant(shape, "Rect", Some(2))?;
//! let engine = Engine::new(registry.freeze());
//!
//! let unit = engine.variant(shape, "Circle", vec![Arg::val(1)])?;
//! let arms = vec![
//!     MatchArm::new("Circle", |_: &varmatch::Handle| "some circle"),
//!     MatchArm::new(unit.clone(), |_: &varmatch::Handle| "unit circle"),
//! ];
//! assert_eq!(engine.dispatch(&unit, &arms)?, Some("unit circle"));
//! assert_eq!(engine.describe(&unit), "Shape::Circle(int)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::sync::Once;

pub use varmatch_eval::{
    Coverage, Engine, EngineBuilder, EngineConfig, EngineError, EquivalenceFn, Handler,
    MalformedReason, MatchArm, Pattern, PatternKind, Resemblance, ScopedMatcher,
};
pub use varmatch_ir::{FamilyId, Name, SharedInterner, StringInterner, StringLookup, CATCH_ALL_TAG};
pub use varmatch_types::{
    FamilyEntry, FamilyKind, FamilyRegistry, LineageCache, LineageResolver, RegistryError,
    SharedRegistry, VariantDef, ROOT_FAMILY_NAME,
};
pub use varmatch_values::{Arg, Handle, HandleShape, Lineage, Value, VariantInstance};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber driven by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call repeatedly; only the
/// first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
            tracing::debug!("tracing initialized");
        }
    });
}
