//! Varmatch IR - identity tokens shared by every varmatch crate.
//!
//! This crate provides:
//! - `Name`: a compact interned identifier for family names and variant tags
//! - `StringInterner` / `SharedInterner`: thread-safe string interning
//! - `FamilyId`: the stable identity token of a declared family
//!
//! Everything here is `Copy` and cheap to compare, so the equivalence engine
//! never touches string contents on its hot path.

mod family_id;
mod interner;
mod name;

pub use family_id::FamilyId;
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;

/// The literal tag that selects every variant in a match arm, and the glyph
/// used to render wildcard positions.
pub const CATCH_ALL_TAG: &str = "_";
