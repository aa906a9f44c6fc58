//! Varmatch Types - the family hierarchy behind variant identity.
//!
//! This crate provides:
//! - `FamilyRegistry`: an explicit hierarchy table of families, their
//!   variants and the payload sub-types some variants are realized as
//! - `LineageResolver`: the seam the engine resolves lineage and "is-a"
//!   queries through
//! - `LineageCache`: a lock-free memo of `(owner, tag) -> Lineage`
//!
//! # Lifecycle
//!
//! Families are declared up front on a mutable `FamilyRegistry`, which is
//! then frozen into a `SharedRegistry`. Every query after that point is a
//! read-only table lookup, so the registry is shared across threads without
//! locks.

mod errors;
mod lineage;
mod registry;

pub use errors::RegistryError;
pub use lineage::{LineageCache, LineageResolver};
pub use registry::{
    Ancestors, FamilyEntry, FamilyKind, FamilyRegistry, SharedRegistry, VariantDef, ROOT_FAMILY_NAME,
};

pub use varmatch_values::Lineage;
