//! Varmatch Values - the data model consumed by the equivalence engine.
//!
//! This crate provides:
//! - `Value`: constructor argument payloads (primitives, strings, collections,
//!   nested variant handles)
//! - `Arg`: one argument slot, either a concrete `Value` or the value-wildcard
//!   sentinel `Arg::Any`
//! - `Handle`: an immutable, reference-counted variant instance (concrete or
//!   class wildcard)
//! - `Lineage`: the declaring family of a variant plus its payload sub-type
//!
//! # Heap Enforcement
//!
//! All shared allocations go through `Heap<T>`, whose constructor is private
//! to this crate. Handles are therefore only created through the factories
//! on `Handle`, and cloning one never copies its arguments.

mod arg;
mod handle;
mod heap;
mod value;

pub use arg::Arg;
pub use handle::{Handle, HandleShape, Lineage, VariantInstance};
pub use heap::Heap;
pub use value::Value;

pub use varmatch_ir::{FamilyId, Name};
