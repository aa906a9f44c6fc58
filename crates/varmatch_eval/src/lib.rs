//! Varmatch Eval - equivalence and priority dispatch over variant handles.
//!
//! This crate provides:
//! - `Engine`: constructs handles and answers equivalence queries
//!   (`equivalent`, `same_variant`, `looks_like`, `same_args`)
//! - Priority dispatch of a subject handle over ordered `MatchArm`s
//! - `ScopedMatcher`: a dispatcher guarded by family membership
//! - `describe` and `coverage` reports
//!
//! # Dispatch Priority
//!
//! Arms are classified into five kinds. Exact patterns fire inline at their
//! position in the scan. After the scan, argument-wildcard patterns are tried
//! (fewest wildcards first), then tag patterns, then class wildcards, and
//! finally the first catch-all.

mod classify;
mod config;
mod coverage;
mod describe;
mod dispatch;
mod engine;
mod equivalence;
mod errors;
mod matcher;

#[cfg(test)]
mod test_fixtures;

pub use classify::{Pattern, PatternKind};
pub use config::EngineConfig;
pub use coverage::Coverage;
pub use dispatch::{Handler, MatchArm};
pub use engine::{Engine, EngineBuilder, EquivalenceFn};
pub use equivalence::Resemblance;
pub use errors::{EngineError, MalformedReason};
pub use matcher::ScopedMatcher;
