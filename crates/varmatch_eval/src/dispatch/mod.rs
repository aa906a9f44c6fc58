//! Priority dispatch.
//!
//! One pass over the arms in order, then three sweeps over buckets filled
//! during the pass:
//!
//! 1. Pass: exact patterns are tested inline and fire at their position;
//!    everything else is bucketed
//! 2. Argument-wildcard patterns, fewest wildcards first (stable)
//! 3. Tag patterns, in order
//! 4. Class-wildcard patterns, in order
//! 5. The first catch-all
//!
//! Every arm is classified before any handler runs, so a malformed arm
//! aborts the call with no side effects.

use std::fmt;

use varmatch_ir::Name;
use varmatch_values::{Handle, Value};

use crate::classify::Pattern;
use crate::engine::Engine;
use crate::equivalence::tag_matches;
use crate::errors::EngineError;

/// Boxed arm handler.
pub type Handler<'a, R> = Box<dyn Fn(&Handle) -> R + Send + Sync + 'a>;

/// One `(selector, handler)` pair.
pub struct MatchArm<'a, R> {
    selector: Value,
    handler: Handler<'a, R>,
}

impl<'a, R> MatchArm<'a, R> {
    /// Build an arm from a handle or tag selector.
    ///
    /// Selectors of any other kind are accepted here and rejected when the
    /// arm is dispatched.
    pub fn new<F>(selector: impl Into<Value>, handler: F) -> Self
    where
        F: Fn(&Handle) -> R + Send + Sync + 'a,
    {
        MatchArm {
            selector: selector.into(),
            handler: Box::new(handler),
        }
    }

    pub fn selector(&self) -> &Value {
        &self.selector
    }

    /// Run the handler on `subject`.
    pub fn call(&self, subject: &Handle) -> R {
        (self.handler)(subject)
    }
}

impl<R> fmt::Debug for MatchArm<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchArm")
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Select the highest-priority arm matching `subject` and return its
    /// handler's result, or `None` when nothing matches.
    #[tracing::instrument(level = "debug", skip_all, fields(arms = arms.len()))]
    pub fn dispatch<R>(
        &self,
        subject: &Handle,
        arms: &[MatchArm<'_, R>],
    ) -> Result<Option<R>, EngineError> {
        let patterns = self.classify_arms(arms)?;

        let mut arg_wildcards: Vec<(usize, &Handle, Candidate<'_, '_, R>)> = Vec::new();
        let mut tags: Vec<(Option<Name>, Candidate<'_, '_, R>)> = Vec::new();
        let mut instances: Vec<(&Handle, Candidate<'_, '_, R>)> = Vec::new();
        let mut catch_all: Option<Candidate<'_, '_, R>> = None;

        for (index, (arm, pattern)) in arms.iter().zip(patterns).enumerate() {
            match pattern {
                Pattern::Exact(selector) => {
                    if self.equivalent(subject, selector) {
                        tracing::trace!(index, "exact pattern matched");
                        return Ok(Some(arm.call(subject)));
                    }
                }
                Pattern::ArgWildcard { handle, wildcards } => {
                    arg_wildcards.push((wildcards, handle, (index, arm)));
                }
                Pattern::Tag(name) => tags.push((name, (index, arm))),
                Pattern::InstanceWildcard(handle) => instances.push((handle, (index, arm))),
                Pattern::CatchAll => {
                    catch_all.get_or_insert((index, arm));
                }
            }
        }

        // Stable: ties keep their original order.
        arg_wildcards.sort_by_key(|&(wildcards, _, _)| wildcards);
        let hit = arg_wildcards
            .iter()
            .find(|(_, selector, _)| self.equivalent(subject, selector))
            .map(|&(_, _, candidate)| (candidate, "argument-wildcard"))
            .or_else(|| {
                tags.iter()
                    .find(|(name, _)| tag_matches(subject, *name))
                    .map(|&(_, candidate)| (candidate, "tag"))
            })
            .or_else(|| {
                instances
                    .iter()
                    .find(|(selector, _)| self.equivalent(subject, selector))
                    .map(|&(_, candidate)| (candidate, "class-wildcard"))
            })
            .or_else(|| catch_all.map(|candidate| (candidate, "catch-all")));

        Ok(hit.map(|((index, arm), kind)| {
            tracing::trace!(index, kind, "pattern matched");
            arm.call(subject)
        }))
    }
}

/// A bucketed arm and its position in the arm list.
type Candidate<'s, 'a, R> = (usize, &'s MatchArm<'a, R>);
