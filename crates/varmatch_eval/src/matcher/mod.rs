//! Family-scoped matchers.

use std::fmt;

use varmatch_ir::FamilyId;
use varmatch_types::RegistryError;
use varmatch_values::Handle;

use crate::dispatch::MatchArm;
use crate::engine::Engine;
use crate::errors::EngineError;

/// A reusable dispatcher that ignores handles outside its family.
///
/// A subject belongs to the family when its most specific family identity is
/// the family or a descendant of it. A matcher scoped to the root family
/// accepts every handle.
pub struct ScopedMatcher<'e, 'a, R> {
    engine: &'e Engine,
    family: FamilyId,
    arms: Vec<MatchArm<'a, R>>,
}

impl Engine {
    /// Build a matcher over `arms` scoped to `family`.
    ///
    /// Arms are validated here, so a matcher that builds never reports a
    /// malformed pattern.
    pub fn build_matcher<'a, R>(
        &self,
        family: FamilyId,
        arms: Vec<MatchArm<'a, R>>,
    ) -> Result<ScopedMatcher<'_, 'a, R>, EngineError> {
        if self.registry().family(family).is_none() {
            return Err(RegistryError::UnknownFamily { id: family.raw() }.into());
        }
        self.classify_arms(&arms)?;
        Ok(ScopedMatcher {
            engine: self,
            family,
            arms,
        })
    }
}

impl<'e, 'a, R> ScopedMatcher<'e, 'a, R> {
    pub fn family(&self) -> FamilyId {
        self.family
    }

    pub fn arms(&self) -> &[MatchArm<'a, R>] {
        &self.arms
    }

    /// Whether `subject` is in scope.
    pub fn accepts(&self, subject: &Handle) -> bool {
        self.engine
            .registry()
            .is_a(subject.most_derived_family(), self.family)
    }

    /// Dispatch `subject`, or return `None` without evaluating any arm when
    /// it is out of scope.
    pub fn call(&self, subject: &Handle) -> Result<Option<R>, EngineError> {
        if !self.accepts(subject) {
            tracing::trace!(
                family = self.engine.registry().family_name(self.family),
                "subject outside matcher scope"
            );
            return Ok(None);
        }
        self.engine.dispatch(subject, &self.arms)
    }

    /// Turn the matcher into a plain closure.
    pub fn into_fn(self) -> impl Fn(&Handle) -> Result<Option<R>, EngineError> + 'e
    where
        'a: 'e,
        R: 'e,
    {
        move |subject| self.call(subject)
    }
}

impl<R> fmt::Debug for ScopedMatcher<'_, '_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedMatcher")
            .field("family", &self.family)
            .field("arms", &self.arms)
            .finish_non_exhaustive()
    }
}
