//! The engine: handle construction over a frozen family registry.
//!
//! Equivalence, classification, dispatch and reporting are implemented as
//! further `impl Engine` blocks in their own modules.

mod builder;

pub use builder::EngineBuilder;

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use varmatch_ir::{FamilyId, Name, SharedInterner};
use varmatch_types::{LineageCache, RegistryError, SharedRegistry};
use varmatch_values::{Arg, Handle, Lineage};

use crate::config::EngineConfig;
use crate::errors::EngineError;

/// Custom equivalence registered for a family.
///
/// Overrides should be built on `Engine::looks_like` plus their own tail
/// logic, or defer to `Engine::default_equivalent`. Calling
/// `Engine::equivalent` on the same operands recurses forever.
pub type EquivalenceFn = Arc<dyn Fn(&Engine, &Handle, &Handle) -> bool + Send + Sync>;

/// Equivalence and dispatch engine.
///
/// Immutable after `EngineBuilder::build`, apart from the lineage memo, which
/// is a concurrent map. Share it across threads by reference.
pub struct Engine {
    registry: SharedRegistry,
    cache: LineageCache,
    config: EngineConfig,
    overrides: FxHashMap<FamilyId, EquivalenceFn>,
}

impl Engine {
    /// Engine with the default configuration and no overrides.
    pub fn new(registry: SharedRegistry) -> Self {
        EngineBuilder::new(registry).build()
    }

    pub fn builder(registry: SharedRegistry) -> EngineBuilder {
        EngineBuilder::new(registry)
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn interner(&self) -> &SharedInterner {
        self.registry.interner()
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn lineage_cache(&self) -> &LineageCache {
        &self.cache
    }

    /// Tag of a concrete handle as a string.
    pub fn tag_of(&self, handle: &Handle) -> Option<&'static str> {
        handle.tag().map(|tag| self.interner().lookup(tag))
    }

    pub(crate) fn override_for(&self, family: FamilyId) -> Option<&EquivalenceFn> {
        if self.overrides.is_empty() {
            return None;
        }
        self.registry
            .ancestors(family)
            .find_map(|id| self.overrides.get(&id))
    }

    // Construction

    /// Construct `owner::tag(args...)`.
    pub fn variant(&self, owner: FamilyId, tag: &str, args: Vec<Arg>) -> Result<Handle, EngineError> {
        let (name, lineage) = self.resolve(owner, tag)?;
        self.check_arity(owner, name, lineage, args.len())?;
        Ok(Handle::concrete(lineage, name, owner, Some(args)))
    }

    /// Construct `owner::tag` without an argument list.
    pub fn unit(&self, owner: FamilyId, tag: &str) -> Result<Handle, EngineError> {
        let (name, lineage) = self.resolve(owner, tag)?;
        self.check_arity(owner, name, lineage, 0)?;
        Ok(Handle::concrete(lineage, name, owner, None))
    }

    /// Construct `owner::tag(_, _, ...)` with every declared position a
    /// value-wildcard.
    pub fn variant_any(&self, owner: FamilyId, tag: &str) -> Result<Handle, EngineError> {
        let (name, lineage) = self.resolve(owner, tag)?;
        let Some(arity) = self.declared_arity(owner, name) else {
            return Err(EngineError::VariadicWildcard {
                family: self.registry.family_name(lineage.family).to_string(),
                tag: tag.to_string(),
            });
        };
        Ok(Handle::concrete(lineage, name, owner, Some(vec![Arg::Any; arity])))
    }

    /// A class wildcard matching every variant of `family` and its
    /// descendants.
    pub fn class_wildcard(&self, family: FamilyId) -> Result<Handle, EngineError> {
        if self.registry.family(family).is_none() {
            return Err(RegistryError::UnknownFamily { id: family.raw() }.into());
        }
        Ok(Handle::class_wildcard(family))
    }

    /// The catch-all: a class wildcard over the universal root.
    pub fn catch_all(&self) -> Handle {
        Handle::catch_all()
    }

    fn resolve(&self, owner: FamilyId, tag: &str) -> Result<(Name, Lineage), EngineError> {
        if self.registry.family(owner).is_none() {
            return Err(RegistryError::UnknownFamily { id: owner.raw() }.into());
        }
        // A tag that was never interned cannot have been declared.
        let name = self
            .interner()
            .get(tag)
            .ok_or_else(|| RegistryError::UnknownVariant {
                family: self.registry.family_name(owner).to_string(),
                tag: tag.to_string(),
            })?;
        let lineage = if self.config.memoize_lineage {
            self.cache.resolve(&*self.registry, owner, name)?
        } else {
            self.registry.resolve_lineage(owner, name)?
        };
        Ok((name, lineage))
    }

    fn declared_arity(&self, owner: FamilyId, tag: Name) -> Option<usize> {
        self.registry
            .find_variant(owner, tag)
            .and_then(|def| def.arity)
    }

    fn check_arity(
        &self,
        owner: FamilyId,
        tag: Name,
        lineage: Lineage,
        got: usize,
    ) -> Result<(), EngineError> {
        if !self.config.strict_arity {
            return Ok(());
        }
        match self.declared_arity(owner, tag) {
            Some(expected) if expected != got => Err(EngineError::ArityMismatch {
                family: self.registry.family_name(lineage.family).to_string(),
                tag: self.interner().lookup(tag).to_string(),
                expected,
                got,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("families", &self.registry.len())
            .field("config", &self.config)
            .field("overrides", &self.overrides.len())
            .field("cached_lineages", &self.cache.len())
            .finish()
    }
}
