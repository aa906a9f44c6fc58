//! `EngineBuilder` for creating `Engine` instances with various configurations.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use varmatch_ir::FamilyId;
use varmatch_types::{LineageCache, SharedRegistry};
use varmatch_values::Handle;

use super::{Engine, EquivalenceFn};
use crate::config::EngineConfig;

/// Builder for `Engine`.
///
/// The registry is required; everything else has a default:
/// - `EngineConfig::default()` (all memos and arity checks on)
/// - no equivalence overrides
pub struct EngineBuilder {
    registry: SharedRegistry,
    config: EngineConfig,
    overrides: FxHashMap<FamilyId, EquivalenceFn>,
}

impl EngineBuilder {
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            registry,
            config: EngineConfig::default(),
            overrides: FxHashMap::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn memoize_lineage(mut self, on: bool) -> Self {
        self.config.memoize_lineage = on;
        self
    }

    #[must_use]
    pub fn memoize_descriptions(mut self, on: bool) -> Self {
        self.config.memoize_descriptions = on;
        self
    }

    #[must_use]
    pub fn strict_arity(mut self, on: bool) -> Self {
        self.config.strict_arity = on;
        self
    }

    /// Register a custom equivalence for `family` and its descendants.
    ///
    /// A later registration for the same family replaces the earlier one.
    /// Overrides on ids the registry never issued are never consulted.
    #[must_use]
    pub fn equivalence<F>(mut self, family: FamilyId, f: F) -> Self
    where
        F: Fn(&Engine, &Handle, &Handle) -> bool + Send + Sync + 'static,
    {
        self.overrides.insert(family, Arc::new(f));
        self
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build(self) -> Engine {
        tracing::debug!(
            families = self.registry.len(),
            config = ?self.config,
            overrides = self.overrides.len(),
            "engine built"
        );
        Engine {
            registry: self.registry,
            cache: LineageCache::new(),
            config: self.config,
            overrides: self.overrides,
        }
    }
}
