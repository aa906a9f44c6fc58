//! Lineage resolution and its memo.
//!
//! The engine never walks the hierarchy table directly when constructing a
//! handle; it asks a `LineageResolver`, optionally through a `LineageCache`.

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use varmatch_ir::{FamilyId, Name};
use varmatch_values::Lineage;

use crate::errors::RegistryError;
use crate::registry::FamilyRegistry;

/// Lineage and "is-a" queries over a family hierarchy.
pub trait LineageResolver {
    /// Resolve where `tag`, constructed through `owner`, was declared.
    fn resolve_lineage(&self, owner: FamilyId, tag: Name) -> Result<Lineage, RegistryError>;

    /// Inclusive ancestor query: is `family` the same as, or a descendant
    /// of, `ancestor`?
    fn is_a(&self, family: FamilyId, ancestor: FamilyId) -> bool;
}

impl LineageResolver for FamilyRegistry {
    fn resolve_lineage(&self, owner: FamilyId, tag: Name) -> Result<Lineage, RegistryError> {
        FamilyRegistry::resolve_lineage(self, owner, tag)
    }

    fn is_a(&self, family: FamilyId, ancestor: FamilyId) -> bool {
        FamilyRegistry::is_a(self, family, ancestor)
    }
}

/// Memo of `(owner, tag) -> Lineage`.
///
/// Concurrent writers may race on the same key; they always insert the same
/// value, so the last write wins harmlessly. Failed resolutions are not
/// cached.
pub struct LineageCache {
    entries: DashMap<(FamilyId, Name), Lineage, FxBuildHasher>,
}

impl LineageCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Resolve through the cache, consulting `resolver` on a miss.
    pub fn resolve<R: LineageResolver + ?Sized>(
        &self,
        resolver: &R,
        owner: FamilyId,
        tag: Name,
    ) -> Result<Lineage, RegistryError> {
        if let Some(hit) = self.entries.get(&(owner, tag)) {
            tracing::trace!(?owner, ?tag, "lineage cache hit");
            return Ok(*hit);
        }
        let lineage = resolver.resolve_lineage(owner, tag)?;
        tracing::trace!(?owner, ?tag, ?lineage, "lineage cache miss");
        self.entries.insert((owner, tag), lineage);
        Ok(lineage)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for LineageCache {
    fn default() -> Self {
        Self::new()
    }
}
