//! Coverage of a family's variants by a set of arms.
//!
//! A variant is covered when some arm selects every instance of it: a tag
//! pattern, a full-wildcard form, an exact pattern on a variant declared
//! without arguments, or a class wildcard over a related family. Exact and
//! partially wildcarded patterns on variants with arguments cover only some
//! instances and do not count.

use rustc_hash::FxHashSet;
use varmatch_ir::{FamilyId, Name};
use varmatch_types::{RegistryError, VariantDef};
use varmatch_values::Handle;

use crate::classify::Pattern;
use crate::dispatch::MatchArm;
use crate::engine::Engine;
use crate::errors::EngineError;

/// Which variants of a family a set of arms leaves unhandled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Tags no arm fully covers, in declaration order (inherited first).
    pub uncovered: Vec<String>,
    /// Some arm selects every subject of the family: a catch-all, or a class
    /// wildcard over the family or one of its ancestors.
    pub catch_all: bool,
}

impl Coverage {
    pub fn is_exhaustive(&self) -> bool {
        self.catch_all || self.uncovered.is_empty()
    }
}

impl Engine {
    /// Report which variants visible from `family` no arm fully covers.
    #[tracing::instrument(level = "debug", skip_all, fields(family = ?family, arms = arms.len()))]
    pub fn coverage<R>(
        &self,
        family: FamilyId,
        arms: &[MatchArm<'_, R>],
    ) -> Result<Coverage, EngineError> {
        if self.registry().family(family).is_none() {
            return Err(RegistryError::UnknownFamily { id: family.raw() }.into());
        }
        let patterns = self.classify_arms(arms)?;

        let mut catch_all = false;
        let mut tags: FxHashSet<Name> = FxHashSet::default();
        let mut wildcards: Vec<FamilyId> = Vec::new();
        for pattern in patterns {
            match pattern {
                Pattern::CatchAll => catch_all = true,
                Pattern::InstanceWildcard(handle) => {
                    if let Some(target) = handle.class_wildcard_family() {
                        if self.registry().is_a(family, target) {
                            catch_all = true;
                        } else {
                            wildcards.push(target);
                        }
                    }
                }
                Pattern::Tag(Some(name)) => {
                    tags.insert(name);
                }
                Pattern::Tag(None) => {}
                Pattern::ArgWildcard { handle, .. } | Pattern::Exact(handle) => {
                    if let Some(tag) = self.covered_tag(family, handle) {
                        tags.insert(tag);
                    }
                }
            }
        }

        let uncovered = if catch_all {
            Vec::new()
        } else {
            self.registry()
                .variants_of(family)
                .into_iter()
                .filter(|tag| !tags.contains(tag))
                .filter(|&tag| {
                    let lineage = self
                        .registry()
                        .find_variant(family, tag)
                        .map(VariantDef::lineage);
                    !lineage.is_some_and(|l| {
                        wildcards
                            .iter()
                            .any(|&target| self.wildcard_covers_lineage(target, l))
                    })
                })
                .map(|tag| self.interner().lookup(tag).to_string())
                .collect()
        };
        tracing::debug!(uncovered = uncovered.len(), catch_all, "coverage computed");
        Ok(Coverage {
            uncovered,
            catch_all,
        })
    }

    /// The tag a concrete selector covers completely, if any.
    ///
    /// A selector without an argument list only matches instances without
    /// one, so it is total only for variants declared with no arguments.
    fn covered_tag(&self, family: FamilyId, handle: &Handle) -> Option<Name> {
        let v = handle.as_concrete()?;
        let visible = self.registry().is_a(family, v.lineage().family);
        let total = match v.args() {
            None => self
                .registry()
                .find_variant(v.lineage().family, v.tag())
                .is_some_and(|def| def.arity == Some(0)),
            Some(args) => args.len() == v.arg_wildcard_count(),
        };
        (visible && total).then_some(v.tag())
    }
}
