//! Registry of declared families.
//!
//! The `FamilyRegistry` is the explicit hierarchy table the engine answers
//! lineage questions from. Every family has exactly one parent (the root has
//! none), so "is-a" is a walk up a parent chain.
//!
//! # Design
//!
//! - Families are stored densely, indexed by `FamilyId`
//! - Name index: O(1) family lookup by name
//! - Per-family variant index: O(1) tag lookup during lineage resolution
//! - Sub-typed variants get their own `FamilyId` whose parent is the
//!   declaring family, named `Family::Tag`

use std::ops::Deref;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use varmatch_ir::{FamilyId, Name, SharedInterner, CATCH_ALL_TAG};
use varmatch_values::Lineage;

use crate::errors::RegistryError;

/// Display name of the universal root family.
pub const ROOT_FAMILY_NAME: &str = "Any";

/// What a registry entry stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FamilyKind {
    /// The universal root.
    Root,
    /// A declared family.
    Family,
    /// The payload sub-type of one variant.
    Subtype { variant: Name },
}

/// Definition of one variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantDef {
    /// Variant tag.
    pub tag: Name,
    /// The family that declares this variant.
    pub family: FamilyId,
    /// Declared argument count, or `None` for an unchecked argument list.
    pub arity: Option<usize>,
    /// Payload sub-type, for sub-typed variants.
    pub subtype: Option<FamilyId>,
}

impl VariantDef {
    /// Lineage every instance of this variant carries.
    pub fn lineage(&self) -> Lineage {
        match self.subtype {
            Some(subtype) => Lineage::with_subtype(self.family, subtype),
            None => Lineage::new(self.family),
        }
    }
}

/// A registered family.
#[derive(Clone, Debug)]
pub struct FamilyEntry {
    name: Name,
    id: FamilyId,
    parent: Option<FamilyId>,
    kind: FamilyKind,
    /// Variants declared directly on this family, in declaration order.
    variants: Vec<VariantDef>,
    /// Tag -> position in `variants`.
    variant_index: FxHashMap<Name, usize>,
}

impl FamilyEntry {
    fn new(name: Name, id: FamilyId, parent: Option<FamilyId>, kind: FamilyKind) -> Self {
        Self {
            name,
            id,
            parent,
            kind,
            variants: Vec::new(),
            variant_index: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> Name {
        self.name
    }

    pub fn id(&self) -> FamilyId {
        self.id
    }

    pub fn parent(&self) -> Option<FamilyId> {
        self.parent
    }

    pub fn kind(&self) -> FamilyKind {
        self.kind
    }

    /// Variants declared directly on this family.
    pub fn variants(&self) -> &[VariantDef] {
        &self.variants
    }

    /// Look up a variant declared directly on this family.
    pub fn variant(&self, tag: Name) -> Option<&VariantDef> {
        self.variant_index
            .get(&tag)
            .and_then(|&idx| self.variants.get(idx))
    }
}

/// Registry of families, variants and sub-types.
pub struct FamilyRegistry {
    interner: SharedInterner,
    /// Entries indexed by `FamilyId`.
    families: Vec<FamilyEntry>,
    /// Family name -> id.
    by_name: FxHashMap<Name, FamilyId>,
}

impl FamilyRegistry {
    /// Create a registry holding only the universal root family.
    pub fn new(interner: SharedInterner) -> Self {
        let root_name = interner.intern(ROOT_FAMILY_NAME);
        let mut by_name = FxHashMap::default();
        by_name.insert(root_name, FamilyId::ROOT);
        Self {
            interner,
            families: vec![FamilyEntry::new(
                root_name,
                FamilyId::ROOT,
                None,
                FamilyKind::Root,
            )],
            by_name,
        }
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    // Declaration

    /// Declare a family directly under the root.
    pub fn declare_family(&mut self, name: &str) -> Result<FamilyId, RegistryError> {
        self.declare_family_extending(name, FamilyId::ROOT)
    }

    /// Declare a family that inherits every variant of `parent`.
    pub fn declare_family_extending(
        &mut self,
        name: &str,
        parent: FamilyId,
    ) -> Result<FamilyId, RegistryError> {
        self.entry(parent)?;
        let name = self.intern_name(name)?;
        self.insert_family(name, parent, FamilyKind::Family)
    }

    /// Declare a variant on `family`.
    ///
    /// The tag must not already be visible from `family` (declared on an
    /// ancestor) nor declared on one of its descendants.
    pub fn declare_variant(
        &mut self,
        family: FamilyId,
        tag: &str,
        arity: Option<usize>,
    ) -> Result<Name, RegistryError> {
        let tag = self.check_new_variant(family, tag)?;
        self.push_variant(VariantDef {
            tag,
            family,
            arity,
            subtype: None,
        });
        Ok(tag)
    }

    /// Declare a variant realized as its own payload sub-type.
    ///
    /// Returns the sub-type's id; its parent is `family`.
    pub fn declare_subtyped_variant(
        &mut self,
        family: FamilyId,
        tag: &str,
        arity: Option<usize>,
    ) -> Result<FamilyId, RegistryError> {
        let tag = self.check_new_variant(family, tag)?;
        let qualified = format!(
            "{}::{}",
            self.family_name(family),
            self.interner.lookup(tag)
        );
        let qualified = self.interner.try_intern(&qualified)?;
        let subtype = self.insert_family(qualified, family, FamilyKind::Subtype { variant: tag })?;
        self.push_variant(VariantDef {
            tag,
            family,
            arity,
            subtype: Some(subtype),
        });
        Ok(subtype)
    }

    fn insert_family(
        &mut self,
        name: Name,
        parent: FamilyId,
        kind: FamilyKind,
    ) -> Result<FamilyId, RegistryError> {
        if self.by_name.contains_key(&name) {
            return Err(RegistryError::DuplicateFamily {
                name: self.interner.lookup(name).to_string(),
            });
        }
        let id = next_family_id(self.families.len())?;
        self.families
            .push(FamilyEntry::new(name, id, Some(parent), kind));
        self.by_name.insert(name, id);
        tracing::debug!(
            family = self.interner.lookup(name),
            parent = self.family_name(parent),
            ?kind,
            "declared family"
        );
        Ok(id)
    }

    fn check_new_variant(&self, family: FamilyId, tag: &str) -> Result<Name, RegistryError> {
        self.entry(family)?;
        if tag == CATCH_ALL_TAG {
            return Err(RegistryError::ReservedTag {
                tag: tag.to_string(),
            });
        }
        let tag = self.intern_name(tag)?;
        let clash = self.families.iter().any(|other| {
            other.variant_index.contains_key(&tag)
                && (self.is_a(family, other.id) || self.is_a(other.id, family))
        });
        if clash {
            return Err(RegistryError::DuplicateVariant {
                family: self.family_name(family).to_string(),
                tag: self.interner.lookup(tag).to_string(),
            });
        }
        Ok(tag)
    }

    fn push_variant(&mut self, def: VariantDef) {
        if let Some(entry) = self.families.get_mut(def.family.index()) {
            entry.variant_index.insert(def.tag, entry.variants.len());
            entry.variants.push(def);
        }
        tracing::debug!(
            family = self.family_name(def.family),
            tag = self.interner.lookup(def.tag),
            arity = ?def.arity,
            subtyped = def.subtype.is_some(),
            "declared variant"
        );
    }

    fn intern_name(&self, name: &str) -> Result<Name, RegistryError> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(self.interner.try_intern(name)?)
    }

    // Queries

    /// Look up a family entry.
    pub fn family(&self, id: FamilyId) -> Option<&FamilyEntry> {
        self.families.get(id.index())
    }

    fn entry(&self, id: FamilyId) -> Result<&FamilyEntry, RegistryError> {
        self.family(id)
            .ok_or(RegistryError::UnknownFamily { id: id.raw() })
    }

    /// Look up a family by its declared name.
    pub fn family_by_name(&self, name: &str) -> Option<FamilyId> {
        self.interner
            .get(name)
            .and_then(|n| self.by_name.get(&n).copied())
    }

    /// Display name of a family (`?` for ids this registry never issued).
    pub fn family_name(&self, id: FamilyId) -> &'static str {
        self.family(id)
            .map_or("?", |entry| self.interner.lookup(entry.name))
    }

    pub fn parent(&self, id: FamilyId) -> Option<FamilyId> {
        self.family(id).and_then(FamilyEntry::parent)
    }

    /// Iterate `id` and its ancestors, ending at the root.
    pub fn ancestors(&self, id: FamilyId) -> Ancestors<'_> {
        Ancestors {
            registry: self,
            next: self.family(id).map(FamilyEntry::id),
        }
    }

    /// Inclusive "is-a": true if `ancestor` is `family` or one of its
    /// ancestors. The root is an ancestor of every registered family.
    pub fn is_a(&self, family: FamilyId, ancestor: FamilyId) -> bool {
        self.ancestors(family).any(|id| id == ancestor)
    }

    /// Find the definition of `tag` as seen from `owner`.
    pub fn find_variant(&self, owner: FamilyId, tag: Name) -> Option<&VariantDef> {
        self.ancestors(owner)
            .find_map(|id| self.family(id).and_then(|entry| entry.variant(tag)))
    }

    /// Resolve the lineage of `tag` constructed through `owner`.
    pub fn resolve_lineage(&self, owner: FamilyId, tag: Name) -> Result<Lineage, RegistryError> {
        self.entry(owner)?;
        self.find_variant(owner, tag)
            .map(VariantDef::lineage)
            .ok_or_else(|| RegistryError::UnknownVariant {
                family: self.family_name(owner).to_string(),
                tag: self.interner.lookup(tag).to_string(),
            })
    }

    /// Every tag visible from `family`, inherited ones first, each group in
    /// declaration order.
    pub fn variants_of(&self, family: FamilyId) -> Vec<Name> {
        let chain: Vec<FamilyId> = self.ancestors(family).collect();
        chain
            .iter()
            .rev()
            .filter_map(|&id| self.family(id))
            .flat_map(|entry| entry.variants.iter().map(|v| v.tag))
            .collect()
    }

    /// Number of registered families, including the root and sub-types.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Always false: the root is always registered.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Freeze the registry for sharing.
    pub fn freeze(self) -> SharedRegistry {
        SharedRegistry(Arc::new(self))
    }
}

/// The id of the family stored at index `len`.
fn next_family_id(len: usize) -> Result<FamilyId, RegistryError> {
    u32::try_from(len)
        .map(FamilyId::new)
        .map_err(|_| RegistryError::FamilyOverflow { count: len })
}

/// Iterator over a family and its ancestors.
pub struct Ancestors<'a> {
    registry: &'a FamilyRegistry,
    next: Option<FamilyId>,
}

impl Iterator for Ancestors<'_> {
    type Item = FamilyId;

    fn next(&mut self) -> Option<FamilyId> {
        let current = self.next?;
        self.next = self.registry.parent(current);
        Some(current)
    }
}

/// A frozen registry shared between engines and threads.
#[derive(Clone)]
pub struct SharedRegistry(Arc<FamilyRegistry>);

impl Deref for SharedRegistry {
    type Target = FamilyRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
