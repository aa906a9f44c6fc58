//! Variant handles.
//!
//! A `Handle` is one instantiated variant: either a concrete handle (a tag
//! with an optional argument list) or a class wildcard over a family. Handles
//! are immutable after construction and cheap to clone; identity comparison
//! (`Handle::same_instance`) is a pointer check.

use std::fmt;
use std::sync::OnceLock;

use smallvec::SmallVec;
use varmatch_ir::{FamilyId, Name};

use crate::arg::Arg;
use crate::heap::Heap;

/// Argument storage; most variants carry only a handful of arguments.
type ArgList = SmallVec<[Arg; 4]>;

/// Where a variant was declared.
///
/// `family` is the family that declares the tag. `subtype` is set when the
/// variant is realized as a distinct payload sub-type, which descends from
/// `family` in the hierarchy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lineage {
    pub family: FamilyId,
    pub subtype: Option<FamilyId>,
}

impl Lineage {
    #[inline]
    pub const fn new(family: FamilyId) -> Self {
        Lineage {
            family,
            subtype: None,
        }
    }

    #[inline]
    pub const fn with_subtype(family: FamilyId, subtype: FamilyId) -> Self {
        Lineage {
            family,
            subtype: Some(subtype),
        }
    }

    /// The most specific identity in this lineage.
    #[inline]
    pub fn most_derived(&self) -> FamilyId {
        self.subtype.unwrap_or(self.family)
    }

    /// Whether `id` is the declaring family or the sub-type.
    #[inline]
    pub fn contains(&self, id: FamilyId) -> bool {
        self.family == id || self.subtype == Some(id)
    }
}

/// A concrete variant instance.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantInstance {
    lineage: Lineage,
    tag: Name,
    owner: FamilyId,
    args: Option<ArgList>,
    arg_wildcards: usize,
}

impl VariantInstance {
    #[inline]
    pub fn lineage(&self) -> Lineage {
        self.lineage
    }

    #[inline]
    pub fn tag(&self) -> Name {
        self.tag
    }

    /// The family the instance was constructed through.
    #[inline]
    pub fn owner(&self) -> FamilyId {
        self.owner
    }

    #[inline]
    pub fn args(&self) -> Option<&[Arg]> {
        self.args.as_deref()
    }

    #[inline]
    pub fn arg_wildcard_count(&self) -> usize {
        self.arg_wildcards
    }
}

/// The two kinds of handle.
#[derive(Clone, Debug, PartialEq)]
pub enum HandleShape {
    Concrete(VariantInstance),
    /// Matches every variant of the family and of its descendants.
    ClassWildcard(FamilyId),
}

struct HandleData {
    shape: HandleShape,
    /// Memoized rendering; handles are immutable so it never goes stale.
    description: OnceLock<String>,
}

/// An immutable variant instance.
#[derive(Clone)]
pub struct Handle(Heap<HandleData>);

impl Handle {
    /// Create a concrete handle.
    ///
    /// `args: None` means the variant was constructed without an argument
    /// list, which is distinct from an empty list.
    pub fn concrete(lineage: Lineage, tag: Name, owner: FamilyId, args: Option<Vec<Arg>>) -> Self {
        let args: Option<ArgList> = args.map(SmallVec::from_vec);
        let arg_wildcards = args
            .as_ref()
            .map_or(0, |a| a.iter().filter(|arg| arg.is_wildcard()).count());
        Self::from_shape(HandleShape::Concrete(VariantInstance {
            lineage,
            tag,
            owner,
            args,
            arg_wildcards,
        }))
    }

    /// Create a class wildcard over `family`.
    pub fn class_wildcard(family: FamilyId) -> Self {
        Self::from_shape(HandleShape::ClassWildcard(family))
    }

    /// The catch-all: a class wildcard over the universal root.
    pub fn catch_all() -> Self {
        Self::class_wildcard(FamilyId::ROOT)
    }

    fn from_shape(shape: HandleShape) -> Self {
        Handle(Heap::new(HandleData {
            shape,
            description: OnceLock::new(),
        }))
    }

    #[inline]
    pub fn shape(&self) -> &HandleShape {
        &self.0.shape
    }

    #[inline]
    pub fn as_concrete(&self) -> Option<&VariantInstance> {
        match &self.0.shape {
            HandleShape::Concrete(v) => Some(v),
            HandleShape::ClassWildcard(_) => None,
        }
    }

    /// True if both handles are the same allocation.
    #[inline]
    pub fn same_instance(a: &Handle, b: &Handle) -> bool {
        Heap::ptr_eq(&a.0, &b.0)
    }

    #[inline]
    pub fn tag(&self) -> Option<Name> {
        self.as_concrete().map(VariantInstance::tag)
    }

    #[inline]
    pub fn lineage(&self) -> Option<Lineage> {
        self.as_concrete().map(VariantInstance::lineage)
    }

    #[inline]
    pub fn owner(&self) -> Option<FamilyId> {
        self.as_concrete().map(VariantInstance::owner)
    }

    #[inline]
    pub fn args(&self) -> Option<&[Arg]> {
        self.as_concrete().and_then(VariantInstance::args)
    }

    /// Number of argument positions (zero without an argument list).
    #[inline]
    pub fn arg_count(&self) -> usize {
        self.args().map_or(0, <[Arg]>::len)
    }

    #[inline]
    pub fn arg_wildcard_count(&self) -> usize {
        self.as_concrete()
            .map_or(0, VariantInstance::arg_wildcard_count)
    }

    /// The family this handle wildcards over, if it is a class wildcard.
    #[inline]
    pub fn class_wildcard_family(&self) -> Option<FamilyId> {
        match self.0.shape {
            HandleShape::ClassWildcard(family) => Some(family),
            HandleShape::Concrete(_) => None,
        }
    }

    #[inline]
    pub fn is_class_wildcard(&self) -> bool {
        matches!(self.0.shape, HandleShape::ClassWildcard(_))
    }

    #[inline]
    pub fn is_catch_all(&self) -> bool {
        self.class_wildcard_family() == Some(FamilyId::ROOT)
    }

    /// The family membership checks run against: the declaring family of a
    /// concrete handle, or the target of a class wildcard.
    #[inline]
    pub fn declaring_family(&self) -> FamilyId {
        match &self.0.shape {
            HandleShape::Concrete(v) => v.lineage.family,
            HandleShape::ClassWildcard(family) => *family,
        }
    }

    /// The most specific family identity of this handle.
    #[inline]
    pub fn most_derived_family(&self) -> FamilyId {
        match &self.0.shape {
            HandleShape::Concrete(v) => v.lineage.most_derived(),
            HandleShape::ClassWildcard(family) => *family,
        }
    }

    /// Return the memoized description, computing it with `render` once.
    pub fn description_or_init(&self, render: impl FnOnce() -> String) -> &str {
        self.0.description.get_or_init(render)
    }
}

impl PartialEq for Handle {
    /// Structural equality; wildcard-aware comparison lives in the engine.
    fn eq(&self, other: &Self) -> bool {
        Handle::same_instance(self, other) || self.0.shape == other.0.shape
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.shape {
            HandleShape::Concrete(v) => {
                write!(f, "{:?}::{:?}", v.lineage.family, v.tag)?;
                if let Some(args) = &v.args {
                    write!(f, "{:?}", args.as_slice())?;
                }
                Ok(())
            }
            HandleShape::ClassWildcard(family) => write!(f, "{family:?}::_"),
        }
    }
}
