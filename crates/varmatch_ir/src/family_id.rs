//! Family identity tokens.

use std::fmt;

/// Stable identity of a declared family (or of a variant's payload sub-type).
///
/// Ids are dense indices handed out by the family registry in declaration
/// order. `FamilyId::ROOT` is the universal family every other family
/// descends from; a class wildcard over it is the catch-all.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FamilyId(u32);

impl FamilyId {
    /// The universal root family.
    pub const ROOT: FamilyId = FamilyId(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        FamilyId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "FamilyId(root)")
        } else {
            write!(f, "FamilyId({})", self.0)
        }
    }
}
