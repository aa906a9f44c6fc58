//! Engine configuration.

/// Behavior switches for an `Engine`.
///
/// Every switch defaults to on. Turning a memo off trades speed for a smaller
/// footprint; results are identical either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    /// Cache `(owner, tag) -> Lineage` resolutions in the engine.
    pub memoize_lineage: bool,
    /// Cache `describe` output on each handle.
    pub memoize_descriptions: bool,
    /// Reject constructions whose argument count differs from the declared
    /// arity.
    pub strict_arity: bool,
}

impl EngineConfig {
    pub const fn new() -> Self {
        EngineConfig {
            memoize_lineage: true,
            memoize_descriptions: true,
            strict_arity: true,
        }
    }

    /// Configuration with both memos off.
    pub const fn uncached() -> Self {
        EngineConfig {
            memoize_lineage: false,
            memoize_descriptions: false,
            strict_arity: true,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
