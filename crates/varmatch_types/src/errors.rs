//! Errors raised while declaring families or resolving variants.

use varmatch_ir::InternError;

/// Error from the family registry.
///
/// Names are carried as resolved strings so errors outlive the registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("family `{name}` is already declared")]
    DuplicateFamily { name: String },

    #[error("variant `{family}::{tag}` is already declared")]
    DuplicateVariant { family: String, tag: String },

    #[error("`{tag}` is reserved for catch-all patterns and cannot name a variant")]
    ReservedTag { tag: String },

    #[error("`{name}` is not a valid family or variant name")]
    InvalidName { name: String },

    #[error("unknown family id {id}")]
    UnknownFamily { id: u32 },

    #[error("family `{family}` has no variant `{tag}`")]
    UnknownVariant { family: String, tag: String },

    #[error("registry exceeded capacity: {count} families, max is {}", u32::MAX)]
    FamilyOverflow { count: usize },

    #[error(transparent)]
    Intern(#[from] InternError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RegistryError::DuplicateVariant {
            family: "Shape".to_string(),
            tag: "Circle".to_string(),
        };
        assert_eq!(err.to_string(), "variant `Shape::Circle` is already declared");

        let err = RegistryError::UnknownVariant {
            family: "Shape".to_string(),
            tag: "Hexagon".to_string(),
        };
        assert_eq!(err.to_string(), "family `Shape` has no variant `Hexagon`");

        let err = RegistryError::ReservedTag {
            tag: "_".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "`_` is reserved for catch-all patterns and cannot name a variant"
        );
    }
}
