//! Engine errors.
//!
//! A dispatch that matches nothing is not an error: it returns `Ok(None)`.
//! Handles from unrelated families are simply not equivalent.

use varmatch_types::RegistryError;

/// Error raised by the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// An arm's selector cannot be classified. Fatal to the whole call: no
    /// handler runs.
    #[error("malformed pattern in arm {index}: {reason}")]
    MalformedPattern { index: usize, reason: MalformedReason },

    #[error("`{family}::{tag}` takes {expected} argument(s), got {got}")]
    ArityMismatch {
        family: String,
        tag: String,
        expected: usize,
        got: usize,
    },

    /// A full-wildcard form was requested for a variant declared without a
    /// fixed arity.
    #[error("`{family}::{tag}` has no declared arity to build a wildcard form from")]
    VariadicWildcard { family: String, tag: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Why a selector was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("selector must be a variant handle or a tag string, found {found}")]
    SelectorKind { found: &'static str },

    #[error("tag selector is empty")]
    EmptyTag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::MalformedPattern {
            index: 2,
            reason: MalformedReason::SelectorKind { found: "int" },
        };
        assert_eq!(
            err.to_string(),
            "malformed pattern in arm 2: selector must be a variant handle or a tag string, found int"
        );

        let err = EngineError::ArityMismatch {
            family: "Shape".to_string(),
            tag: "Rect".to_string(),
            expected: 2,
            got: 1,
        };
        assert_eq!(err.to_string(), "`Shape::Rect` takes 2 argument(s), got 1");
    }

    #[test]
    fn test_registry_errors_pass_through() {
        let err: EngineError = RegistryError::UnknownFamily { id: 9 }.into();
        assert_eq!(err.to_string(), "unknown family id 9");
    }
}
