//! Pattern classification.
//!
//! A selector is either a variant handle or a bare tag string. Classification
//! is evaluated in this order, first match wins:
//!
//! 1. `"_"` or the root class wildcard: `CatchAll`
//! 2. any other string: `Tag`
//! 3. any other class wildcard: `InstanceWildcard`
//! 4. a concrete handle with value-wildcard arguments: `ArgWildcard`
//! 5. any other concrete handle: `Exact`

use varmatch_ir::{Name, CATCH_ALL_TAG};
use varmatch_values::{Handle, Value};

use crate::dispatch::MatchArm;
use crate::engine::Engine;
use crate::errors::{EngineError, MalformedReason};

/// A classified selector, borrowing the handle it tests against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pattern<'s> {
    CatchAll,
    /// Tag-level match. `None` when the tag string was never interned, so no
    /// declared variant carries it.
    Tag(Option<Name>),
    InstanceWildcard(&'s Handle),
    ArgWildcard { handle: &'s Handle, wildcards: usize },
    Exact(&'s Handle),
}

/// The kind of a `Pattern`, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    CatchAll,
    Tag,
    InstanceWildcard,
    ArgWildcard { wildcards: usize },
    Exact,
}

impl Pattern<'_> {
    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::CatchAll => PatternKind::CatchAll,
            Pattern::Tag(_) => PatternKind::Tag,
            Pattern::InstanceWildcard(_) => PatternKind::InstanceWildcard,
            Pattern::ArgWildcard { wildcards, .. } => PatternKind::ArgWildcard {
                wildcards: *wildcards,
            },
            Pattern::Exact(_) => PatternKind::Exact,
        }
    }
}

impl Engine {
    /// Classify one selector.
    pub fn classify<'s>(&self, selector: &'s Value) -> Result<Pattern<'s>, MalformedReason> {
        match selector {
            Value::Str(tag) if tag.as_str() == CATCH_ALL_TAG => Ok(Pattern::CatchAll),
            Value::Str(tag) if tag.is_empty() => Err(MalformedReason::EmptyTag),
            Value::Str(tag) => Ok(Pattern::Tag(self.interner().get(tag))),
            Value::Variant(handle) => Ok(classify_handle(handle)),
            other => Err(MalformedReason::SelectorKind {
                found: other.type_name(),
            }),
        }
    }

    /// Classify every arm, failing on the first malformed selector.
    pub(crate) fn classify_arms<'s, R>(
        &self,
        arms: &'s [MatchArm<'_, R>],
    ) -> Result<Vec<Pattern<'s>>, EngineError> {
        arms.iter()
            .enumerate()
            .map(|(index, arm)| {
                self.classify(arm.selector())
                    .map_err(|reason| EngineError::MalformedPattern { index, reason })
            })
            .collect()
    }
}

fn classify_handle(handle: &Handle) -> Pattern<'_> {
    if handle.is_catch_all() {
        Pattern::CatchAll
    } else if handle.is_class_wildcard() {
        Pattern::InstanceWildcard(handle)
    } else if handle.arg_wildcard_count() > 0 {
        Pattern::ArgWildcard {
            handle,
            wildcards: handle.arg_wildcard_count(),
        }
    } else {
        Pattern::Exact(handle)
    }
}
