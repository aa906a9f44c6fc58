//! Argument slots and the value-wildcard sentinel.

use std::fmt;

use crate::value::Value;

/// One positional constructor argument.
///
/// The wildcard is a distinct enum case rather than a reserved value, so it
/// can only appear in an argument list and never compares equal to a real
/// argument.
#[derive(Clone, PartialEq)]
pub enum Arg {
    /// Value-wildcard: this position matches any value.
    Any,
    /// A concrete argument value.
    Value(Value),
}

impl Arg {
    /// Wrap anything convertible into a `Value`.
    #[inline]
    pub fn val(v: impl Into<Value>) -> Self {
        Arg::Value(v.into())
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Arg::Any)
    }

    #[inline]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Arg::Any => None,
            Arg::Value(v) => Some(v),
        }
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Value(v)
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Any => write!(f, "_"),
            Arg::Value(v) => write!(f, "{v:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_never_equals_a_value() {
        assert!(Arg::Any.is_wildcard());
        assert_ne!(Arg::Any, Arg::val(0));
        assert_ne!(Arg::Any, Arg::val(""));
        assert_ne!(Arg::Any, Arg::Value(Value::Void));
    }

    #[test]
    fn test_as_value() {
        assert_eq!(Arg::Any.as_value(), None);
        assert_eq!(Arg::val(5).as_value(), Some(&Value::int(5)));
    }

    #[test]
    fn test_debug_renders_wildcard_as_underscore() {
        assert_eq!(format!("{:?}", vec![Arg::Any, Arg::val(1)]), "[_, Int(1)]");
    }
}
