//! Type-shape rendering of handles.
//!
//! `describe` shows the shape of a handle, not its values:
//! - concrete: `Family::TAG(int, string)`, with `_` for value-wildcards and
//!   the family name for nested variants
//! - no argument list: `Family::TAG`
//! - class wildcard: `Family::_` (the catch-all renders as `Any::_`)

use std::borrow::Cow;

use varmatch_ir::CATCH_ALL_TAG;
use varmatch_values::{Arg, Handle, HandleShape, Value};

use crate::engine::Engine;

impl Engine {
    /// Render the type shape of `handle`.
    ///
    /// Memoized on the handle when descriptions are memoized; handles never
    /// change, so the cached string never goes stale.
    pub fn describe<'h>(&self, handle: &'h Handle) -> Cow<'h, str> {
        if self.config().memoize_descriptions {
            Cow::Borrowed(handle.description_or_init(|| self.render(handle)))
        } else {
            Cow::Owned(self.render(handle))
        }
    }

    fn render(&self, handle: &Handle) -> String {
        match handle.shape() {
            HandleShape::ClassWildcard(family) => {
                format!("{}::{CATCH_ALL_TAG}", self.registry().family_name(*family))
            }
            HandleShape::Concrete(v) => {
                let mut out = format!(
                    "{}::{}",
                    self.registry().family_name(v.lineage().family),
                    self.interner().lookup(v.tag())
                );
                if let Some(args) = v.args() {
                    out.push('(');
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        out.push_str(self.arg_shape(arg));
                    }
                    out.push(')');
                }
                out
            }
        }
    }

    fn arg_shape(&self, arg: &Arg) -> &'static str {
        match arg {
            Arg::Any => CATCH_ALL_TAG,
            Arg::Value(Value::Variant(nested)) => {
                self.registry().family_name(nested.declaring_family())
            }
            Arg::Value(value) => value.type_name(),
        }
    }
}
