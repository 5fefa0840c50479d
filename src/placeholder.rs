//! The placeholder sentinel and the argument type that carries it.
//!
//! A placeholder passed in an argument position leaves the corresponding
//! slot open for a later call:
//!
//! ```rust
//! use typed_curry::prelude::*;
//!
//! let subtract = define_typed(
//!     "subtract",
//!     vec![TypeDescriptor::number(), TypeDescriptor::number(), TypeDescriptor::number()],
//!     |arguments| Ok(Value::from(arguments[0].as_number().unwrap_or_default() - arguments[1].as_number().unwrap_or_default())),
//! )
//! .unwrap();
//!
//! let minus_one = invoke!(subtract, __, 1).unwrap();
//! assert_eq!(invoke!(minus_one, 10).unwrap(), Value::from(9));
//! ```
//!
//! The placeholder never becomes a [`Value`]: it only exists as the
//! [`Argument::Placeholder`] variant, so no domain value (null, zero, the
//! empty string) can be mistaken for it.

use crate::curry::Curried;
use crate::value::{Function, Value};

/// Marker type for an argument slot that is deliberately left open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Placeholder;

/// The placeholder constant.
///
/// Named `__` (double underscore) because a single `_` is not a valid
/// expression.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

/// Returns the placeholder singleton.
#[inline]
pub const fn define_placeholder() -> Placeholder {
    __
}

/// One positional argument of an invocation: either a value or a placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    /// Leave the matching slot open.
    Placeholder,
    /// Fill the matching slot with this value.
    Value(Value),
}

impl Argument {
    /// Returns the carried value, or `None` for a placeholder.
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Placeholder => None,
            Self::Value(value) => Some(value),
        }
    }
}

/// Returns `true` iff `argument` is the placeholder.
#[inline]
pub const fn is_placeholder(argument: &Argument) -> bool {
    matches!(argument, Argument::Placeholder)
}

impl From<Placeholder> for Argument {
    fn from(_: Placeholder) -> Self {
        Self::Placeholder
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&Value> for Argument {
    fn from(value: &Value) -> Self {
        Self::Value(value.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Argument {
    fn from(values: Vec<T>) -> Self {
        Self::Value(Value::from(values))
    }
}

macro_rules! argument_from_value {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for Argument {
                fn from(source: $source) -> Self {
                    Self::Value(Value::from(source))
                }
            }
        )*
    };
}

argument_from_value!(
    bool, f64, f32, i32, i64, u32, u64, usize, &str, String, Function, Curried, &Curried,
);
