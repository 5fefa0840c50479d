//! The dynamic value universe curried functions operate on.
//!
//! [`Value`] is an immutable, cheaply clonable, thread-safe value. Compound
//! values share their contents through [`Arc`], so cloning a value never
//! copies its elements and a value captured by a partial application can be
//! read from any thread.
//!
//! Values from outside the built-in universe (an optional-value container,
//! for instance) plug in through the [`Foreign`] trait, which reports the
//! value's type tag and the operations it supports.

mod function;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub use function::{Callable, Function, NativeBody, NativeFunction};

use crate::curry::Curried;

/// Extension point for values defined outside this crate.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use typed_curry::types::tag_of;
/// use typed_curry::value::{Foreign, Value};
///
/// struct Nothing;
///
/// impl Foreign for Nothing {
///     fn type_tag(&self) -> &str {
///         "Maybe"
///     }
///
///     fn supports(&self, operation: &str) -> bool {
///         matches!(operation, "map" | "chain")
///     }
///
///     fn render(&self) -> String {
///         "Nothing".to_string()
///     }
/// }
///
/// let nothing = Value::Foreign(Arc::new(Nothing));
/// assert_eq!(tag_of(&nothing), "Maybe");
/// ```
pub trait Foreign: Send + Sync {
    /// The canonical type tag of this value.
    fn type_tag(&self) -> &str;

    /// Whether the value exposes the named operation (`"map"`, `"chain"`,
    /// `"concat"` ...). Used by capability checks.
    fn supports(&self, operation: &str) -> bool {
        let _ = operation;
        false
    }

    /// Human-readable rendering used in error messages.
    fn render(&self) -> String;
}

/// A dynamically typed, immutable value.
#[derive(Clone, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double-precision number.
    Number(f64),
    /// An immutable string.
    String(Arc<str>),
    /// An immutable array.
    Array(Arc<[Value]>),
    /// An immutable map from keys to values.
    Object(Arc<BTreeMap<String, Value>>),
    /// A callable value.
    Function(Function),
    /// A value from outside the built-in universe.
    Foreign(Arc<dyn Foreign>),
}

impl Value {
    /// Creates an array value.
    pub fn array<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Array(values.into_iter().map(Into::into).collect())
    }

    /// Returns `true` for [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean, if this is one.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// Returns the number, if this is one.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the entries, if this is an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the function, if this is one.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the foreign value, if this is one.
    pub const fn as_foreign(&self) -> Option<&Arc<dyn Foreign>> {
        match self {
            Self::Foreign(foreign) => Some(foreign),
            _ => None,
        }
    }

    fn fmt_nested(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(string) => write!(formatter, "{:?}", &**string),
            other => write!(formatter, "{other}"),
        }
    }
}

fn fmt_number(number: f64, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    if number.is_nan() {
        formatter.write_str("NaN")
    } else if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number == 0.0 {
        formatter.write_str("0")
    } else {
        write!(formatter, "{number}")
    }
}

/// Renders the value the way error messages show it.
///
/// Top-level strings are rendered raw; strings nested in arrays and objects
/// are quoted.
impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Boolean(boolean) => write!(formatter, "{boolean}"),
            Self::Number(number) => fmt_number(*number, formatter),
            Self::String(string) => formatter.write_str(string),
            Self::Array(elements) => {
                formatter.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    element.fmt_nested(formatter)?;
                }
                formatter.write_str("]")
            }
            Self::Object(entries) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: ")?;
                    value.fmt_nested(formatter)?;
                }
                formatter.write_str("}")
            }
            Self::Function(function) => write!(formatter, "{function}"),
            Self::Foreign(foreign) => formatter.write_str(&foreign.render()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("Null"),
            Self::Boolean(boolean) => formatter.debug_tuple("Boolean").field(boolean).finish(),
            Self::Number(number) => formatter.debug_tuple("Number").field(number).finish(),
            Self::String(string) => formatter.debug_tuple("String").field(&&**string).finish(),
            Self::Array(elements) => formatter.debug_list().entries(elements.iter()).finish(),
            Self::Object(entries) => formatter.debug_map().entries(entries.iter()).finish(),
            Self::Function(function) => write!(formatter, "{function:?}"),
            Self::Foreign(foreign) => write!(formatter, "Foreign({})", foreign.type_tag()),
        }
    }
}

/// Structural equality; functions and foreign values compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left == right,
            (Self::Foreign(left), Self::Foreign(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Boolean(boolean)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<u64> for Value {
    fn from(number: u64) -> Self {
        Self::Number(number as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<usize> for Value {
    fn from(number: usize) -> Self {
        Self::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::String(Arc::from(string))
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Self::String(Arc::from(string))
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::array(values)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(entries: BTreeMap<String, Self>) -> Self {
        Self::Object(Arc::new(entries))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Curried> for Value {
    fn from(curried: Curried) -> Self {
        Self::Function(Function::new(curried))
    }
}

impl From<&Curried> for Value {
    fn from(curried: &Curried) -> Self {
        Self::from(curried.clone())
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iterator: I) -> Self {
        Self::Array(iterator.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Just(Value);

    impl Foreign for Just {
        fn type_tag(&self) -> &str {
            "Maybe"
        }

        fn render(&self) -> String {
            format!("Just({})", self.0)
        }
    }

    #[rstest]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "true")]
    #[case(Value::from(4), "4")]
    #[case(Value::from(2.5), "2.5")]
    #[case(Value::from(-0.0), "0")]
    #[case(Value::from(f64::NAN), "NaN")]
    #[case(Value::from(f64::NEG_INFINITY), "-Infinity")]
    #[case(Value::from("foo"), "foo")]
    #[case(Value::from(vec![1, 2, 3]), "[1, 2, 3]")]
    #[case(Value::from(vec!["a", "b"]), "[\"a\", \"b\"]")]
    #[case(Value::from(Vec::<Value>::new()), "[]")]
    fn display_renders_value(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn display_renders_object_and_foreign() {
        let mut entries = BTreeMap::new();
        entries.insert("name".to_string(), Value::from("x"));
        entries.insert("size".to_string(), Value::from(1));

        assert_eq!(Value::from(entries).to_string(), "{name: \"x\", size: 1}");
        assert_eq!(
            Value::Foreign(Arc::new(Just(Value::from(1)))).to_string(),
            "Just(1)"
        );
    }

    #[rstest]
    fn equality_is_structural_for_data() {
        assert_eq!(Value::from(vec![1, 2]), Value::array([1, 2]));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::Null, Value::from(0));
        assert_eq!(Value::from(None::<i32>), Value::Null);
    }

    #[rstest]
    fn equality_is_identity_for_foreign() {
        let foreign: Arc<dyn Foreign> = Arc::new(Just(Value::Null));
        let same = Value::Foreign(Arc::clone(&foreign));
        let other = Value::Foreign(Arc::new(Just(Value::Null)));

        assert_eq!(Value::Foreign(foreign), same);
        assert_ne!(same, other);
    }

    #[rstest]
    fn accessors_return_contents() {
        assert_eq!(Value::from(3).as_number(), Some(3.0));
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(vec![1]).as_array(), Some(&[Value::from(1)][..]));
        assert!(Value::from(1).as_str().is_none());
        assert!(Value::Null.is_null());
    }

    #[rstest]
    fn collects_into_array() {
        let value: Value = (1..=3).map(Value::from).collect();

        assert_eq!(value, Value::from(vec![1, 2, 3]));
    }
}
