//! Callable values.

use std::fmt;
use std::sync::Arc;

use super::Value;
use crate::error::{CurryError, UsageError};
use crate::placeholder::Argument;

/// The body of a native function: receives fully resolved arguments in order.
pub type NativeBody = Arc<dyn Fn(Vec<Value>) -> Result<Value, CurryError> + Send + Sync>;

/// Anything that can be applied to a list of arguments.
///
/// Implemented by curried callables, plain native functions, [`Function`]
/// handles and [`Value`] itself (which fails unless it holds a function).
pub trait Callable: Send + Sync {
    /// Display name used in error messages.
    fn name(&self) -> &str;

    /// Applies the callable to `arguments`.
    ///
    /// # Errors
    ///
    /// Returns a [`CurryError`] when the arguments are rejected or the
    /// underlying function fails.
    fn invoke(&self, arguments: Vec<Argument>) -> Result<Value, CurryError>;
}

/// A shared handle to a callable.
///
/// Two handles are equal iff they point at the same callable.
#[derive(Clone)]
pub struct Function(Arc<dyn Callable>);

impl Function {
    /// Wraps a callable.
    pub fn new<C: Callable + 'static>(callable: C) -> Self {
        Self(Arc::new(callable))
    }

    /// Wraps a plain Rust closure that takes resolved arguments.
    ///
    /// The resulting function is not curried and does not accept
    /// placeholders; it is meant for passing host functions (a square root,
    /// a formatter) into curried combinators.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typed_curry::prelude::*;
    ///
    /// let negate = Function::native("negate", |arguments| {
    ///     Ok(Value::from(-arguments[0].as_number().unwrap_or_default()))
    /// });
    /// assert_eq!(invoke!(negate, 3).unwrap(), Value::from(-3));
    /// ```
    pub fn native<F>(name: &str, body: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value, CurryError> + Send + Sync + 'static,
    {
        Self::new(NativeFunction::new(name, body))
    }

    /// Display name of the wrapped callable.
    pub fn name(&self) -> &str {
        self.0.name()
    }
}

impl Callable for Function {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn invoke(&self, arguments: Vec<Argument>) -> Result<Value, CurryError> {
        self.0.invoke(arguments)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Function").field(&self.name()).finish()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[Function {}]", self.name())
    }
}

/// An uncurried native function.
#[derive(Clone)]
pub struct NativeFunction {
    name: String,
    body: NativeBody,
}

impl NativeFunction {
    /// Creates a native function from a closure.
    pub fn new<F>(name: &str, body: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value, CurryError> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            body: Arc::new(body),
        }
    }
}

impl Callable for NativeFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, arguments: Vec<Argument>) -> Result<Value, CurryError> {
        let values = arguments
            .into_iter()
            .map(|argument| match argument {
                Argument::Value(value) => Ok(value),
                Argument::Placeholder => Err(UsageError::UnexpectedPlaceholder {
                    function: self.name.clone(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        (self.body)(values)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NativeFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Callable for Value {
    fn name(&self) -> &str {
        match self {
            Self::Function(function) => function.name(),
            _ => "value",
        }
    }

    fn invoke(&self, arguments: Vec<Argument>) -> Result<Value, CurryError> {
        match self {
            Self::Function(function) => function.invoke(arguments),
            other => Err(UsageError::NotCallable {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::__;
    use rstest::rstest;

    fn length() -> Function {
        Function::native("length", |arguments| {
            Ok(Value::from(
                arguments[0].as_array().map_or(0, <[Value]>::len),
            ))
        })
    }

    #[rstest]
    fn native_function_receives_values() {
        let result = length().invoke(vec![Argument::from(vec![1, 2, 3])]);

        assert_eq!(result, Ok(Value::from(3)));
    }

    #[rstest]
    fn native_function_rejects_placeholder() {
        let result = length().invoke(vec![Argument::from(__)]);

        assert_eq!(
            result,
            Err(CurryError::Usage(UsageError::UnexpectedPlaceholder {
                function: "length".to_string(),
            }))
        );
    }

    #[rstest]
    fn function_equality_is_identity() {
        let function = length();

        assert_eq!(function, function.clone());
        assert_ne!(function, length());
    }

    #[rstest]
    fn function_renders_name() {
        assert_eq!(length().to_string(), "[Function length]");
        assert_eq!(format!("{:?}", length()), "Function(\"length\")");
    }

    #[rstest]
    fn value_invokes_held_function() {
        let value = Value::from(length());

        assert_eq!(value.name(), "length");
        assert_eq!(
            value.invoke(vec![Argument::from(vec!["a"])]),
            Ok(Value::from(1))
        );
    }

    #[rstest]
    fn non_function_value_is_not_callable() {
        let result = Value::from(42).invoke(vec![Argument::from(1)]);

        assert_eq!(
            result,
            Err(CurryError::Usage(UsageError::NotCallable {
                value: "42".to_string(),
            }))
        );
    }
}
