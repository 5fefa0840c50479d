//! The `invoke!` macro for applying callables.

/// Applies a callable to a list of arguments.
///
/// Each argument is converted with [`Argument::from`](crate::placeholder::Argument),
/// so plain Rust values, [`Value`](crate::value::Value)s, curried callables
/// and the [`__`](crate::placeholder::__) placeholder can be mixed freely.
/// The callable may be a [`Curried`](crate::curry::Curried), a
/// [`Function`](crate::value::Function) or a [`Value`](crate::value::Value)
/// holding a function.
///
/// The callable is used through method-call syntax, so references and
/// smart pointers to callables work as well.
///
/// Expands to an expression of type `Result<Value, CurryError>`.
///
/// # Examples
///
/// ```
/// use typed_curry::prelude::*;
///
/// let concat = define_typed(
///     "concat",
///     [TypeDescriptor::string(), TypeDescriptor::string(), TypeDescriptor::string()],
///     |arguments| {
///         Ok(Value::from(format!(
///             "{}{}",
///             arguments[0].as_str().unwrap_or_default(),
///             arguments[1].as_str().unwrap_or_default()
///         )))
///     },
/// )
/// .unwrap();
///
/// assert_eq!(invoke!(concat, "foo", "bar").unwrap(), Value::from("foobar"));
///
/// let exclaim = invoke!(concat, __, "!").unwrap();
/// assert_eq!(invoke!(exclaim, "hey").unwrap(), Value::from("hey!"));
/// ```
#[macro_export]
macro_rules! invoke {
    ($callable:expr $(, $argument:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::value::Callable as _;
        ($callable).invoke(::std::vec![$($crate::placeholder::Argument::from($argument)),*])
    }};
}
