//! Error types for curried function application.
//!
//! Every invocation of a curried callable returns `Result<Value, CurryError>`.
//! [`CurryError`] is the union of three failure kinds:
//!
//! - [`ValidationError`]: a supplied argument has the wrong run-time type
//! - [`UsageError`]: the combinator itself was called incorrectly
//! - [`FunctionError`]: the wrapped native function rejected its input
//!
//! The first two are detected by the curry engine before the native function
//! runs. The third is produced by the native function and is passed through
//! to the caller unchanged.
//!
//! # Examples
//!
//! ```rust
//! use typed_curry::error::ValidationError;
//!
//! let error = ValidationError::new("add", "Number", "first", "foo");
//! assert_eq!(
//!     error.to_string(),
//!     "‘add’ requires a value of type Number as its first argument; received foo"
//! );
//! ```

use thiserror::Error;

/// A supplied argument did not match the type declared for its slot.
///
/// The message is fully determined by the four fields, so test suites can
/// assert on the exact text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("‘{function}’ requires a value of type {expected} as its {position} argument; received {value}")]
pub struct ValidationError {
    /// Display name of the function being applied.
    pub function: String,
    /// Name of the expected type (tag or capability name).
    pub expected: String,
    /// Ordinal label of the offending slot (`"first"`, `"second"`, ...).
    pub position: String,
    /// Rendering of the received value.
    pub value: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`.
    #[must_use]
    pub fn new(function: &str, expected: &str, position: &str, value: &str) -> Self {
        Self {
            function: function.to_string(),
            expected: expected.to_string(),
            position: position.to_string(),
            value: value.to_string(),
        }
    }
}

/// Structural misuse of a curried callable, independent of argument types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UsageError {
    /// The callable was invoked with an empty argument list.
    #[error("‘{function}’ applied to no arguments")]
    NoArguments {
        /// Display name of the function.
        function: String,
    },

    /// More arguments were supplied than there are open slots.
    #[error("‘{function}’ applied to {given} arguments but only {open} remain open")]
    TooManyArguments {
        /// Display name of the function.
        function: String,
        /// Number of slots still open before this call.
        open: usize,
        /// Number of arguments supplied.
        given: usize,
    },

    /// A non-function value was applied to arguments.
    #[error("{value} is not a function")]
    NotCallable {
        /// Rendering of the value.
        value: String,
    },

    /// A placeholder was passed to a function that does not support them.
    #[error("‘{function}’ does not accept placeholders")]
    UnexpectedPlaceholder {
        /// Display name of the function.
        function: String,
    },

    /// A signature must declare at least one argument type and a return type.
    #[error("‘{function}’ declares {descriptors} type(s); at least one argument type and a return type are required")]
    InvalidSignature {
        /// Display name of the function.
        function: String,
        /// Number of descriptors supplied.
        descriptors: usize,
    },
}

/// A failure raised by a native function body.
///
/// The curry engine never constructs this error; it only forwards it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct FunctionError {
    /// Error message.
    pub message: String,
}

impl FunctionError {
    /// Creates a new `FunctionError`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Any failure produced by applying a curried callable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurryError {
    /// An argument failed its type check.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The combinator was misused.
    #[error(transparent)]
    Usage(#[from] UsageError),
    /// The native function failed.
    #[error(transparent)]
    Function(#[from] FunctionError),
}

impl CurryError {
    /// Returns `true` if this is a [`ValidationError`].
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` if this is a [`UsageError`].
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
