//! The curry engine.
//!
//! This module turns an N-ary native function into a curried callable that
//! can be applied to any number of arguments from 1 to N, in any order, with
//! each supplied argument checked against a declared type.
//!
//! # Overview
//!
//! - [`define_typed`]: define a curried function under the default config
//! - [`Curry`]: define curried functions under an explicit [`CurryConfig`]
//! - [`Signature`]: name, argument types, return type and native body
//! - [`Curried`]: a signature plus the slots filled so far
//! - [`invoke!`](crate::invoke): apply a callable to arguments
//!
//! # Slot Assignment
//!
//! A curried callable of arity N holds N slots, each open or filled. On
//! every invocation the i-th argument is assigned to the i-th currently open
//! slot, left to right; a placeholder leaves its slot open:
//!
//! ```text
//! f(a, b, c)        slots: [a, b, c]   -> result
//! f(a)              slots: [a, _, _]   -> curried
//! f(__, b)          slots: [_, b, _]   -> curried
//! f(__, b)(a, c)    slots: [a, b, c]   -> result
//! ```
//!
//! # Laws
//!
//! - **Saturation**: `f(a)(b)(c) == f(a, b)(c) == f(a, b, c)`
//! - **Placeholder reordering**: `g(__, y)(x) == g(x, y) == g(x)(y)`
//! - **Reuse**: applying a partial application never changes it

mod curried;
mod invoke_macro;
mod signature;

use std::sync::Arc;

pub use curried::{Curried, Slot};
pub use signature::Signature;

use crate::config::CurryConfig;
use crate::error::{CurryError, UsageError};
use crate::types::TypeDescriptor;
use crate::value::Value;

/// Defines curried functions under a fixed configuration.
///
/// # Examples
///
/// ```rust
/// use typed_curry::prelude::*;
///
/// let unchecked = Curry::new(CurryConfig::unchecked());
/// let first = unchecked
///     .define(
///         "first",
///         [TypeDescriptor::array(), TypeDescriptor::any()],
///         |arguments| Ok(arguments[0].as_array().and_then(|xs| xs.first()).cloned().unwrap_or_default()),
///     )
///     .unwrap();
///
/// // No type check: the body sees the string and returns null.
/// assert_eq!(invoke!(first, "not an array").unwrap(), Value::Null);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Curry {
    config: CurryConfig,
}

impl Curry {
    /// Creates a definer using `config`.
    #[must_use]
    pub const fn new(config: CurryConfig) -> Self {
        Self { config }
    }

    /// The configuration new signatures capture.
    pub const fn config(&self) -> CurryConfig {
        self.config
    }

    /// Defines a curried function.
    ///
    /// `types` lists one descriptor per argument followed by the return
    /// descriptor; the return descriptor is informational only.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::InvalidSignature`] when `types` has fewer than
    /// two elements.
    pub fn define<I, F>(&self, name: &str, types: I, body: F) -> Result<Curried, UsageError>
    where
        I: IntoIterator<Item = TypeDescriptor>,
        F: Fn(Vec<Value>) -> Result<Value, CurryError> + Send + Sync + 'static,
    {
        let signature = Signature::new(name, types, Arc::new(body), self.config)?;
        tracing::trace!(%signature, "defined curried function");
        Ok(Curried::new(signature))
    }
}

/// Defines a curried function under the default configuration.
///
/// # Errors
///
/// Returns [`UsageError::InvalidSignature`] when `types` has fewer than two
/// elements.
///
/// # Examples
///
/// ```rust
/// use typed_curry::prelude::*;
///
/// let to_upper = define_typed(
///     "toUpper",
///     [TypeDescriptor::string(), TypeDescriptor::string()],
///     |arguments| Ok(Value::from(arguments[0].as_str().unwrap_or_default().to_uppercase())),
/// )
/// .unwrap();
///
/// assert_eq!(invoke!(to_upper, "foo").unwrap(), Value::from("FOO"));
/// assert_eq!(
///     invoke!(to_upper, 1).unwrap_err().to_string(),
///     "‘toUpper’ requires a value of type String as its first argument; received 1"
/// );
/// ```
pub fn define_typed<I, F>(name: &str, types: I, body: F) -> Result<Curried, UsageError>
where
    I: IntoIterator<Item = TypeDescriptor>,
    F: Fn(Vec<Value>) -> Result<Value, CurryError> + Send + Sync + 'static,
{
    Curry::default().define(name, types, body)
}

static_assertions::assert_impl_all!(Curried: Send, Sync, Clone);
static_assertions::assert_impl_all!(Signature: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationMode;
    use rstest::rstest;

    #[rstest]
    fn define_captures_config() {
        let config = CurryConfig::default().with_validation(ValidationMode::Deferred);
        let curried = Curry::new(config)
            .define("id", [TypeDescriptor::any(), TypeDescriptor::any()], |mut arguments| {
                Ok(arguments.remove(0))
            })
            .unwrap();

        assert_eq!(curried.signature().config(), config);
        assert_eq!(curried.name(), "id");
    }

    #[rstest]
    fn define_typed_rejects_missing_return_type() {
        let result = define_typed("id", [TypeDescriptor::any()], |_| Ok(Value::Null));

        assert_eq!(
            result.map(|curried| curried.arity()),
            Err(UsageError::InvalidSignature {
                function: "id".to_string(),
                descriptors: 1,
            })
        );
    }
}
