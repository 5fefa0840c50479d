//! # typed-curry
//!
//! Curried, placeholder-aware, run-time type-checked functions.
//!
//! ## Overview
//!
//! This library turns an N-argument native function into a curried callable
//! over a dynamic [`Value`](value::Value) universe. It includes:
//!
//! - **Curry Engine**: one arity-polymorphic slot-assignment algorithm
//! - **Placeholder**: `__` leaves an argument slot open for a later call
//! - **Type Tags**: canonical run-time tags (`Number`, `String`, `Array` ...)
//! - **Validation**: each supplied argument is checked against its slot's
//!   declared type, with descriptive, reproducible error messages
//! - **Capabilities**: structural constraints (`Semigroup`, `Functor`, `Chain`)
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for configuration and error types
//!
//! ## Example
//!
//! ```rust
//! use typed_curry::prelude::*;
//!
//! let add = define_typed(
//!     "add",
//!     [TypeDescriptor::number(), TypeDescriptor::number(), TypeDescriptor::number()],
//!     |arguments| {
//!         let sum: f64 = arguments.iter().filter_map(Value::as_number).sum();
//!         Ok(Value::from(sum))
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(invoke!(add, 2, 2).unwrap(), Value::from(4));
//! assert_eq!(invoke!(invoke!(add, 2).unwrap(), 2).unwrap(), Value::from(4));
//! assert_eq!(invoke!(invoke!(add, __, 2).unwrap(), 2).unwrap(), Value::from(4));
//!
//! assert_eq!(
//!     invoke!(add, "foo", "bar").unwrap_err().to_string(),
//!     "‘add’ requires a value of type Number as its first argument; received foo"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and the [`invoke!`] macro.
///
/// # Usage
///
/// ```rust
/// use typed_curry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{CurryConfig, ValidationMode};
    pub use crate::curry::{Curried, Curry, Signature, Slot, define_typed};
    pub use crate::error::{CurryError, FunctionError, UsageError, ValidationError};
    pub use crate::invoke;
    pub use crate::placeholder::{Argument, Placeholder, __, define_placeholder, is_placeholder};
    pub use crate::types::{Capability, Chain, Functor, Semigroup, TypeDescriptor, tag_of};
    pub use crate::value::{Callable, Foreign, Function, Value};
}

pub mod config;
pub mod curry;
pub mod error;
pub mod placeholder;
pub mod types;
pub mod value;

static_assertions::assert_impl_all!(value::Value: Send, Sync, Clone);
static_assertions::assert_impl_all!(types::TypeDescriptor: Send, Sync, Clone);
