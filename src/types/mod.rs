//! Run-time type tags, type descriptors and argument validation.
//!
//! This module provides the shallow, first-order type checks performed on
//! every argument a curried callable accepts:
//!
//! - [`tag_of`]: the canonical tag of a value (`"Number"`, `"Array"` ...)
//! - [`TypeDescriptor`]: the declared expectation for one argument slot
//! - [`Capability`]: structural checks such as [`Semigroup`] or [`Functor`]
//! - [`validate`]: compares a value against a descriptor
//! - [`ordinal`]: `"first"`, `"second"`, ... labels for error messages
//!
//! # Examples
//!
//! ```rust
//! use typed_curry::types::{TypeDescriptor, tag_of, validate};
//! use typed_curry::value::Value;
//!
//! assert_eq!(tag_of(&Value::from(vec![1, 2])), "Array");
//! assert!(validate("sum", &TypeDescriptor::array(), &Value::from(vec![1]), 1).is_ok());
//! assert!(validate("sum", &TypeDescriptor::any(), &Value::Null, 1).is_ok());
//! ```

mod capability;
mod descriptor;
mod ordinal;
mod tag;
mod validate;

pub use capability::{Capability, Chain, Functor, Semigroup};
pub use descriptor::{TypeDescriptor, name_of};
pub use ordinal::ordinal;
pub use tag::tag_of;
pub use validate::validate;
