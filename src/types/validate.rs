//! Argument validation.

use super::descriptor::TypeDescriptor;
use super::ordinal::ordinal;
use super::tag::tag_of;
use crate::error::ValidationError;
use crate::value::Value;

/// Checks `value` against `descriptor` for the argument at the 1-based
/// `position` of `function`.
///
/// - [`TypeDescriptor::Any`] always succeeds without inspecting the value.
/// - [`TypeDescriptor::Named`] succeeds iff the value's tag equals the name.
/// - [`TypeDescriptor::Capability`] succeeds iff the capability is satisfied.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the function, the expected type, the
/// ordinal of `position` and the rendered value.
///
/// # Examples
///
/// ```rust
/// use typed_curry::types::{TypeDescriptor, validate};
/// use typed_curry::value::Value;
///
/// let error = validate("add", &TypeDescriptor::number(), &Value::from("foo"), 1).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "‘add’ requires a value of type Number as its first argument; received foo"
/// );
/// ```
pub fn validate(
    function: &str,
    descriptor: &TypeDescriptor,
    value: &Value,
    position: usize,
) -> Result<(), ValidationError> {
    let accepted = match descriptor {
        TypeDescriptor::Any => true,
        TypeDescriptor::Named(name) => tag_of(value) == &**name,
        TypeDescriptor::Capability(capability) => capability.is_satisfied_by(value),
    };

    if accepted {
        Ok(())
    } else {
        Err(ValidationError::new(
            function,
            descriptor.name(),
            &ordinal(position),
            &value.to_string(),
        ))
    }
}
