//! Canonical run-time type tags.

use crate::value::Value;

/// Returns the canonical type tag of `value`.
///
/// The tag is derived from the variant, never from the value's contents,
/// so it is total and deterministic. Foreign values report their own tag.
///
/// | Value               | Tag          |
/// |---------------------|--------------|
/// | `Value::Null`       | `"Null"`     |
/// | `Value::Boolean`    | `"Boolean"`  |
/// | `Value::Number`     | `"Number"`   |
/// | `Value::String`     | `"String"`   |
/// | `Value::Array`      | `"Array"`    |
/// | `Value::Object`     | `"Object"`   |
/// | `Value::Function`   | `"Function"` |
/// | `Value::Foreign`    | `Foreign::type_tag` |
pub fn tag_of(value: &Value) -> &str {
    match value {
        Value::Null => "Null",
        Value::Boolean(_) => "Boolean",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
        Value::Function(_) => "Function",
        Value::Foreign(foreign) => foreign.type_tag(),
    }
}
