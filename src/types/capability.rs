//! Structural capability checks.
//!
//! A capability descriptor accepts any value that exposes the required
//! operation, whatever its tag. The built-in capabilities mirror the
//! constraints generic utility functions usually need:
//!
//! - [`Semigroup`]: can be concatenated (`concat`)
//! - [`Functor`]: can be mapped over (`map`)
//! - [`Chain`]: can be flat-mapped (`chain`)
//!
//! Foreign values advertise operations through
//! [`Foreign::supports`](crate::value::Foreign::supports).

use crate::value::Value;

/// A structural constraint on a value.
pub trait Capability: Send + Sync {
    /// Name reported in validation errors.
    fn name(&self) -> &str;

    /// Whether `value` exposes the operations this capability requires.
    fn is_satisfied_by(&self, value: &Value) -> bool;
}

fn foreign_supports(value: &Value, operation: &str) -> bool {
    value
        .as_foreign()
        .is_some_and(|foreign| foreign.supports(operation))
}

/// Values that can be concatenated: strings, arrays, and foreign values
/// supporting `concat`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Semigroup;

impl Capability for Semigroup {
    fn name(&self) -> &str {
        "Semigroup"
    }

    fn is_satisfied_by(&self, value: &Value) -> bool {
        matches!(value, Value::String(_) | Value::Array(_)) || foreign_supports(value, "concat")
    }
}

/// Values that can be mapped over: arrays, functions (by composition), and
/// foreign values supporting `map`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Functor;

impl Capability for Functor {
    fn name(&self) -> &str {
        "Functor"
    }

    fn is_satisfied_by(&self, value: &Value) -> bool {
        matches!(value, Value::Array(_) | Value::Function(_)) || foreign_supports(value, "map")
    }
}

/// Values that can be flat-mapped: arrays and foreign values supporting
/// `chain`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chain;

impl Capability for Chain {
    fn name(&self) -> &str {
        "Chain"
    }

    fn is_satisfied_by(&self, value: &Value) -> bool {
        matches!(value, Value::Array(_)) || foreign_supports(value, "chain")
    }
}
