//! Curried callables and the slot-assignment algorithm.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use super::signature::Signature;
use crate::config::ValidationMode;
use crate::error::{CurryError, UsageError, ValidationError};
use crate::placeholder::Argument;
use crate::types::validate;
use crate::value::{Callable, Value};

/// One argument slot of a partial application.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    /// Not yet filled.
    Open,
    /// Filled with an accepted value.
    Filled(Value),
}

impl Slot {
    /// Returns `true` for [`Slot::Open`].
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    fn into_filled(self) -> Option<Value> {
        match self {
            Self::Open => None,
            Self::Filled(value) => Some(value),
        }
    }
}

type Slots = SmallVec<[Slot; 4]>;

/// A function together with the arguments bound to it so far.
///
/// Applying arguments never changes a `Curried`: each application returns
/// either the native function's result or a new `Curried` with more slots
/// filled, so a partial application can be completed any number of times.
///
/// # Examples
///
/// ```rust
/// use typed_curry::prelude::*;
///
/// let add = define_typed(
///     "add",
///     [TypeDescriptor::number(), TypeDescriptor::number(), TypeDescriptor::number()],
///     |arguments| {
///         let sum: f64 = arguments.iter().filter_map(Value::as_number).sum();
///         Ok(Value::from(sum))
///     },
/// )
/// .unwrap();
///
/// assert_eq!(invoke!(add, 2, 2).unwrap(), Value::from(4));
///
/// let add_five = invoke!(add, 5).unwrap();
/// assert_eq!(invoke!(add_five, 1).unwrap(), Value::from(6));
/// assert_eq!(invoke!(add_five, 10).unwrap(), Value::from(15));
///
/// assert_eq!(invoke!(add, __, 2).and_then(|partial| invoke!(partial, 2)).unwrap(), Value::from(4));
/// ```
#[derive(Clone)]
pub struct Curried {
    signature: Arc<Signature>,
    slots: Slots,
}

impl Curried {
    /// Creates a callable with every slot open.
    pub fn new(signature: Signature) -> Self {
        let slots = (0..signature.arity()).map(|_| Slot::Open).collect();
        Self {
            signature: Arc::new(signature),
            slots,
        }
    }

    /// The shared signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Display name of the function.
    pub fn name(&self) -> &str {
        self.signature.name()
    }

    /// Total number of slots.
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// The current slots, in signature order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of slots still open.
    pub fn open_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_open()).count()
    }

    /// Applies any sequence of arguments convertible into [`Argument`].
    ///
    /// # Errors
    ///
    /// See [`Callable::invoke`].
    pub fn apply<I>(&self, arguments: I) -> Result<Value, CurryError>
    where
        I: IntoIterator,
        I::Item: Into<Argument>,
    {
        self.assign(arguments.into_iter().map(Into::into).collect())
    }

    /// Matches `given` against the open slots, left to right.
    ///
    /// The i-th argument lands in the i-th open slot; a placeholder leaves
    /// its slot open. Arguments are validated in order as they land (eager
    /// mode) or all at once on saturation (deferred mode).
    fn assign(&self, given: Vec<Argument>) -> Result<Value, CurryError> {
        let signature = &*self.signature;
        let open: SmallVec<[usize; 4]> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_open())
            .map(|(index, _)| index)
            .collect();

        tracing::trace!(
            function = signature.name(),
            given = given.len(),
            open = open.len(),
            "applying curried function"
        );

        if given.is_empty() {
            return Err(self.reject(UsageError::NoArguments {
                function: signature.name().to_string(),
            }));
        }
        if given.len() > open.len() {
            return Err(self.reject(UsageError::TooManyArguments {
                function: signature.name().to_string(),
                open: open.len(),
                given: given.len(),
            }));
        }

        let config = signature.config();
        let eager = config.check_types && config.validation == ValidationMode::Eager;

        let mut slots = self.slots.clone();
        for (argument, &index) in given.into_iter().zip(open.iter()) {
            if let Argument::Value(value) = argument {
                if eager {
                    self.check(index, &value)?;
                }
                slots[index] = Slot::Filled(value);
            }
        }

        if slots.iter().any(Slot::is_open) {
            return Ok(Value::from(Self {
                signature: Arc::clone(&self.signature),
                slots,
            }));
        }

        let values: Vec<Value> = slots.into_iter().filter_map(Slot::into_filled).collect();

        if config.check_types && config.validation == ValidationMode::Deferred {
            for (index, value) in values.iter().enumerate() {
                self.check(index, value)?;
            }
        }

        tracing::trace!(function = signature.name(), "signature saturated");
        (signature.body())(values)
    }

    fn check(&self, index: usize, value: &Value) -> Result<(), ValidationError> {
        let signature = &*self.signature;
        validate(signature.name(), &signature.parameters()[index], value, index + 1).inspect_err(
            |error| tracing::debug!(function = signature.name(), %error, "argument rejected"),
        )
    }

    fn reject(&self, error: UsageError) -> CurryError {
        tracing::debug!(function = self.signature.name(), %error, "invocation rejected");
        error.into()
    }
}

impl Callable for Curried {
    fn name(&self) -> &str {
        self.signature.name()
    }

    fn invoke(&self, arguments: Vec<Argument>) -> Result<Value, CurryError> {
        self.assign(arguments)
    }
}

impl fmt::Debug for Curried {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("name", &self.signature.name())
            .field("slots", &self.slots)
            .finish()
    }
}

impl fmt::Display for Curried {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[Function {}]", self.signature.name())
    }
}
