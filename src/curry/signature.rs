//! Function signatures.

use std::fmt;

use smallvec::SmallVec;

use crate::config::CurryConfig;
use crate::error::UsageError;
use crate::types::TypeDescriptor;
use crate::value::NativeBody;

/// The immutable definition a curried callable is built from.
///
/// A signature holds the display name, one descriptor per argument slot,
/// the return descriptor, the native body and the configuration it was
/// defined under. It is shared by every partial application derived from
/// the same definition.
pub struct Signature {
    name: String,
    parameters: SmallVec<[TypeDescriptor; 4]>,
    returns: TypeDescriptor,
    body: NativeBody,
    config: CurryConfig,
}

impl Signature {
    /// Builds a signature from `types`, whose last element is the return
    /// type.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::InvalidSignature`] unless `types` holds at least
    /// one argument type and the return type.
    pub fn new<I>(
        name: &str,
        types: I,
        body: NativeBody,
        config: CurryConfig,
    ) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        let mut parameters: SmallVec<[TypeDescriptor; 4]> = types.into_iter().collect();
        let descriptors = parameters.len();

        match parameters.pop() {
            Some(returns) if !parameters.is_empty() => Ok(Self {
                name: name.to_string(),
                parameters,
                returns,
                body,
                config,
            }),
            _ => Err(UsageError::InvalidSignature {
                function: name.to_string(),
                descriptors,
            }),
        }
    }

    /// Display name used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of argument slots.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Descriptors of the argument slots, in order.
    pub fn parameters(&self) -> &[TypeDescriptor] {
        &self.parameters
    }

    /// The declared return type. Informational only; results are not checked.
    pub const fn returns(&self) -> &TypeDescriptor {
        &self.returns
    }

    /// The configuration captured at definition time.
    pub const fn config(&self) -> CurryConfig {
        self.config
    }

    pub(crate) const fn body(&self) -> &NativeBody {
        &self.body
    }
}

/// Renders the signature as `name :: A -> B -> C`.
impl fmt::Display for Signature {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} ::", self.name)?;
        for parameter in &self.parameters {
            write!(formatter, " {parameter} ->")?;
        }
        write!(formatter, " {}", self.returns)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Signature")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("returns", &self.returns)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
