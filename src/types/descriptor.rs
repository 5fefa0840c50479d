//! Declared argument types.

use std::fmt;
use std::sync::Arc;

use super::capability::Capability;

/// The expected type of one argument slot.
///
/// Descriptors are immutable and cheap to clone; they are typically built
/// once per defined function.
#[derive(Clone)]
pub enum TypeDescriptor {
    /// Matches every value without inspecting it.
    Any,
    /// Matches values whose tag equals the carried name.
    Named(Arc<str>),
    /// Matches values satisfying a structural capability.
    Capability(Arc<dyn Capability>),
}

impl TypeDescriptor {
    /// The wildcard descriptor.
    pub const fn any() -> Self {
        Self::Any
    }

    /// A descriptor for the given tag name.
    ///
    /// The name `"Any"` yields the wildcard.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typed_curry::types::{TypeDescriptor, name_of};
    ///
    /// assert_eq!(name_of(&TypeDescriptor::named("Number")), "Number");
    /// assert!(TypeDescriptor::named("Any").is_any());
    /// ```
    pub fn named(name: &str) -> Self {
        if name == "Any" {
            Self::Any
        } else {
            Self::Named(Arc::from(name))
        }
    }

    /// A descriptor checked by `capability`.
    pub fn capability<C: Capability + 'static>(capability: C) -> Self {
        Self::Capability(Arc::new(capability))
    }

    /// `Number`.
    pub fn number() -> Self {
        Self::named("Number")
    }

    /// `String`.
    pub fn string() -> Self {
        Self::named("String")
    }

    /// `Boolean`.
    pub fn boolean() -> Self {
        Self::named("Boolean")
    }

    /// `Array`.
    pub fn array() -> Self {
        Self::named("Array")
    }

    /// `Object`.
    pub fn object() -> Self {
        Self::named("Object")
    }

    /// `Function`.
    pub fn function() -> Self {
        Self::named("Function")
    }

    /// `Null`.
    pub fn null() -> Self {
        Self::named("Null")
    }

    /// Returns `true` for the wildcard.
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// The human-readable name of the expected type.
    pub fn name(&self) -> &str {
        match self {
            Self::Any => "Any",
            Self::Named(name) => name,
            Self::Capability(capability) => capability.name(),
        }
    }
}

/// Returns the human-readable name `descriptor` represents.
pub fn name_of(descriptor: &TypeDescriptor) -> &str {
    descriptor.name()
}

/// Named descriptors compare by name; capability descriptors compare by
/// identity, so only clones of one descriptor are equal.
impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Any, Self::Any) => true,
            (Self::Named(left), Self::Named(right)) => left == right,
            (Self::Capability(left), Self::Capability(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => formatter.write_str("Any"),
            Self::Named(name) => formatter.debug_tuple("Named").field(&&**name).finish(),
            Self::Capability(capability) => formatter
                .debug_tuple("Capability")
                .field(&capability.name())
                .finish(),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Semigroup;
    use rstest::rstest;

    #[rstest]
    #[case(TypeDescriptor::any(), "Any")]
    #[case(TypeDescriptor::number(), "Number")]
    #[case(TypeDescriptor::named("Maybe"), "Maybe")]
    #[case(TypeDescriptor::capability(Semigroup), "Semigroup")]
    fn name_of_descriptor(#[case] descriptor: TypeDescriptor, #[case] expected: &str) {
        assert_eq!(name_of(&descriptor), expected);
        assert_eq!(descriptor.to_string(), expected);
    }

    #[rstest]
    fn named_any_is_the_wildcard() {
        assert_eq!(TypeDescriptor::named("Any"), TypeDescriptor::Any);
    }

    #[rstest]
    fn equality_compares_names() {
        assert_eq!(TypeDescriptor::array(), TypeDescriptor::named("Array"));
        assert_ne!(TypeDescriptor::array(), TypeDescriptor::any());
    }

    struct Impostor;

    impl Capability for Impostor {
        fn name(&self) -> &str {
            "Semigroup"
        }

        fn is_satisfied_by(&self, _: &crate::value::Value) -> bool {
            true
        }
    }

    #[rstest]
    fn capabilities_compare_by_identity() {
        let semigroup = TypeDescriptor::capability(Semigroup);

        assert_eq!(semigroup, semigroup.clone());
        assert_ne!(semigroup, TypeDescriptor::capability(Semigroup));
        assert_ne!(semigroup, TypeDescriptor::capability(Impostor));
        assert_ne!(semigroup, TypeDescriptor::named("Semigroup"));
    }
}
