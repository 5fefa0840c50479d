//! Integration tests for run-time type tags, descriptors and argument
//! validation as seen through curried callables.

use std::collections::BTreeMap;
use std::sync::Arc;

use rstest::rstest;
use typed_curry::prelude::*;
use typed_curry::types::validate;

// =============================================================================
// Foreign values
// =============================================================================

/// An optional-value container defined outside the crate.
enum Maybe {
    Just(Value),
    Nothing,
}

impl Foreign for Maybe {
    fn type_tag(&self) -> &str {
        "Maybe"
    }

    fn supports(&self, operation: &str) -> bool {
        matches!(operation, "map" | "chain" | "concat")
    }

    fn render(&self) -> String {
        match self {
            Self::Just(value) => format!("Just({value})"),
            Self::Nothing => "Nothing".to_string(),
        }
    }
}

fn just(value: impl Into<Value>) -> Value {
    Value::Foreign(Arc::new(Maybe::Just(value.into())))
}

fn nothing() -> Value {
    Value::Foreign(Arc::new(Maybe::Nothing))
}

fn identity_function() -> Value {
    Value::from(Function::native("identity", |arguments| {
        Ok(arguments.into_iter().next().unwrap_or_default())
    }))
}

fn object() -> Value {
    let mut entries = BTreeMap::new();
    entries.insert("name".to_string(), Value::from("curry"));
    entries.insert("arity".to_string(), Value::from(2));
    Value::from(entries)
}

/// A function with one slot of `descriptor` that returns its argument.
fn accepts(descriptor: TypeDescriptor) -> Curried {
    define_typed("accepts", [descriptor, TypeDescriptor::any()], |arguments| {
        Ok(arguments.into_iter().next().unwrap_or_default())
    })
    .unwrap()
}

// =============================================================================
// Type tags
// =============================================================================

#[rstest]
#[case(Value::Null, "Null")]
#[case(Value::from(true), "Boolean")]
#[case(Value::from(1.5), "Number")]
#[case(Value::from(f64::NAN), "Number")]
#[case(Value::from(""), "String")]
#[case(Value::from(Vec::<Value>::new()), "Array")]
#[case(object(), "Object")]
#[case(identity_function(), "Function")]
#[case(nothing(), "Maybe")]
fn tag_of_every_kind(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(tag_of(&value), expected);
}

#[rstest]
fn partial_application_is_tagged_function() {
    let add = define_typed(
        "add",
        [
            TypeDescriptor::number(),
            TypeDescriptor::number(),
            TypeDescriptor::number(),
        ],
        |arguments| Ok(arguments[0].clone()),
    )
    .unwrap();

    assert_eq!(tag_of(&Value::from(&add)), "Function");
    assert_eq!(tag_of(&invoke!(add, 1).unwrap()), "Function");
}

// =============================================================================
// Named descriptors
// =============================================================================

#[rstest]
#[case(TypeDescriptor::number(), Value::from(0))]
#[case(TypeDescriptor::string(), Value::from("text"))]
#[case(TypeDescriptor::boolean(), Value::from(false))]
#[case(TypeDescriptor::array(), Value::from(vec![1, 2]))]
#[case(TypeDescriptor::object(), object())]
#[case(TypeDescriptor::function(), identity_function())]
#[case(TypeDescriptor::null(), Value::Null)]
#[case(TypeDescriptor::named("Maybe"), just(1))]
fn named_descriptor_accepts_matching_tag(
    #[case] descriptor: TypeDescriptor,
    #[case] value: Value,
) {
    assert_eq!(accepts(descriptor).apply([value.clone()]), Ok(value));
}

#[rstest]
#[case(TypeDescriptor::number(), Value::from("1"), "Number", "1")]
#[case(TypeDescriptor::string(), Value::from(1), "String", "1")]
#[case(TypeDescriptor::array(), Value::from("abc"), "Array", "abc")]
#[case(TypeDescriptor::object(), Value::from(vec!["a"]), "Object", "[\"a\"]")]
#[case(TypeDescriptor::boolean(), Value::Null, "Boolean", "null")]
#[case(TypeDescriptor::named("Maybe"), Value::from(vec![1]), "Maybe", "[1]")]
#[case(TypeDescriptor::number(), nothing(), "Number", "Nothing")]
#[case(TypeDescriptor::string(), object(), "String", "{arity: 2, name: \"curry\"}")]
fn named_descriptor_rejects_other_tags(
    #[case] descriptor: TypeDescriptor,
    #[case] value: Value,
    #[case] expected: &str,
    #[case] rendered: &str,
) {
    assert_eq!(
        accepts(descriptor).apply([value]),
        Err(CurryError::Validation(ValidationError::new(
            "accepts", expected, "first", rendered
        )))
    );
}

#[rstest]
fn number_special_values_render_like_numbers() {
    let error = validate(
        "inc",
        &TypeDescriptor::string(),
        &Value::from(f64::INFINITY),
        1,
    )
    .unwrap_err();

    assert_eq!(
        error.to_string(),
        "‘inc’ requires a value of type String as its first argument; received Infinity"
    );
}

// =============================================================================
// Wildcard
// =============================================================================

#[rstest]
#[case(Value::Null)]
#[case(Value::from(7))]
#[case(Value::from("x"))]
#[case(object())]
#[case(identity_function())]
#[case(nothing())]
fn any_accepts_everything(#[case] value: Value) {
    assert!(accepts(TypeDescriptor::any()).apply([value]).is_ok());
}

#[rstest]
fn named_any_is_the_wildcard() {
    assert!(TypeDescriptor::named("Any").is_any());
    assert_eq!(TypeDescriptor::named("Any"), TypeDescriptor::any());
    assert!(
        accepts(TypeDescriptor::named("Any"))
            .apply([Value::from(1)])
            .is_ok()
    );
}

// =============================================================================
// Capabilities
// =============================================================================

fn concat() -> Curried {
    define_typed(
        "concat",
        [
            TypeDescriptor::capability(Semigroup),
            TypeDescriptor::capability(Semigroup),
            TypeDescriptor::capability(Semigroup),
        ],
        |arguments| match (&arguments[0], &arguments[1]) {
            (Value::String(left), Value::String(right)) => Ok(Value::from(format!("{left}{right}"))),
            (Value::Array(left), Value::Array(right)) => {
                Ok(left.iter().chain(right.iter()).cloned().collect())
            }
            _ => Err(FunctionError::new("‘concat’ requires arguments of the same type").into()),
        },
    )
    .unwrap()
}

#[rstest]
fn semigroup_accepts_strings_and_arrays() {
    assert_eq!(invoke!(concat(), "foo", "bar"), Ok(Value::from("foobar")));
    assert_eq!(
        invoke!(concat(), vec![1, 2], vec![3]),
        Ok(Value::from(vec![1, 2, 3]))
    );
}

#[rstest]
fn semigroup_rejects_numbers_with_capability_name() {
    let error = invoke!(concat(), "foo", 1).unwrap_err();

    assert_eq!(
        error.to_string(),
        "‘concat’ requires a value of type Semigroup as its second argument; received 1"
    );
}

#[rstest]
fn semigroup_accepts_foreign_values_that_support_concat() {
    let error = invoke!(concat(), just("a"), nothing()).unwrap_err();

    assert_eq!(
        error,
        CurryError::Function(FunctionError::new(
            "‘concat’ requires arguments of the same type"
        ))
    );
}

#[rstest]
#[case(Value::from(vec![1]), true)]
#[case(identity_function(), true)]
#[case(just(1), true)]
#[case(Value::from("a"), false)]
#[case(object(), false)]
fn functor_capability(#[case] value: Value, #[case] accepted: bool) {
    let result = accepts(TypeDescriptor::capability(Functor)).apply([value]);

    assert_eq!(result.is_ok(), accepted);
}

#[rstest]
#[case(Value::from(vec![1]), true)]
#[case(nothing(), true)]
#[case(identity_function(), false)]
#[case(Value::from(3), false)]
fn chain_capability(#[case] value: Value, #[case] accepted: bool) {
    let result = accepts(TypeDescriptor::capability(Chain)).apply([value]);

    assert_eq!(result.is_ok(), accepted);
}

// =============================================================================
// Ordinals
// =============================================================================

fn five_numbers() -> Curried {
    define_typed(
        "five",
        vec![TypeDescriptor::number(); 6],
        |arguments| Ok(Value::from(arguments)),
    )
    .unwrap()
}

#[rstest]
#[case(0, "first")]
#[case(2, "third")]
#[case(3, "fourth")]
#[case(4, "fifth")]
fn error_names_the_absolute_position(#[case] bad: usize, #[case] expected: &str) {
    let arguments: Vec<Argument> = (0..5)
        .map(|index| {
            if index == bad {
                Argument::from("x")
            } else {
                Argument::from(index)
            }
        })
        .collect();

    assert_eq!(
        five_numbers().invoke(arguments),
        Err(CurryError::Validation(ValidationError::new(
            "five", "Number", expected, "x"
        )))
    );
}

#[rstest]
fn position_counts_slots_not_call_arguments() {
    let partial = invoke!(five_numbers(), 1, 2, 3).unwrap();

    assert_eq!(
        invoke!(partial, __, "x"),
        Err(CurryError::Validation(ValidationError::new(
            "five", "Number", "fifth", "x"
        )))
    );
}
