//! List and string utilities built from curried, type-checked functions.
//!
//! Every utility is a curried [`Value`] produced by `typed-curry`, so each can
//! be applied all at once, one argument at a time, or with placeholders.
//! Several utilities are defined purely as partial applications of others:
//!
//! - `inc` is `add(1)`
//! - `sum` is `reduce(add, 0)`
//! - `reverse` is `reduce(flip(prepend), [])`
//! - `shout` is `compose(concat(__, "!"), to_upper)`
//!
//! # Example
//!
//! ```rust
//! use typed_curry::prelude::*;
//! use utilities::Utilities;
//!
//! let utilities = Utilities::new(CurryConfig::default()).unwrap();
//!
//! assert_eq!(invoke!(utilities.add(), 2, 2).unwrap(), Value::from(4));
//! assert_eq!(invoke!(utilities.shout(), "hey").unwrap(), Value::from("HEY!"));
//! ```

use std::iter;

use thiserror::Error;
use typed_curry::prelude::*;

/// Errors raised while building the utility set.
#[derive(Debug, Error)]
pub enum UtilityError {
    /// A utility's signature was rejected.
    #[error("failed to define ‘{name}’: {source}")]
    Definition {
        /// The utility being defined.
        name: &'static str,
        /// The underlying error.
        #[source]
        source: UsageError,
    },

    /// A utility defined by partial application could not be applied.
    #[error("failed to derive ‘{name}’: {source}")]
    Derivation {
        /// The utility being derived.
        name: &'static str,
        /// The underlying error.
        #[source]
        source: CurryError,
    },
}

/// The curried utility functions.
#[derive(Clone, Debug)]
pub struct Utilities {
    add: Value,
    inc: Value,
    reduce: Value,
    sum: Value,
    prepend: Value,
    flip: Value,
    reverse: Value,
    map: Value,
    compose: Value,
    to_upper: Value,
    concat: Value,
    shout: Value,
    head: Value,
}

fn number(value: &Value) -> f64 {
    value.as_number().unwrap_or_default()
}

fn text(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

fn elements(value: &Value) -> &[Value] {
    value.as_array().unwrap_or_default()
}

/// A body that forwards its arguments to an already curried value.
fn delegate(
    target: Value,
) -> impl Fn(Vec<Value>) -> Result<Value, CurryError> + Send + Sync + 'static {
    move |arguments| target.invoke(arguments.into_iter().map(Argument::from).collect())
}

struct Builder {
    curry: Curry,
}

impl Builder {
    fn define<I, F>(&self, name: &'static str, types: I, body: F) -> Result<Value, UtilityError>
    where
        I: IntoIterator<Item = TypeDescriptor>,
        F: Fn(Vec<Value>) -> Result<Value, CurryError> + Send + Sync + 'static,
    {
        self.curry
            .define(name, types, body)
            .map(Value::from)
            .map_err(|source| UtilityError::Definition { name, source })
    }

    fn derive(
        name: &'static str,
        function: &Value,
        arguments: Vec<Argument>,
    ) -> Result<Value, UtilityError> {
        function
            .invoke(arguments)
            .map_err(|source| UtilityError::Derivation { name, source })
    }
}

impl Utilities {
    /// Defines every utility under `config`.
    ///
    /// # Errors
    ///
    /// Returns [`UtilityError`] if a definition or derivation fails.
    #[allow(clippy::too_many_lines)]
    pub fn new(config: CurryConfig) -> Result<Self, UtilityError> {
        let builder = Builder {
            curry: Curry::new(config),
        };

        // add :: Number -> Number -> Number
        let add = builder.define(
            "add",
            [
                TypeDescriptor::number(),
                TypeDescriptor::number(),
                TypeDescriptor::number(),
            ],
            |arguments| Ok(Value::from(number(&arguments[0]) + number(&arguments[1]))),
        )?;

        // inc :: Number -> Number
        let add_one = Builder::derive("inc", &add, vec![Argument::from(1)])?;
        let inc = builder.define(
            "inc",
            [TypeDescriptor::number(), TypeDescriptor::number()],
            delegate(add_one),
        )?;

        // reduce :: (a -> b -> a) -> a -> Array b -> a
        let reduce = builder.define(
            "reduce",
            [
                TypeDescriptor::function(),
                TypeDescriptor::any(),
                TypeDescriptor::array(),
                TypeDescriptor::any(),
            ],
            |arguments| {
                let function = &arguments[0];
                let mut result = arguments[1].clone();
                for element in elements(&arguments[2]) {
                    result = invoke!(invoke!(function, result)?, element)?;
                }
                Ok(result)
            },
        )?;

        // sum :: Array Number -> Number
        let add_from_zero = Builder::derive(
            "sum",
            &reduce,
            vec![Argument::from(&add), Argument::from(0)],
        )?;
        let sum = builder.define(
            "sum",
            [TypeDescriptor::array(), TypeDescriptor::number()],
            delegate(add_from_zero),
        )?;

        // prepend :: a -> Array a -> Array a
        let prepend = builder.define(
            "prepend",
            [
                TypeDescriptor::any(),
                TypeDescriptor::array(),
                TypeDescriptor::array(),
            ],
            |arguments| {
                Ok(iter::once(arguments[0].clone())
                    .chain(elements(&arguments[1]).iter().cloned())
                    .collect())
            },
        )?;

        // flip :: (a -> b -> c) -> b -> a -> c
        let flip = builder.define(
            "flip",
            [
                TypeDescriptor::function(),
                TypeDescriptor::any(),
                TypeDescriptor::any(),
                TypeDescriptor::any(),
            ],
            |arguments| invoke!(invoke!(arguments[0], &arguments[2])?, &arguments[1]),
        )?;

        // reverse :: Array a -> Array a
        let flipped_prepend = Builder::derive("reverse", &flip, vec![Argument::from(&prepend)])?;
        let reverse_into_empty = Builder::derive(
            "reverse",
            &reduce,
            vec![
                Argument::from(flipped_prepend),
                Argument::from(Vec::<Value>::new()),
            ],
        )?;
        let reverse = builder.define(
            "reverse",
            [TypeDescriptor::array(), TypeDescriptor::array()],
            delegate(reverse_into_empty),
        )?;

        // map :: (a -> b) -> Array a -> Array b
        let map = builder.define(
            "map",
            [
                TypeDescriptor::function(),
                TypeDescriptor::array(),
                TypeDescriptor::array(),
            ],
            |arguments| {
                let function = &arguments[0];
                elements(&arguments[1])
                    .iter()
                    .map(|element| invoke!(function, element))
                    .collect()
            },
        )?;

        // compose :: (b -> c) -> (a -> b) -> a -> c
        let compose = builder.define(
            "compose",
            [
                TypeDescriptor::function(),
                TypeDescriptor::function(),
                TypeDescriptor::any(),
                TypeDescriptor::any(),
            ],
            |arguments| invoke!(arguments[0], invoke!(arguments[1], &arguments[2])?),
        )?;

        // toUpper :: String -> String
        let to_upper = builder.define(
            "toUpper",
            [TypeDescriptor::string(), TypeDescriptor::string()],
            |arguments| Ok(Value::from(text(&arguments[0]).to_uppercase())),
        )?;

        // concat :: String -> String -> String
        let concat = builder.define(
            "concat",
            [
                TypeDescriptor::string(),
                TypeDescriptor::string(),
                TypeDescriptor::string(),
            ],
            |arguments| Ok(Value::from(format!("{}{}", text(&arguments[0]), text(&arguments[1])))),
        )?;

        // shout :: String -> String
        let exclaim = Builder::derive(
            "shout",
            &concat,
            vec![Argument::from(__), Argument::from("!")],
        )?;
        let exclaim_upper = Builder::derive(
            "shout",
            &compose,
            vec![Argument::from(exclaim), Argument::from(&to_upper)],
        )?;
        let shout = builder.define(
            "shout",
            [TypeDescriptor::string(), TypeDescriptor::string()],
            delegate(exclaim_upper),
        )?;

        // head :: Array a -> a
        let head = builder.define(
            "head",
            [TypeDescriptor::array(), TypeDescriptor::any()],
            |arguments| {
                elements(&arguments[0])
                    .first()
                    .cloned()
                    .ok_or_else(|| FunctionError::new("‘head’ applied to []").into())
            },
        )?;

        tracing::debug!(?config, "utilities defined");

        Ok(Self {
            add,
            inc,
            reduce,
            sum,
            prepend,
            flip,
            reverse,
            map,
            compose,
            to_upper,
            concat,
            shout,
            head,
        })
    }

    /// `add :: Number -> Number -> Number`
    pub const fn add(&self) -> &Value {
        &self.add
    }

    /// `inc :: Number -> Number`
    pub const fn inc(&self) -> &Value {
        &self.inc
    }

    /// `reduce :: (a -> b -> a) -> a -> Array b -> a`
    pub const fn reduce(&self) -> &Value {
        &self.reduce
    }

    /// `sum :: Array Number -> Number`
    pub const fn sum(&self) -> &Value {
        &self.sum
    }

    /// `prepend :: a -> Array a -> Array a`
    pub const fn prepend(&self) -> &Value {
        &self.prepend
    }

    /// `flip :: (a -> b -> c) -> b -> a -> c`
    pub const fn flip(&self) -> &Value {
        &self.flip
    }

    /// `reverse :: Array a -> Array a`
    pub const fn reverse(&self) -> &Value {
        &self.reverse
    }

    /// `map :: (a -> b) -> Array a -> Array b`
    pub const fn map(&self) -> &Value {
        &self.map
    }

    /// `compose :: (b -> c) -> (a -> b) -> a -> c`
    pub const fn compose(&self) -> &Value {
        &self.compose
    }

    /// `toUpper :: String -> String`
    pub const fn to_upper(&self) -> &Value {
        &self.to_upper
    }

    /// `concat :: String -> String -> String`
    pub const fn concat(&self) -> &Value {
        &self.concat
    }

    /// `shout :: String -> String`
    pub const fn shout(&self) -> &Value {
        &self.shout
    }

    /// `head :: Array a -> a`
    pub const fn head(&self) -> &Value {
        &self.head
    }

    /// The documented examples, as `(expression, result)` pairs.
    pub fn examples(&self) -> Vec<(&'static str, Result<Value, CurryError>)> {
        let add_ten = invoke!(self.add, 10);
        vec![
            ("add(2, 2)", invoke!(self.add, 2, 2)),
            ("add('foo', 'bar')", invoke!(self.add, "foo", "bar")),
            ("inc(2)", invoke!(self.inc, 2)),
            (
                "reduce(add, 0, [1, 2, 3, 4, 5])",
                invoke!(self.reduce, &self.add, 0, vec![1, 2, 3, 4, 5]),
            ),
            ("sum([1, 2, 3, 4, 5])", invoke!(self.sum, vec![1, 2, 3, 4, 5])),
            ("prepend(1, [2, 3, 4])", invoke!(self.prepend, 1, vec![2, 3, 4])),
            (
                "flip(concat, 'bar', 'foo')",
                invoke!(self.flip, &self.concat, "bar", "foo"),
            ),
            ("reverse([1, 2, 3])", invoke!(self.reverse, vec![1, 2, 3])),
            (
                "map(add(10), [1, 2, 3])",
                add_ten.and_then(|add_ten| invoke!(self.map, add_ten, vec![1, 2, 3])),
            ),
            (
                "compose(sqrt, sum, [1, 2, 3, 4, 5, 6, 7, 8])",
                invoke!(
                    self.compose,
                    square_root(),
                    &self.sum,
                    vec![1, 2, 3, 4, 5, 6, 7, 8]
                ),
            ),
            ("toUpper('foo')", invoke!(self.to_upper, "foo")),
            ("concat('foo', 'bar')", invoke!(self.concat, "foo", "bar")),
            ("shout('hey')", invoke!(self.shout, "hey")),
            (
                "head(['foo', 'bar', 'baz'])",
                invoke!(self.head, vec!["foo", "bar", "baz"]),
            ),
            ("head([])", invoke!(self.head, Vec::<Value>::new())),
        ]
    }
}

/// An uncurried native square root, usable wherever a function is expected.
pub fn square_root() -> Function {
    Function::native("sqrt", |arguments| {
        Ok(Value::from(
            arguments.first().map_or(f64::NAN, number).sqrt(),
        ))
    })
}
