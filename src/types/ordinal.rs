//! English ordinal labels for argument positions.

use std::borrow::Cow;

const UNITS: [&str; 20] = [
    "zeroth",
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "eighth",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const TENS_ORDINAL: [&str; 10] = [
    "",
    "",
    "twentieth",
    "thirtieth",
    "fortieth",
    "fiftieth",
    "sixtieth",
    "seventieth",
    "eightieth",
    "ninetieth",
];

/// Returns the ordinal label of a 1-based argument position.
///
/// Positions below 100 are spelled out; larger positions use numeric
/// suffixes.
///
/// # Examples
///
/// ```rust
/// use typed_curry::types::ordinal;
///
/// assert_eq!(ordinal(1), "first");
/// assert_eq!(ordinal(4), "fourth");
/// assert_eq!(ordinal(21), "twenty-first");
/// assert_eq!(ordinal(112), "112th");
/// ```
pub fn ordinal(position: usize) -> Cow<'static, str> {
    match position {
        0..=19 => Cow::Borrowed(UNITS[position]),
        20..=99 => {
            let (tens, units) = (position / 10, position % 10);
            if units == 0 {
                Cow::Borrowed(TENS_ORDINAL[tens])
            } else {
                Cow::Owned(format!("{}-{}", TENS[tens], UNITS[units]))
            }
        }
        _ => Cow::Owned(format!("{position}{}", numeric_suffix(position))),
    }
}

const fn numeric_suffix(position: usize) -> &'static str {
    match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
