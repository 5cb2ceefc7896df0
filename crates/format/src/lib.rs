//! Common formatting helpers for `std` types
//!
//! These are left public for convenience.
//!
//! Consistent scientific notation and element symbol capitalisation are
//! needed all over the toolkit, so they live here rather than being
//! duplicated per crate.

// standard library
use std::fmt::{Display, LowerExp};

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends primitives with more specific formatting options
pub trait SciFormat {
    /// Fixed-layout scientific number formatting
    ///
    /// The default `{:e}` output varies in width with the value, which makes
    /// for ragged columns in tabulated output. This pins the number of
    /// decimals and pads the exponent with zeros.
    ///
    /// Works for anything implementing the `LowerExp` trait, which covers
    /// every numerical primitive.
    ///
    /// ```rust
    /// # use xstools_format::SciFormat;
    /// assert_eq!((1.0).sci(5, 2), "1.00000e+00".to_string());
    /// assert_eq!((-1.0).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((2.5e4).sci(3, 2), "2.500e+04".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: LowerExp> SciFormat for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);
        // Safe to `unwrap` as `num` is guaranteed to contain `'e'`
        let exp = num.split_off(num.find('e').unwrap());
        // The exponent must always carry a sign
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        // Zero-pad the exponent and put it back on the number
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }
}

/// Extends Option for easy display formatting
pub trait OptionFormat {
    /// Display the contained value, or "none"
    ///
    /// Generic over anything that implements `Display`, this will either be
    /// the value contained within `Some()` or "none" for the `None` variant.
    ///
    /// ```rust
    /// # use xstools_format::OptionFormat;
    /// let x: Option<u32> = Some(2);
    /// assert_eq!(x.display(), "2");
    ///
    /// let x: Option<u32> = None;
    /// assert_eq!(x.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: Display> OptionFormat for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}

/// Capitalises the first letter in a string
///
/// ```rust
/// # use xstools_format::capitalise;
/// assert_eq!(capitalise("uranium"), "Uranium".to_string());
/// ```
pub fn capitalise(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(first) => first.to_uppercase().collect::<String>() + c.as_str(),
        None => String::new(),
    }
}
