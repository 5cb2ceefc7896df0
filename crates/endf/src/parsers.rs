//! Parsers for the ENDF-6 number grammar

use xstools_format::f;

// nom parser combinators
use nom::character::complete::{self, digit1, one_of};
use nom::combinator::{all_consuming, opt, recognize};
use nom::error::{Error, ErrorKind};
use nom::number::complete::double;
use nom::sequence::pair;
use nom::{Err, IResult};

/// Float in any of the forms an ENDF-6 field may take
///
/// Numbers are packed into 11 columns, so evaluations routinely drop the
/// exponent marker to make room for digits and leave just the trailing
/// sign, e.g. `1.23456+3` means `1.23456e+3`. Standard integer and
/// exponent-marked forms parse unchanged.
pub(crate) fn endf_double(i: &str) -> IResult<&str, f64> {
    // a plain double stops right before any markerless exponent
    let (i, mantissa) = recognize(double)(i)?;
    let (i, exponent) = opt(bare_exponent)(i)?;

    let literal = match exponent {
        Some(exp) => f!("{mantissa}e{exp}"),
        None => mantissa.to_string(),
    };

    match literal.parse() {
        Ok(value) => Ok((i, value)),
        Err(_) => Err(Err::Error(Error::new(i, ErrorKind::Float))),
    }
}

/// Signed digits directly following the mantissa, e.g. the `+3` of `1.0+3`
fn bare_exponent(i: &str) -> IResult<&str, &str> {
    recognize(pair(one_of("+-"), digit1))(i)
}

/// Decode a whole field as a float, `None` if it does not parse cleanly
///
/// The caller is expected to have trimmed the token and skipped blanks.
pub(crate) fn float_field(token: &str) -> Option<f64> {
    all_consuming(endf_double)(token).ok().map(|(_, value)| value)
}

/// Decode a whole field as an integer, `None` if it does not parse cleanly
///
/// Integer positions in a record are frequently written out as floats,
/// e.g. `1.00000+0` for `1`, so anything that fails a direct integer parse
/// falls back to the float grammar and truncates.
pub(crate) fn int_field(token: &str) -> Option<i64> {
    match all_consuming(complete::i64::<_, Error<&str>>)(token) {
        Ok((_, value)) => Some(value),
        Err(_) => float_field(token).map(|value| value as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markerless_exponents() {
        assert_eq!(endf_double("1.23456+3"), Ok(("", 1.23456e3)));
        assert_eq!(endf_double("2.546-5"), Ok(("", 2.546e-5)));
        assert_eq!(endf_double("-4.80020+6"), Ok(("", -4.80020e6)));
    }

    #[test]
    fn standard_forms_unchanged() {
        assert_eq!(endf_double("1.23456e+3"), Ok(("", 1.23456e3)));
        assert_eq!(endf_double("9.5E-7"), Ok(("", 9.5e-7)));
        assert_eq!(endf_double("20.0"), Ok(("", 20.0)));
        assert_eq!(endf_double("7"), Ok(("", 7.0)));
    }

    #[test]
    fn trailing_input_left_alone() {
        assert_eq!(endf_double("1.0+2 next"), Ok((" next", 100.0)));
    }

    #[test]
    fn float_field_requires_full_consumption() {
        assert_eq!(float_field("1.000000+0"), Some(1.0));
        assert_eq!(float_field("1.0 junk"), None);
        assert_eq!(float_field("junk"), None);
    }

    #[test]
    fn int_field_truncates_float_forms() {
        assert_eq!(int_field("42"), Some(42));
        assert_eq!(int_field("-3"), Some(-3));
        assert_eq!(int_field("1.00000+0"), Some(1));
        assert_eq!(int_field("9.90000+1"), Some(99));
        assert_eq!(int_field("2.7"), Some(2));
        assert_eq!(int_field("abc"), None);
    }
}
