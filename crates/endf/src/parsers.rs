//! Numeric field parsers

// crate modules
use crate::error::{Error, Result};

// external crates
use log::trace;

// nom parser combinators
use nom::character::complete::{digit1, one_of};
use nom::combinator::{all_consuming, recognize};
use nom::number::complete::{double, recognize_float};
use nom::sequence::pair;
use nom::IResult;

/// Convert an ENDF-6 data field to an f64
///
/// ENDF-6 writes numbers into 11 columns and drops the `E` of the exponent to
/// make room for more significant figures, so `1.23454+5` is 1.23454e+05.
/// Blanks anywhere in the field are ignored and an entirely blank field is
/// zero.
///
/// ```rust
/// # use endftools_endf::read_float;
/// assert_eq!(read_float(" 1.234540+5").unwrap(), 123454.0);
/// assert_eq!(read_float(" 6.023000-1").unwrap(), 0.6023);
/// assert_eq!(read_float("          2").unwrap(), 2.0);
/// assert!(read_float("abcdefghijk").is_err());
/// ```
pub fn read_float(field: &str) -> Result<f64> {
    let compact: String = field.chars().filter(|c| *c != ' ').collect();
    if compact.is_empty() {
        return Ok(0.0);
    }

    // plain numbers, and anything that kept its exponent marker
    if let Ok((_, value)) = complete_f64(&compact) {
        return Ok(value);
    }

    // otherwise put the marker back in front of the exponent sign
    let repaired = match implied_exponent(&compact) {
        Ok((_, (mantissa, exponent))) => format!("{mantissa}e{exponent}"),
        Err(_) => return Err(malformed(field)),
    };

    match complete_f64(&repaired) {
        Ok((_, value)) => {
            trace!("Repaired exponent of \"{field}\" -> {value}");
            Ok(value)
        }
        Err(_) => Err(malformed(field)),
    }
}

fn malformed(field: &str) -> Error {
    Error::MalformedNumber {
        text: field.to_string(),
        sequence: None,
    }
}

/// Signed integer field, ignoring surrounding blanks
pub(crate) fn integer(i: &str) -> IResult<&str, i32> {
    all_consuming(nom::character::complete::i32)(i.trim())
}

/// Floating point value that consumes the whole input
fn complete_f64(i: &str) -> IResult<&str, f64> {
    all_consuming(double)(i)
}

/// Split a number with no exponent marker into mantissa and signed exponent
///
/// e.g. `-1.23456+5` -> (`-1.23456`, `+5`)
fn implied_exponent(i: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(pair(recognize_float, recognize(pair(one_of("+-"), digit1))))(i)
}
