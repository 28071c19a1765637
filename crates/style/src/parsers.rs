//! Low-level nom parser for unit strings.
//!
//! The grammar is deliberately loose: leading non-digit characters are skipped,
//! the magnitude is `<digits>[.<digits>]` of which only the integral part is
//! kept, and whatever follows is the suffix.

use crate::unit::UnitKind;
use nom::IResult;
use nom::Parser;
use nom::bytes::complete::take_till;
use nom::character::complete::{char, digit0, digit1};
use nom::combinator::{map, map_res, opt, rest};
use nom::sequence::{pair, terminated};
use thiserror::Error;

/// Errors that can occur during unit parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unit value '{0}' contains no digits")]
    NoMagnitude(String),
}

/// `<digits>[.<digits>]`, yielding the integral digits only.
fn integral_digits(input: &str) -> IResult<&str, &str> {
    terminated(digit1, opt(pair(char('.'), digit0))).parse(input)
}

fn magnitude(input: &str) -> IResult<&str, f32> {
    map_res(integral_digits, str::parse::<f32>).parse(input)
}

/// Parses a unit string such as `"10px"`, `"2%"`, `"12.9"` or `"-5"`.
///
/// Always consumes the whole input. Fails only when no digit is present.
pub fn parse_unit(input: &str) -> IResult<&str, (f32, UnitKind)> {
    map(
        (take_till(|c: char| c.is_ascii_digit()), magnitude, rest),
        |(_, value, suffix): (&str, f32, &str)| (value, UnitKind::from_suffix(suffix)),
    )
    .parse(input)
}

/// Runs a parser and requires that it consumes all of the input.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(_) => Err(StyleParseError::NoMagnitude(input.to_string())),
    }
}
