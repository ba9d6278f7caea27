// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Input normalization.
//!
//! Turns text, floats and integers into a validated positive `u64` no larger
//! than a configured ceiling. Nothing here panics on bad input.

use crate::errors::CollatzError;
use std::fmt;
use std::num::IntErrorKind;

/// A numeric-like value as supplied by a caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// No value at all.
    Absent,
    /// Textual representation, trimmed before parsing.
    Text(String),
    /// Floating point value; must be integral.
    Float(f64),
    /// Integer value of any width.
    Integer(i128),
}

impl fmt::Display for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawInput::Absent => write!(f, "<absent>"),
            RawInput::Text(s) => write!(f, "{}", s),
            RawInput::Float(x) => write!(f, "{}", x),
            RawInput::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        RawInput::Text(s.to_string())
    }
}

impl From<String> for RawInput {
    fn from(s: String) -> Self {
        RawInput::Text(s)
    }
}

impl From<&String> for RawInput {
    fn from(s: &String) -> Self {
        RawInput::Text(s.clone())
    }
}

impl From<f64> for RawInput {
    fn from(x: f64) -> Self {
        RawInput::Float(x)
    }
}

impl From<f32> for RawInput {
    fn from(x: f32) -> Self {
        RawInput::Float(x as f64)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawInput {
                fn from(i: $t) -> Self {
                    RawInput::Integer(i as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize, isize);

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Absent, Into::into)
    }
}

/// Validate and convert `raw` into an integer in `1..=max_input`.
///
/// # Errors
///
/// - [`CollatzError::InvalidFormat`] for absent, empty, non-numeric or
///   fractional input.
/// - [`CollatzError::OutOfRange`] for values `<= 0` or `> max_input`.
///
/// # Example
///
/// ```
/// use collatz_wormhole::numeric::{normalize, DEFAULT_MAX_INPUT};
///
/// assert_eq!(normalize(" 27 ".into(), DEFAULT_MAX_INPUT), Ok(27));
/// assert_eq!(normalize(42.0f64.into(), DEFAULT_MAX_INPUT), Ok(42));
/// assert!(normalize("3.14".into(), DEFAULT_MAX_INPUT).is_err());
/// ```
pub fn normalize(raw: RawInput, max_input: u64) -> Result<u64, CollatzError> {
    let value = match &raw {
        RawInput::Absent => return Err(invalid_format(&raw, "input cannot be absent")),
        RawInput::Text(text) => parse_text(text.trim(), max_input)?,
        RawInput::Float(x) => integral_float(*x, &raw)?,
        RawInput::Integer(i) => *i,
    };
    check_range(value, max_input)
}

fn parse_text(text: &str, max_input: u64) -> Result<i128, CollatzError> {
    if text.is_empty() {
        return Err(invalid_format(text, "input cannot be empty"));
    }
    if text.contains('.') {
        let x: f64 = text
            .parse()
            .map_err(|_| invalid_format(text, "not a number"))?;
        return integral_float(x, text);
    }
    text.parse::<i128>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CollatzError::OutOfRange {
            value: text.to_string(),
            limit: max_input,
        },
        _ => invalid_format(text, "not a number"),
    })
}

/// Accept a float only if it is finite and has no fractional part.
///
/// Magnitudes beyond `i128` saturate, which `check_range` then rejects.
fn integral_float(x: f64, shown: impl fmt::Display) -> Result<i128, CollatzError> {
    if !x.is_finite() {
        return Err(invalid_format(shown, "not a finite number"));
    }
    if x.fract() != 0.0 {
        return Err(invalid_format(shown, "not a whole number"));
    }
    Ok(x as i128)
}

fn check_range(value: i128, max_input: u64) -> Result<u64, CollatzError> {
    if value <= 0 || value > max_input as i128 {
        return Err(CollatzError::OutOfRange {
            value: value.to_string(),
            limit: max_input,
        });
    }
    Ok(value as u64)
}

fn invalid_format(shown: impl fmt::Display, reason: &str) -> CollatzError {
    CollatzError::InvalidFormat {
        input: shown.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::numeric::DEFAULT_MAX_INPUT;

    fn kind_of(raw: impl Into<RawInput>) -> ErrorKind {
        normalize(raw.into(), DEFAULT_MAX_INPUT).unwrap_err().kind()
    }

    #[test]
    fn test_text_integers() {
        assert_eq!(normalize("27".into(), DEFAULT_MAX_INPUT), Ok(27));
        assert_eq!(normalize("  15\n".into(), DEFAULT_MAX_INPUT), Ok(15));
        assert_eq!(normalize("+8".into(), DEFAULT_MAX_INPUT), Ok(8));
    }

    #[test]
    fn test_text_whole_floats() {
        assert_eq!(normalize("42.0".into(), DEFAULT_MAX_INPUT), Ok(42));
        assert_eq!(normalize("1.5e3".into(), DEFAULT_MAX_INPUT), Ok(1500));
    }

    #[test]
    fn test_floats_and_integers() {
        assert_eq!(normalize(42.0f64.into(), DEFAULT_MAX_INPUT), Ok(42));
        assert_eq!(normalize(7u8.into(), DEFAULT_MAX_INPUT), Ok(7));
        assert_eq!(normalize(DEFAULT_MAX_INPUT.into(), DEFAULT_MAX_INPUT), Ok(DEFAULT_MAX_INPUT));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(kind_of(""), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("   "), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("3.14"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("abc"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("1e3"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("nan."), ErrorKind::InvalidFormat);
        assert_eq!(kind_of(2.5f64), ErrorKind::InvalidFormat);
        assert_eq!(kind_of(f64::INFINITY), ErrorKind::InvalidFormat);
        assert_eq!(kind_of(f64::NAN), ErrorKind::InvalidFormat);
        assert_eq!(kind_of(None::<u64>), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(kind_of("-5"), ErrorKind::OutOfRange);
        assert_eq!(kind_of("0"), ErrorKind::OutOfRange);
        assert_eq!(kind_of("-0.0"), ErrorKind::OutOfRange);
        assert_eq!(kind_of(0i32), ErrorKind::OutOfRange);
        assert_eq!(kind_of(DEFAULT_MAX_INPUT + 1), ErrorKind::OutOfRange);
        assert_eq!(kind_of(1e300f64), ErrorKind::OutOfRange);
        assert_eq!(
            kind_of("999999999999999999999999999999999999999999999"),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn test_custom_ceiling() {
        assert_eq!(normalize(100u32.into(), 100), Ok(100));
        let err = normalize(101u32.into(), 100).unwrap_err();
        assert_eq!(
            err,
            CollatzError::OutOfRange {
                value: "101".to_string(),
                limit: 100
            }
        );
    }
}
