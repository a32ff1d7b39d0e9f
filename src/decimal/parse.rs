use std::str::FromStr;

use super::parse_decimal_error::{ParseDecimalError, ParseErrorKind};
use super::Decimal;
use crate::error::DecimalError;
use crate::zero_pad::pad_right;

/// Exponents beyond this are rejected rather than expanded into huge digit buffers. Nothing
/// representable needs more than 28 + 29 places of shift.
const MAX_EXPONENT: u32 = 64;

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Parses `[+-]digits[.digits][(e|E)[+-]digits]`. Fractional digits beyond what fits are
    /// rounded half to even; an integer part wider than 96 bits is an error.
    fn from_str(s: &str) -> Result<Decimal, ParseDecimalError> {
        let (is_negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
            Some(index) => (&unsigned[..index], Some(&unsigned[index + 1..])),
            None => (unsigned, None),
        };

        let mut digits = Vec::with_capacity(mantissa.len());
        let mut frac_len = 0;
        let mut seen_point = false;
        for c in mantissa.bytes() {
            match c {
                b'0'..=b'9' => {
                    digits.push(c - b'0');
                    if seen_point {
                        frac_len += 1;
                    }
                }
                b'.' if !seen_point => seen_point = true,
                _ => return Err(ParseDecimalError::new(ParseErrorKind::InvalidDigit)),
            }
        }
        if digits.is_empty() {
            return Err(ParseDecimalError::new(ParseErrorKind::Empty));
        }

        if let Some(exponent) = exponent {
            let exponent: i32 = exponent
                .parse()
                .map_err(|_| ParseDecimalError::new(ParseErrorKind::InvalidExponent))?;
            if exponent.unsigned_abs() > MAX_EXPONENT {
                return Err(ParseDecimalError::new(ParseErrorKind::InvalidExponent));
            }
            if exponent >= 0 {
                let shift = exponent as usize;
                if shift > frac_len {
                    digits = pad_right(&digits, shift - frac_len);
                    frac_len = 0;
                } else {
                    frac_len -= shift;
                }
            } else {
                frac_len += exponent.unsigned_abs() as usize;
            }
        }

        Decimal::from_digits(is_negative, &digits, frac_len).map_err(|err| match err {
            DecimalError::Overflow => ParseDecimalError::new(ParseErrorKind::Overflow),
            _ => ParseDecimalError::new(ParseErrorKind::InvalidDigit),
        })
    }
}
