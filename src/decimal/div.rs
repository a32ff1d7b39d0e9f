//! Long division on digit buffers.
//!
//! Quotient digits come from repeated trial subtraction against a running remainder, so no
//! intermediate ever needs more than the digit buffers themselves. The cost grows with the square
//! of `WORKING_PRECISION`, which is fixed.

use std::cmp::Ordering;

use super::{consts, Decimal};
use crate::digits;
use crate::error::{DecimalError, Result};
use crate::zero_pad::pad_right;

impl Decimal {
    /// `self / divisor`, correct to 30 significant digits before the final rounding into the
    /// representation.
    ///
    /// Exact quotients lose their trailing zeros (`1 / 4` is `0.25`). Dividing zero keeps
    /// `max(0, scale(self) - scale(divisor))` places.
    pub fn true_divide(&self, divisor: &Decimal) -> Result<Decimal> {
        if divisor.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        if self.is_zero() {
            let scale = self.scale().saturating_sub(divisor.scale());
            return Ok(Decimal::from_raw(0, scale, false));
        }
        if self.bits_eq(divisor) {
            return Ok(Decimal::ONE);
        }
        let is_negative = self.is_negative() != divisor.is_negative();

        let dividend_digits = self.coefficient_digits();
        let dividend_digits = digits::strip_trailing_zeros(&dividend_digits);
        let divisor_digits = divisor.coefficient_digits();
        let divisor_digits = digits::strip_trailing_zeros(&divisor_digits);

        let (quotient, is_exact) = long_divide(dividend_digits, divisor_digits);
        let quotient = digits::strip_leading_zeros(&quotient);
        let quotient = if is_exact {
            digits::strip_trailing_zeros(quotient)
        } else {
            quotient
        };

        // Integer digits of the quotient. Comparing the trimmed buffers lexically compares the
        // two significands, both read as d.ddd.
        let mut num_left_digits = self.scientific_exponent() - divisor.scientific_exponent() + 1;
        if dividend_digits < divisor_digits {
            num_left_digits -= 1;
        }
        tracing::trace!(num_left_digits, is_exact, digits = quotient.len(), "long division");

        if num_left_digits <= 0 {
            let frac_len = quotient.len() + num_left_digits.unsigned_abs() as usize;
            Decimal::from_digits(is_negative, quotient, frac_len)
        } else if num_left_digits as usize >= quotient.len() {
            let padded = pad_right(quotient, num_left_digits as usize - quotient.len());
            Decimal::from_digits(is_negative, &padded, 0)
        } else {
            let frac_len = quotient.len() - num_left_digits as usize;
            Decimal::from_digits(is_negative, quotient, frac_len)
        }
    }

    /// Same as `true_divide`.
    pub fn checked_div(&self, divisor: &Decimal) -> Result<Decimal> {
        self.true_divide(divisor)
    }
}

/// Schoolbook long division of two nonzero digit buffers.
///
/// Returns the raw quotient digits, leading zeros included, and whether the division came out
/// exact (remainder zero with every dividend digit consumed). Stops after `WORKING_PRECISION`
/// significant quotient digits.
fn long_divide(dividend: &[u8], divisor: &[u8]) -> (Vec<u8>, bool) {
    let mut quotient = Vec::with_capacity(dividend.len() + consts::WORKING_PRECISION);
    let mut remainder: Vec<u8> = Vec::with_capacity(divisor.len() + 1);
    let mut num_significant = 0;
    let mut position = 0;

    while num_significant < consts::WORKING_PRECISION {
        // bring down the next digit, or a zero once the dividend runs out
        remainder.push(dividend.get(position).copied().unwrap_or(0));
        position += 1;
        remainder = digits::strip_leading_zeros(&remainder).to_vec();

        let mut count = 0u8;
        if digits::cmp_magnitude(&remainder, divisor) != Ordering::Less {
            while let Some(difference) = digits::checked_sub(&remainder, divisor) {
                remainder = difference;
                count += 1;
            }
        }
        quotient.push(count);
        if count > 0 || num_significant > 0 {
            num_significant += 1;
        }

        if position >= dividend.len() && digits::is_all_zeros(&remainder) {
            return (quotient, true);
        }
    }
    (quotient, false)
}
