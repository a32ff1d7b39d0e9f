use std::fmt;

use super::Decimal;
use crate::digits;
use crate::zero_pad::{pad_left, pad_right};

impl fmt::Display for Decimal {
    /// Prints the sign, the integer digits and exactly `scale` fractional digits, trailing zeros
    /// included. A precision (`{:.2}`) rounds half to even or pads with zeros to that many places.
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let value = match formatter.precision() {
            Some(precision) => self.round_dp(precision as u32),
            None => *self,
        };
        let scale = value.scale() as usize;
        let extra_zeros = formatter
            .precision()
            .map_or(0, |precision| precision.saturating_sub(scale));

        let mut digits = digits::from_u128(value.mantissa());
        if digits.len() <= scale {
            // at least one integer digit
            digits = pad_left(&digits, scale + 1 - digits.len());
        }
        digits = pad_right(&digits, extra_zeros);
        let num_left_digits = digits.len() - scale - extra_zeros;

        let mut decimal_str = String::with_capacity(digits.len() + 1);
        for (i, digit) in digits.iter().enumerate() {
            if i == num_left_digits {
                decimal_str.push('.');
            }
            decimal_str.push((b'0' + digit) as char);
        }
        formatter.pad_integral(!value.is_negative(), "", &decimal_str)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let (is_negative, scale, coefficient) = self.get_data();
        write!(
            formatter,
            "Decimal {{ is_negative: {}, scale: {}, coefficient: {} }}",
            is_negative, scale, coefficient
        )
    }
}
