use super::{consts, Decimal};
use crate::error::{DecimalError, Result};
use crate::num_ops::{num_decimal_digits, pow10};

impl Decimal {
    /// Square root by Newton-Raphson iteration.
    ///
    /// The iteration runs at full working precision until two consecutive guesses are equal or
    /// `SQRT_MAX_ITERATIONS` steps have been taken; hitting the cap is not an error. The root is
    /// then rounded to half the scale (rounded up to even first) of whichever is wider, the
    /// input or the converged root. Perfect squares come out exact: `sqrt(2.25)` is `1.5`,
    /// `sqrt(4.0000)` is `2.00`.
    pub fn sqrt(&self) -> Result<Decimal> {
        if self.is_negative() {
            return Err(DecimalError::NegativeSquareRoot);
        }
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }
        if *self == Decimal::ONE {
            return Ok(Decimal::ONE);
        }

        let (guess, converged) = newton_iterate(self, initial_guess(self)?)?;
        if !converged {
            tracing::debug!(value = %self, guess = %guess, "sqrt stopped at the iteration cap");
        }

        let root = guess.normalize();
        let mut scale = self.scale().max(root.scale());
        if scale % 2 == 1 {
            scale += 1;
        }
        root.rescale(scale / 2)
    }
}

/// Runs `guess <- (guess + value / guess) / 2` until two guesses in a row are equal or
/// `SQRT_MAX_ITERATIONS` steps have run. Returns the last guess and whether it settled.
fn newton_iterate(value: &Decimal, mut guess: Decimal) -> Result<(Decimal, bool)> {
    for _ in 0..consts::SQRT_MAX_ITERATIONS {
        let next = guess
            .checked_add(&value.true_divide(&guess)?)?
            .true_divide(&Decimal::TWO)?;
        if next == guess {
            return Ok((next, true));
        }
        guess = next;
    }
    Ok((guess, false))
}

/// A starting point within an order of magnitude of the root.
///
/// `exponent` is the number of integer digits, or minus the number of leading fractional zeros
/// plus one: about `floor(log10(x)) + 1`. Values between 0.1 and 1000 start from `x / 2 + 0.5`;
/// anything else starts from the power of ten halfway along.
fn initial_guess(value: &Decimal) -> Result<Decimal> {
    let exponent = num_decimal_digits(value.mantissa()) as i32 - value.scale() as i32;
    if (0..=3).contains(&exponent) {
        let half = Decimal::from_raw(5, 1, false);
        value.true_divide(&Decimal::TWO)?.checked_add(&half)
    } else if exponent > 3 {
        // at most 15, from the 29-digit maximum
        let shift = (exponent + 1) / 2;
        Ok(Decimal::from_raw(pow10(shift as u32), 0, false))
    } else {
        // 0.1^shift, at most 14 places from the 28-place minimum
        let shift = (-exponent + 1) / 2;
        Ok(Decimal::from_raw(1, shift as u32, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn sqrt(s: &str) -> String {
        dec(s).sqrt().unwrap().to_string()
    }

    #[test]
    fn test_sqrt_special_cases() {
        assert_eq!(Err(DecimalError::NegativeSquareRoot), dec("-4").sqrt());
        assert_eq!(Err(DecimalError::NegativeSquareRoot), dec("-0.01").sqrt());
        assert_eq!(Decimal::ZERO, Decimal::ZERO.sqrt().unwrap());
        assert_eq!("0", sqrt("0.000"));
        assert_eq!("1", sqrt("1"));
        assert_eq!("1", sqrt("1.00"));
    }

    #[test]
    fn test_sqrt_perfect_squares() {
        assert_eq!("2", sqrt("4"));
        assert_eq!("12", sqrt("144"));
        assert_eq!("1.5", sqrt("2.25"));
        assert_eq!("1.25", sqrt("1.5625"));
        assert_eq!("2.00", sqrt("4.0000"));
        assert_eq!("0.1", sqrt("0.01"));
        assert_eq!("1000", sqrt("1000000"));
        assert_eq!("100000000000000", sqrt("10000000000000000000000000000"));
    }

    #[test]
    fn test_sqrt_irrational() {
        let root = sqrt("2");
        assert!(root.starts_with("1.414213562"), "{}", root);
        assert_eq!("1.41421356237310", root);

        let root = sqrt("0.5");
        assert!(root.starts_with("0.707106781"), "{}", root);

        let root = sqrt("10");
        assert!(root.starts_with("3.162277660"), "{}", root);
    }

    #[test]
    fn test_sqrt_extremes() {
        // 2^96 - 1 has a root of about 2.8147e14
        let root = Decimal::MAX.sqrt().unwrap();
        assert!(root.to_string().starts_with("281474976710656"), "{}", root);

        let tiny = dec("0.0000000000000000000000000001");
        assert_eq!("0.00000000000001", tiny.sqrt().unwrap().to_string());
    }

    #[test]
    fn test_sqrt_at_iteration_cap() {
        // rounding leaves the guesses for 21 alternating in the last place
        let value = dec("21");
        let (guess, converged) = newton_iterate(&value, initial_guess(&value).unwrap()).unwrap();
        assert!(!converged);
        assert!(guess.to_string().starts_with("4.582575694955840"), "{}", guess);

        assert_eq!("4.58257569495584", sqrt("21"));
        assert!(sqrt("28").starts_with("5.29150262212918"));
        assert!(sqrt("101").starts_with("10.0498756211208"));
    }

    #[test]
    fn test_initial_guess() {
        assert_eq!(dec("1.5"), initial_guess(&dec("2")).unwrap());
        assert_eq!(dec("500"), initial_guess(&dec("999")).unwrap());
        assert_eq!(dec("100"), initial_guess(&dec("1000")).unwrap());
        assert_eq!(dec("1000"), initial_guess(&dec("12345")).unwrap());
        assert_eq!(dec("0.1"), initial_guess(&dec("0.05")).unwrap());
        assert_eq!(dec("0.01"), initial_guess(&dec("0.0005")).unwrap());
    }
}
