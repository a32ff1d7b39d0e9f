use super::Decimal;
use crate::error::{DecimalError, Result};
use crate::num_ops::pow10;

impl Decimal {
    /// Raises `self` to an integer power.
    ///
    /// `exponent` may carry a scale as long as its value is integral (`2.0` is fine, `2.5` fails
    /// with `NonIntegerExponent`). Zero to a negative power fails with `UndefinedOperation`, and
    /// `0^0` is one. Negative exponents compute the positive power and take its reciprocal.
    pub fn power(&self, exponent: &Decimal) -> Result<Decimal> {
        if !exponent.is_integer() {
            return Err(DecimalError::NonIntegerExponent);
        }
        if exponent.is_zero() {
            return Ok(Decimal::ONE);
        }
        if *exponent == Decimal::ONE {
            return Ok(*self);
        }
        if self.is_zero() {
            return if exponent.is_negative() {
                Err(DecimalError::UndefinedOperation)
            } else {
                Ok(Decimal::ZERO)
            };
        }
        if *self == Decimal::ONE {
            return Ok(Decimal::ONE);
        }

        let magnitude = exponent.mantissa() / pow10(exponent.scale());
        let result = binary_pow(self, magnitude)?;
        if exponent.is_negative() {
            Decimal::ONE.true_divide(&result)
        } else {
            Ok(result)
        }
    }

    /// `power` with a machine-integer exponent.
    pub fn powi(&self, exponent: i64) -> Result<Decimal> {
        self.power(&Decimal::from(exponent))
    }
}

/// Square-and-multiply over the bits of `exponent`, least significant first. The base is not
/// squared after the last bit so a result that fits never fails on a square it does not need.
fn binary_pow(base: &Decimal, mut exponent: u128) -> Result<Decimal> {
    let mut result = Decimal::ONE;
    let mut base = *base;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.checked_mul(&base)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.checked_mul(&base)?;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_powi() {
        assert_eq!("1024", dec("2").powi(10).unwrap().to_string());
        assert_eq!("-27", dec("-3").powi(3).unwrap().to_string());
        assert_eq!("81", dec("-3").powi(4).unwrap().to_string());
        assert_eq!("2.25", dec("1.5").powi(2).unwrap().to_string());
        assert_eq!("1.331", dec("1.1").powi(3).unwrap().to_string());
        assert_eq!("0.001", dec("0.1").powi(3).unwrap().to_string());
    }

    #[test]
    fn test_power_special_cases() {
        assert_eq!(Decimal::ONE, dec("123.45").powi(0).unwrap());
        assert_eq!(Decimal::ONE, Decimal::ZERO.powi(0).unwrap());
        assert_eq!("123.45", dec("123.45").powi(1).unwrap().to_string());
        assert_eq!("123.45", dec("123.45").power(&dec("1.00")).unwrap().to_string());
        assert_eq!(Decimal::ZERO, Decimal::ZERO.powi(5).unwrap());
        assert_eq!(Err(DecimalError::UndefinedOperation), Decimal::ZERO.powi(-1));
        assert_eq!(Decimal::ONE, Decimal::ONE.powi(-1000).unwrap());
        assert_eq!(Decimal::ONE, dec("1.000").powi(i64::MAX).unwrap());
        assert_eq!(dec("-1"), dec("-1").powi(i64::MAX).unwrap());
    }

    #[test]
    fn test_power_exponent_must_be_integral() {
        assert_eq!("8", dec("2").power(&dec("3.0")).unwrap().to_string());
        assert_eq!(Err(DecimalError::NonIntegerExponent), dec("2").power(&dec("0.5")));
        assert_eq!(Err(DecimalError::NonIntegerExponent), dec("2").power(&dec("-1.5")));
    }

    #[test]
    fn test_negative_exponent() {
        assert_eq!("0.25", dec("2").powi(-2).unwrap().to_string());
        assert_eq!("0.0009765625", dec("2").powi(-10).unwrap().to_string());
        assert_eq!("-0.125", dec("-2").powi(-3).unwrap().to_string());
        assert_eq!("100", dec("0.1").powi(-2).unwrap().to_string());

        let x = dec("3");
        let expected = Decimal::ONE.true_divide(&x.powi(5).unwrap()).unwrap();
        assert_eq!(expected, x.powi(-5).unwrap());
    }

    #[test]
    fn test_power_overflow() {
        assert_eq!(Err(DecimalError::Overflow), dec("2").powi(96));
        assert_eq!(
            "39614081257132168796771975168",
            dec("2").powi(95).unwrap().to_string()
        );
        assert_eq!(Err(DecimalError::Overflow), dec("10").powi(29));
        assert_eq!("10000000000000000000000000000", dec("10").powi(28).unwrap().to_string());
    }
}
