//! Addition and subtraction.
//!
//! Two routes. Scale-0 operands of the same sign are summed directly on the 32-bit limbs. Every
//! other combination goes through digit buffers aligned on the decimal point.

use std::cmp::Ordering;

use super::Decimal;
use crate::digits;
use crate::error::{DecimalError, Result};

impl Decimal {
    /// `self + other`. Fails with `Overflow` if the integer part of the sum needs more than 96
    /// bits.
    ///
    /// Adding a zero of any scale returns the other operand unchanged: `1.5 + 0.000` is `1.5`.
    /// Of two zeros the one with the wider scale wins, so the sum does not depend on order.
    pub fn checked_add(&self, other: &Decimal) -> Result<Decimal> {
        if other.is_zero() && (!self.is_zero() || self.scale() >= other.scale()) {
            return Ok(*self);
        }
        if self.is_zero() {
            return Ok(*other);
        }
        if self.scale() == 0 && other.scale() == 0 && self.is_negative() == other.is_negative() {
            return add_limbs(self, other);
        }
        add_digits(self, other)
    }

    /// `self - other`, computed as `self + (-other)`.
    pub fn checked_sub(&self, other: &Decimal) -> Result<Decimal> {
        self.checked_add(&other.negated())
    }
}

/// Same-sign, scale-0 addition on the limbs, low to high with carry.
fn add_limbs(left: &Decimal, right: &Decimal) -> Result<Decimal> {
    let (lo, carry) = add_with_carry(left.lo, right.lo, false);
    let (mid, carry) = add_with_carry(left.mid, right.mid, carry);
    let (hi, carry) = add_with_carry(left.hi, right.hi, carry);
    if carry {
        tracing::debug!("carry out of the high limb");
        return Err(DecimalError::Overflow);
    }
    Ok(Decimal::from_limbs(lo, mid, hi, left.is_negative(), 0))
}

fn add_with_carry(left: u32, right: u32, carry: bool) -> (u32, bool) {
    let (sum, first) = left.overflowing_add(right);
    let (sum, second) = sum.overflowing_add(carry as u32);
    (sum, first || second)
}

/// Digit-buffer addition for any pair of operands. Opposite signs turn into a subtraction of
/// magnitudes: `-a + b` is `b - |a|` and `a + -b` is `a - |b|`.
fn add_digits(left: &Decimal, right: &Decimal) -> Result<Decimal> {
    tracing::trace!(left_scale = left.scale(), right_scale = right.scale(), "digit fallback");
    if left.is_negative() == right.is_negative() {
        add_same_sign(left, right)
    } else if left.is_negative() {
        sub_same_sign(right, &left.abs())
    } else {
        sub_same_sign(left, &right.abs())
    }
}

/// Fractional digits the result is printed with: the wider of the two operands.
///
/// `Display` always prints exactly `scale` fractional digits, so each operand's printed count
/// is its scale.
fn target_decimal_places(left: &Decimal, right: &Decimal) -> u32 {
    left.scale().max(right.scale())
}

fn add_same_sign(left: &Decimal, right: &Decimal) -> Result<Decimal> {
    let target = target_decimal_places(left, right);
    let (left_digits, right_digits, scale) = digits::align(
        &left.coefficient_digits(),
        left.scale(),
        &right.coefficient_digits(),
        right.scale(),
    );
    debug_assert_eq!(target, scale);
    let sum = digits::add(&left_digits, &right_digits);
    Decimal::from_digits(left.is_negative(), &sum, target as usize)
}

/// `left - right` for operands of the same sign. The smaller magnitude is always subtracted from
/// the larger one, and the sign flips when that meant swapping.
fn sub_same_sign(left: &Decimal, right: &Decimal) -> Result<Decimal> {
    let target = target_decimal_places(left, right);
    let left_coefficient = left.coefficient_digits();
    let right_coefficient = right.coefficient_digits();

    let magnitude_order =
        digits::cmp_aligned(&left_coefficient, left.scale(), &right_coefficient, right.scale());
    let (minuend, subtrahend, is_negative) = match magnitude_order {
        Ordering::Less => (
            (right_coefficient, right.scale()),
            (left_coefficient, left.scale()),
            !left.is_negative(),
        ),
        _ => (
            (left_coefficient, left.scale()),
            (right_coefficient, right.scale()),
            left.is_negative(),
        ),
    };

    let (minuend, subtrahend, scale) = digits::align(&minuend.0, minuend.1, &subtrahend.0, subtrahend.1);
    debug_assert_eq!(target, scale);
    let difference = digits::sub(&minuend, &subtrahend);
    // an all-zero difference comes back unsigned, still carrying `target` places
    Decimal::from_digits(is_negative, &difference, target as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::MAX_COEFFICIENT;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_add() {
        let expected = "13.7";
        let actual = dec("10.5").checked_add(&dec("3.2")).unwrap().to_string();
        assert_eq!(expected, actual);

        let expected = "2.00";
        let actual = dec("1").checked_add(&dec("1.00")).unwrap().to_string();
        assert_eq!(expected, actual);

        let expected = "0.3";
        let actual = dec("0.1").checked_add(&dec("0.2")).unwrap().to_string();
        assert_eq!(expected, actual);

        let expected = "-13.70";
        let actual = dec("-10.5").checked_add(&dec("-3.20")).unwrap().to_string();
        assert_eq!(expected, actual);

        let mut sum = Decimal::ZERO;
        let one = Decimal::ONE;
        for _ in 0..18 {
            sum = sum.checked_add(&one).unwrap();
        }
        assert_eq!(dec("18"), sum);
    }

    #[test]
    fn test_add_mixed_signs() {
        assert_eq!("7.3", dec("10.5").checked_add(&dec("-3.2")).unwrap().to_string());
        assert_eq!("-7.3", dec("-10.5").checked_add(&dec("3.2")).unwrap().to_string());
        assert_eq!("7.3", dec("-3.2").checked_add(&dec("10.5")).unwrap().to_string());
        assert_eq!("-1", dec("4").checked_add(&dec("-5")).unwrap().to_string());
        // cancelling out leaves an unsigned zero at the wider scale
        let zero = dec("-1.25").checked_add(&dec("1.250")).unwrap();
        assert_eq!("0.000", zero.to_string());
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_add_zero_keeps_scale() {
        let value = dec("1.50");
        assert_eq!("1.50", value.checked_add(&Decimal::ZERO).unwrap().to_string());
        assert_eq!("1.50", Decimal::ZERO.checked_add(&value).unwrap().to_string());
        let neg = dec("-1.50");
        assert_eq!("-1.50", neg.checked_add(&Decimal::ZERO).unwrap().to_string());
        assert_eq!("42", dec("42").checked_add(&Decimal::ZERO).unwrap().to_string());
        assert_eq!("0.000", Decimal::ZERO.checked_add(&dec("0.000")).unwrap().to_string());
        assert_eq!("0.000", dec("0.000").checked_add(&Decimal::ZERO).unwrap().to_string());
    }

    #[test]
    fn test_add_scaled_zero_keeps_other_operand() {
        let expected = "1.5";
        let actual = dec("1.5").checked_add(&dec("0.000")).unwrap().to_string();
        assert_eq!(expected, actual);

        let expected = "1.5";
        let actual = dec("0.000").checked_add(&dec("1.5")).unwrap().to_string();
        assert_eq!(expected, actual);

        let expected = "7";
        let actual = dec("0.00").checked_add(&dec("7")).unwrap().to_string();
        assert_eq!(expected, actual);

        let expected = "-2.5";
        let actual = dec("-2.5").checked_sub(&dec("0.0000")).unwrap().to_string();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_add_overflow() {
        let max = Decimal::MAX;
        assert_eq!(Err(DecimalError::Overflow), max.checked_add(&Decimal::ONE));
        assert_eq!(Err(DecimalError::Overflow), Decimal::MIN.checked_add(&Decimal::MIN));

        // 2^95 + 2^95 carries out of the high limb
        let half = Decimal::try_from_parts(1 << 95, 0, false).unwrap();
        assert_eq!(Err(DecimalError::Overflow), half.checked_add(&half));

        // carries between limbs stay inside
        let low_full = Decimal::try_from_parts(u32::MAX as u128, 0, false).unwrap();
        let sum = low_full.checked_add(&Decimal::ONE).unwrap();
        assert_eq!(1u128 << 32, sum.mantissa());

        let almost = Decimal::try_from_parts(MAX_COEFFICIENT - 1, 0, false).unwrap();
        assert_eq!(Decimal::MAX, almost.checked_add(&Decimal::ONE).unwrap());

        // fractional overflow goes through the digit buffers
        assert_eq!(Err(DecimalError::Overflow), max.checked_add(&dec("0.5")));
        assert_eq!(max, max.checked_add(&dec("0.4")).unwrap());
    }

    #[test]
    fn test_sub() {
        assert_eq!("7.3", dec("10.5").checked_sub(&dec("3.2")).unwrap().to_string());
        assert_eq!("-7.3", dec("3.2").checked_sub(&dec("10.5")).unwrap().to_string());
        assert_eq!("0.0", dec("10.5").checked_sub(&dec("10.5")).unwrap().to_string());
        assert_eq!("-2", dec("-5").checked_sub(&dec("-3")).unwrap().to_string());
        assert_eq!("2", dec("-3").checked_sub(&dec("-5")).unwrap().to_string());
        assert_eq!("13.7", dec("10.5").checked_sub(&dec("-3.2")).unwrap().to_string());
        assert_eq!("0.99", dec("1").checked_sub(&dec("0.01")).unwrap().to_string());
        assert_eq!("-0.001", dec("0.009").checked_sub(&dec("0.01")).unwrap().to_string());

        let eighteen = dec("18.00");
        let mut acc = eighteen;
        for _ in 0..18 {
            acc = acc.checked_sub(&Decimal::ONE).unwrap();
        }
        assert_eq!("0.00", acc.to_string());

        assert_eq!(Decimal::ZERO, Decimal::MAX.checked_sub(&Decimal::MAX).unwrap());
        assert_eq!(Decimal::ZERO, Decimal::MIN.checked_sub(&Decimal::MIN).unwrap());
        assert_eq!(Err(DecimalError::Overflow), Decimal::MIN.checked_sub(&Decimal::ONE));
    }

    proptest! {
        #[test]
        fn limb_and_digit_paths_agree(a in 0u128..=MAX_COEFFICIENT, b in 0u128..=MAX_COEFFICIENT, negative in any::<bool>()) {
            let a = Decimal::try_from_parts(a, 0, negative).unwrap();
            let b = Decimal::try_from_parts(b, 0, negative).unwrap();
            let fast = a.checked_add(&b);
            let fallback = add_digits(&a, &b);
            prop_assert_eq!(fast, fallback);
            if let (Ok(fast), Ok(fallback)) = (fast, fallback) {
                prop_assert_eq!(fast.scale(), fallback.scale());
            }
        }
    }
}
