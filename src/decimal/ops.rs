//! Operator overloads and `num` trait glue.
//!
//! The arithmetic operators panic when the checked operation fails, the way integer overflow
//! panics in debug builds. Use the `checked_*` methods, `power`, and `sqrt` to get a `Result`.

use std::ops;

use num::traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Pow, Zero};

use super::Decimal;
use crate::error::Result;

impl ops::Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        self.negated()
    }
}

impl<'a> ops::Neg for &'a Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        self.negated()
    }
}

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $checked:ident) => {
        impl ops::$op<Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, other: Decimal) -> Decimal {
                match self.$checked(&other) {
                    Ok(result) => result,
                    Err(err) => panic!("{}", err),
                }
            }
        }

        impl<'a> ops::$op<&'a Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, other: &Decimal) -> Decimal {
                match self.$checked(other) {
                    Ok(result) => result,
                    Err(err) => panic!("{}", err),
                }
            }
        }

        impl<'a> ops::$op<Decimal> for &'a Decimal {
            type Output = Decimal;

            fn $method(self, other: Decimal) -> Decimal {
                match self.$checked(&other) {
                    Ok(result) => result,
                    Err(err) => panic!("{}", err),
                }
            }
        }

        impl<'a, 'b> ops::$op<&'b Decimal> for &'a Decimal {
            type Output = Decimal;

            fn $method(self, other: &Decimal) -> Decimal {
                match self.$checked(other) {
                    Ok(result) => result,
                    Err(err) => panic!("{}", err),
                }
            }
        }
    };
}

impl_binary_op!(Add, add, checked_add);
impl_binary_op!(Sub, sub, checked_sub);
impl_binary_op!(Mul, mul, checked_mul);
impl_binary_op!(Div, div, true_divide);

impl Zero for Decimal {
    fn zero() -> Decimal {
        Decimal::ZERO
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

impl One for Decimal {
    fn one() -> Decimal {
        Decimal::ONE
    }
}

impl CheckedAdd for Decimal {
    fn checked_add(&self, other: &Decimal) -> Option<Decimal> {
        Decimal::checked_add(self, other).ok()
    }
}

impl CheckedSub for Decimal {
    fn checked_sub(&self, other: &Decimal) -> Option<Decimal> {
        Decimal::checked_sub(self, other).ok()
    }
}

impl CheckedMul for Decimal {
    fn checked_mul(&self, other: &Decimal) -> Option<Decimal> {
        Decimal::checked_mul(self, other).ok()
    }
}

impl CheckedDiv for Decimal {
    fn checked_div(&self, other: &Decimal) -> Option<Decimal> {
        Decimal::true_divide(self, other).ok()
    }
}

impl Pow<i64> for Decimal {
    type Output = Result<Decimal>;

    fn pow(self, exponent: i64) -> Result<Decimal> {
        self.powi(exponent)
    }
}

impl Pow<Decimal> for Decimal {
    type Output = Result<Decimal>;

    fn pow(self, exponent: Decimal) -> Result<Decimal> {
        self.power(&exponent)
    }
}

impl<'a> Pow<&'a Decimal> for Decimal {
    type Output = Result<Decimal>;

    fn pow(self, exponent: &Decimal) -> Result<Decimal> {
        self.power(exponent)
    }
}
