use crate::bit_ops;
use crate::digits;
use crate::error::{DecimalError, Result};
use crate::num_ops::{num_decimal_digits, pow10, round_half_even};

mod add;
mod cmp;
mod div;
mod format;
mod mul;
mod ops;
mod parse;
pub mod parse_decimal_error;
mod pow;
#[cfg(feature = "serde")]
mod serde_impl;
mod sqrt;

const SIGN_BIT: usize = 31;
const SCALE_START: usize = 16;
const SCALE_END: usize = 24;

/// Largest coefficient the three limbs can hold, `2^96 - 1`.
pub(crate) const MAX_COEFFICIENT: u128 = (1 << 96) - 1;

/// An exact decimal number: a sign, a 96-bit unsigned coefficient, and a scale between 0 and 28.
///
/// The value is `(-1)^sign * coefficient * 10^-scale`. The sign and scale share one flags word
/// (sign in bit 31, scale in bits 16 to 23) next to three 32-bit coefficient limbs.
///
/// Values are immutable; every operation returns a new `Decimal`. Zero may carry any scale, so
/// `0.00` keeps printing as `0.00`, but it is never negative.
#[derive(Clone, Copy)]
pub struct Decimal {
    flags: u32,
    hi: u32,
    mid: u32,
    lo: u32,
}

pub mod consts {
    use super::Decimal;

    /// Most fractional digits a value can carry.
    pub const MAX_SCALE: u32 = 28;
    /// Digits in the largest coefficient, `79228162514264337593543950335`.
    pub const MAX_PRECISION: usize = 29;
    /// Significant quotient digits long division produces before stopping. One guard digit past
    /// what the representation can hold, so the final rounding has something to look at.
    pub const WORKING_PRECISION: usize = MAX_PRECISION + 1;
    /// Upper bound on Newton-Raphson steps taken by `Decimal::sqrt`.
    pub const SQRT_MAX_ITERATIONS: usize = 100;

    pub const ZERO: Decimal = Decimal::ZERO;
    pub const ONE: Decimal = Decimal::ONE;
    pub const TWO: Decimal = Decimal::TWO;
    pub const MAX: Decimal = Decimal::MAX;
    pub const MIN: Decimal = Decimal::MIN;
}

impl Decimal {
    pub const ZERO: Decimal = Decimal { flags: 0, hi: 0, mid: 0, lo: 0 };
    pub const ONE: Decimal = Decimal { flags: 0, hi: 0, mid: 0, lo: 1 };
    pub const TWO: Decimal = Decimal { flags: 0, hi: 0, mid: 0, lo: 2 };
    /// `79228162514264337593543950335`
    pub const MAX: Decimal = Decimal { flags: 0, hi: !0, mid: !0, lo: !0 };
    /// `-79228162514264337593543950335`
    pub const MIN: Decimal = Decimal { flags: 1 << SIGN_BIT, hi: !0, mid: !0, lo: !0 };

    /// Creates a decimal equal to `num * 10^-scale`.
    pub fn new(num: i64, scale: u32) -> Result<Decimal> {
        Decimal::try_from_parts(num.unsigned_abs() as u128, scale, num < 0)
    }

    /// Creates a decimal from its significant parts: the coefficient, the scale, and the sign.
    ///
    /// Fails with `Overflow` if the coefficient needs more than 96 bits and with
    /// `ScaleOutOfRange` if the scale is above 28.
    pub fn try_from_parts(coefficient: u128, scale: u32, is_negative: bool) -> Result<Decimal> {
        if scale > consts::MAX_SCALE {
            return Err(DecimalError::ScaleOutOfRange(scale));
        }
        if coefficient > MAX_COEFFICIENT {
            return Err(DecimalError::Overflow);
        }
        Ok(Decimal::from_raw(coefficient, scale, is_negative))
    }

    /// Unchecked constructor. `coefficient` must fit in 96 bits and `scale` must be at most 28.
    /// A zero coefficient always comes out positive.
    pub(crate) fn from_raw(coefficient: u128, scale: u32, is_negative: bool) -> Decimal {
        debug_assert!(coefficient <= MAX_COEFFICIENT);
        debug_assert!(scale <= consts::MAX_SCALE);
        Decimal::from_limbs(
            coefficient as u32,
            (coefficient >> 32) as u32,
            (coefficient >> 64) as u32,
            is_negative,
            scale,
        )
    }

    pub(crate) fn from_limbs(lo: u32, mid: u32, hi: u32, is_negative: bool, scale: u32) -> Decimal {
        let mut flags = bit_ops::set_bits(0, SCALE_START, SCALE_END, scale);
        if is_negative && (lo | mid | hi) != 0 {
            flags = bit_ops::set_bit(flags, SIGN_BIT);
        }
        Decimal { flags, hi, mid, lo }
    }

    /// The standard digit constructor: builds a decimal out of a digit buffer whose last
    /// `frac_len` digits sit right of the point.
    ///
    /// Fractional digits that do not fit (scale above 28, or a coefficient above 96 bits) are
    /// rounded away half to even. Fails with `Overflow` only when the integer part alone does not
    /// fit. Parsing and every digit-buffer fallback go through here.
    pub(crate) fn from_digits(is_negative: bool, digits: &[u8], frac_len: usize) -> Result<Decimal> {
        let padded;
        let digits = if frac_len > digits.len() {
            padded = crate::zero_pad::pad_left(digits, frac_len - digits.len());
            &padded[..]
        } else {
            digits
        };
        let int_len = digits.len() - frac_len;

        let mut keep = frac_len.min(consts::MAX_SCALE as usize);
        loop {
            let (kept, dropped) = digits.split_at(int_len + keep);
            match digits::to_u128(kept) {
                Some(coefficient) if coefficient <= MAX_COEFFICIENT => {
                    let next_digit = dropped.first().copied().unwrap_or(0);
                    let sticky = dropped.len() > 1 && !digits::is_all_zeros(&dropped[1..]);
                    let rounded = round_half_even(coefficient, next_digit, sticky);
                    if rounded <= MAX_COEFFICIENT {
                        return Ok(Decimal::from_raw(rounded, keep as u32, is_negative));
                    }
                }
                _ => {}
            }
            if keep == 0 {
                tracing::debug!(int_len, "integer part does not fit in 96 bits");
                return Err(DecimalError::Overflow);
            }
            keep -= 1;
        }
    }

    /// Returns the three defining pieces of the decimal - the sign (true if negative), the
    /// scale, and the coefficient, respectively.
    pub fn get_data(&self) -> (bool, u32, u128) {
        (self.is_negative(), self.scale(), self.mantissa())
    }

    /// Number of digits right of the decimal point.
    pub fn scale(&self) -> u32 {
        bit_ops::get_bits(self.flags, SCALE_START, SCALE_END)
    }

    /// The unsigned coefficient as an integer.
    pub fn mantissa(&self) -> u128 {
        (self.hi as u128) << 64 | (self.mid as u128) << 32 | self.lo as u128
    }

    /// The unsigned coefficient as plain digits, with no sign and no point. `-1.50` gives
    /// `"150"`.
    pub fn coefficient(&self) -> String {
        self.coefficient_digits().iter().map(|&digit| (b'0' + digit) as char).collect()
    }

    pub(crate) fn coefficient_digits(&self) -> Vec<u8> {
        digits::from_u128(self.mantissa())
    }

    pub fn is_zero(&self) -> bool {
        (self.lo | self.mid | self.hi) == 0
    }

    /// True if strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.get_sign_field() != 0
    }

    /// Same as `is_negative`: the sign bit is never set on zero.
    pub fn is_sign_negative(&self) -> bool {
        self.is_negative()
    }

    /// True if strictly above zero.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.is_negative()
    }

    /// True if the value has no fractional part, either because the scale is 0 or because every
    /// fractional digit is a zero (`2.00`).
    pub fn is_integer(&self) -> bool {
        self.mantissa() % pow10(self.scale()) == 0
    }

    /// Position of the most significant digit relative to the decimal point: `123.4` gives 2,
    /// `0.05` gives -2.
    pub fn scientific_exponent(&self) -> i32 {
        num_decimal_digits(self.mantissa()) as i32 - 1 - self.scale() as i32
    }

    pub fn abs(&self) -> Decimal {
        Decimal { flags: bit_ops::clear_bit(self.flags, SIGN_BIT), ..*self }
    }

    /// Strips trailing fractional zeros: `1.500` becomes `1.5`, `0.00` becomes `0`.
    pub fn normalize(&self) -> Decimal {
        let mut coefficient = self.mantissa();
        let mut scale = self.scale();
        while scale > 0 && coefficient % 10 == 0 {
            coefficient /= 10;
            scale -= 1;
        }
        Decimal::from_raw(coefficient, scale, self.is_negative())
    }

    /// Rounds half to even so that at most `dp` fractional digits remain. Values that already
    /// have `dp` or fewer fractional digits are returned unchanged.
    pub fn round_dp(&self, dp: u32) -> Decimal {
        let scale = self.scale();
        if dp >= scale {
            return *self;
        }
        let drop = scale - dp;
        let coefficient = self.mantissa();
        let kept = coefficient / pow10(drop);
        let dropped = coefficient % pow10(drop);
        let next_digit = (dropped / pow10(drop - 1)) as u8;
        let sticky = dropped % pow10(drop - 1) != 0;
        // rounding up a coefficient shortened by at least one digit cannot leave 96 bits
        Decimal::from_raw(round_half_even(kept, next_digit, sticky), dp, self.is_negative())
    }

    /// Returns the same value with exactly `scale` fractional digits, rounding half to even when
    /// shortening and padding with zeros when lengthening.
    pub fn rescale(&self, scale: u32) -> Result<Decimal> {
        if scale > consts::MAX_SCALE {
            return Err(DecimalError::ScaleOutOfRange(scale));
        }
        if scale <= self.scale() {
            return Ok(self.round_dp(scale));
        }
        let coefficient = self
            .mantissa()
            .checked_mul(pow10(scale - self.scale()))
            .ok_or(DecimalError::Overflow)?;
        Decimal::try_from_parts(coefficient, scale, self.is_negative())
    }

    /// True if both decimals have identical bits: same sign, same scale, same limbs.
    pub(crate) fn bits_eq(&self, other: &Decimal) -> bool {
        self.flags == other.flags && self.hi == other.hi && self.mid == other.mid && self.lo == other.lo
    }

    fn get_sign_field(&self) -> u32 {
        bit_ops::get_bits(self.flags, SIGN_BIT, SIGN_BIT + 1)
    }

    pub(crate) fn negated(&self) -> Decimal {
        if self.is_zero() {
            *self
        } else {
            Decimal { flags: bit_ops::toggle_bit(self.flags, SIGN_BIT), ..*self }
        }
    }
}

impl Default for Decimal {
    fn default() -> Decimal {
        Decimal::ZERO
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(num: $t) -> Decimal {
                    Decimal::from_raw(num as u128, 0, false)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(num: $t) -> Decimal {
                    Decimal::from_raw(num.unsigned_abs() as u128, 0, num < 0)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64);
impl_from_signed!(i8, i16, i32, i64);

impl TryFrom<u128> for Decimal {
    type Error = DecimalError;

    fn try_from(num: u128) -> Result<Decimal> {
        Decimal::try_from_parts(num, 0, false)
    }
}

impl TryFrom<i128> for Decimal {
    type Error = DecimalError;

    fn try_from(num: i128) -> Result<Decimal> {
        Decimal::try_from_parts(num.unsigned_abs(), 0, num < 0)
    }
}
