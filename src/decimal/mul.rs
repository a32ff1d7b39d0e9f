use super::{consts, Decimal, MAX_COEFFICIENT};
use crate::digits;
use crate::error::Result;

impl Decimal {
    /// `self * other`, exact whenever the product fits: the result scale is the sum of the
    /// operand scales.
    ///
    /// When the exact product needs a scale above 28 or more than 96 bits, fractional digits are
    /// rounded half to even until it fits. Fails with `Overflow` when the integer part of the
    /// product alone is too wide, so integer products never lose digits.
    pub fn checked_mul(&self, other: &Decimal) -> Result<Decimal> {
        let is_negative = self.is_negative() != other.is_negative();
        let scale = self.scale() + other.scale();

        if let Some(product) = self.mantissa().checked_mul(other.mantissa()) {
            if product <= MAX_COEFFICIENT && scale <= consts::MAX_SCALE {
                return Ok(Decimal::from_raw(product, scale, is_negative));
            }
        }

        tracing::trace!(scale, "product does not fit, multiplying digit buffers");
        let product = digits::mul(&self.coefficient_digits(), &other.coefficient_digits());
        Decimal::from_digits(is_negative, &product, scale as usize)
    }
}
