use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::{consts, Decimal};
use crate::num_ops::pow10;

/// Splits the magnitude into its integer part and its fractional part stretched to 28 digits.
/// Both halves fit in a `u128`, so two magnitudes compare as plain tuples whatever their scales.
fn magnitude_key(value: &Decimal) -> (u128, u128) {
    let scale = value.scale();
    let unit = pow10(scale);
    let coefficient = value.mantissa();
    (coefficient / unit, (coefficient % unit) * pow10(consts::MAX_SCALE - scale))
}

impl Ord for Decimal {
    fn cmp(&self, other: &Decimal) -> Ordering {
        // zero is never negative, so the sign flags alone order mixed signs
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => magnitude_key(self).cmp(&magnitude_key(other)),
            (true, true) => magnitude_key(other).cmp(&magnitude_key(self)),
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric equality: `1.0 == 1.00`.
impl PartialEq for Decimal {
    fn eq(&self, other: &Decimal) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // equal values share one normalized form
        self.normalize().get_data().hash(state);
    }
}
