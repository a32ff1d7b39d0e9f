//! Arithmetic on decimal digit buffers.
//!
//! This is the fallback used whenever the fixed-width limbs cannot do the job directly. A buffer
//! holds one digit value (0 to 9) per byte, most significant first, with no sign and no point.
//! Buffers never grow much past `2 * MAX_PRECISION` digits, so schoolbook algorithms are fine.

use std::cmp::Ordering;

use crate::zero_pad::{pad_right, pad_to_same_len};

/// Splits `num` into its decimal digits. Zero is `[0]`.
pub fn from_u128(mut num: u128) -> Vec<u8> {
    let mut digits = Vec::with_capacity(39);
    loop {
        digits.push((num % 10) as u8);
        num /= 10;
        if num == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Folds digits back into an integer, or `None` if the value does not fit in a `u128`.
pub fn to_u128(digits: &[u8]) -> Option<u128> {
    digits.iter().try_fold(0u128, |acc, &digit| {
        acc.checked_mul(10)?.checked_add(digit as u128)
    })
}

pub fn is_all_zeros(digits: &[u8]) -> bool {
    digits.iter().all(|&digit| digit == 0)
}

/// Drops leading zeros but keeps at least one digit.
pub fn strip_leading_zeros(digits: &[u8]) -> &[u8] {
    match digits.iter().position(|&digit| digit != 0) {
        Some(first) => &digits[first..],
        None => &digits[digits.len().saturating_sub(1)..],
    }
}

/// Drops trailing zeros but keeps at least one digit.
pub fn strip_trailing_zeros(digits: &[u8]) -> &[u8] {
    match digits.iter().rposition(|&digit| digit != 0) {
        Some(last) => &digits[..=last],
        None => &digits[..digits.len().min(1)],
    }
}

/// Compares two unsigned integers by significant length first, then digit by digit.
pub fn cmp_magnitude(left: &[u8], right: &[u8]) -> Ordering {
    let left = strip_leading_zeros(left);
    let right = strip_leading_zeros(right);
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

/// Right-pads both buffers to the larger of the two scales, then left-pads them to equal length,
/// so the digits line up column by column. Returns the aligned buffers and the common scale.
pub fn align(left: &[u8], left_scale: u32, right: &[u8], right_scale: u32) -> (Vec<u8>, Vec<u8>, u32) {
    let scale = left_scale.max(right_scale);
    let left = pad_right(left, (scale - left_scale) as usize);
    let right = pad_right(right, (scale - right_scale) as usize);
    let (left, right) = pad_to_same_len(&left, &right);
    (left, right, scale)
}

/// Compares two magnitudes that carry their own scales.
pub fn cmp_aligned(left: &[u8], left_scale: u32, right: &[u8], right_scale: u32) -> Ordering {
    let (left, right, _) = align(left, left_scale, right, right_scale);
    cmp_magnitude(&left, &right)
}

/// Column addition from the least significant end. A final carry prepends one digit.
pub fn add(left: &[u8], right: &[u8]) -> Vec<u8> {
    let (left, right) = pad_to_same_len(left, right);
    let mut sum = vec![0; left.len()];
    let mut carry = 0;
    for i in (0..left.len()).rev() {
        let column = left[i] + right[i] + carry;
        sum[i] = column % 10;
        carry = column / 10;
    }
    if carry > 0 {
        sum.insert(0, carry);
    }
    sum
}

/// Column subtraction with borrow. Returns the raw difference, unstripped, and whether a borrow
/// escaped the most significant column (meaning `left < right`).
fn sub_with_borrow(left: &[u8], right: &[u8]) -> (Vec<u8>, bool) {
    let (left, right) = pad_to_same_len(left, right);
    let mut difference = vec![0; left.len()];
    let mut borrow = 0;
    for i in (0..left.len()).rev() {
        let subtrahend = right[i] + borrow;
        if left[i] >= subtrahend {
            difference[i] = left[i] - subtrahend;
            borrow = 0;
        } else {
            difference[i] = left[i] + 10 - subtrahend;
            borrow = 1;
        }
    }
    (difference, borrow != 0)
}

/// `left - right` for `left >= right`, keeping the full aligned width so a caller can still
/// place a decimal point by counting from the right.
pub fn sub(left: &[u8], right: &[u8]) -> Vec<u8> {
    let (difference, borrowed) = sub_with_borrow(left, right);
    debug_assert!(!borrowed, "digit subtraction underflowed");
    difference
}

/// `left - right` with leading zeros stripped, or `None` when `left < right`.
///
/// This is the primitive long division uses to test whether one more multiple of the divisor
/// fits into the running remainder.
pub fn checked_sub(left: &[u8], right: &[u8]) -> Option<Vec<u8>> {
    match sub_with_borrow(left, right) {
        (_, true) => None,
        (difference, false) => Some(strip_leading_zeros(&difference).to_vec()),
    }
}

/// Schoolbook multiplication.
pub fn mul(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut columns = vec![0u32; left.len() + right.len()];
    for (i, &l) in left.iter().enumerate().rev() {
        for (j, &r) in right.iter().enumerate().rev() {
            columns[i + j + 1] += l as u32 * r as u32;
        }
    }
    for k in (1..columns.len()).rev() {
        let carry = columns[k] / 10;
        columns[k] %= 10;
        columns[k - 1] += carry;
    }
    let product: Vec<u8> = columns.into_iter().map(|column| column as u8).collect();
    strip_leading_zeros(&product).to_vec()
}
