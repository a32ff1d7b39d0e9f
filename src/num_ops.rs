/// Number of decimal digits needed to print `num`. Zero takes one digit.
pub fn num_decimal_digits(mut num: u128) -> u32 {
    let mut digits = 1;
    while num >= 10 {
        num /= 10;
        digits += 1;
    }
    digits
}

/// `10^exp`. `exp` must be at most 38, the largest power of ten that fits in a `u128`.
pub fn pow10(exp: u32) -> u128 {
    num::pow(10u128, exp as usize)
}

/// Rounds half to even.
///
/// `kept` is the truncated value, `next_digit` the first discarded digit, and `sticky` tells
/// whether any nonzero digit was discarded after `next_digit`.
pub fn round_half_even(kept: u128, next_digit: u8, sticky: bool) -> u128 {
    let round_up = match next_digit {
        0..=4 => false,
        5 => sticky || kept % 2 == 1,
        _ => true,
    };
    if round_up {
        kept + 1
    } else {
        kept
    }
}
