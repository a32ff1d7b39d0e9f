/// `start` and `end` are 0-based from LSB (least significant bit).
/// `start` is inclusive and `end` is exclusive.
pub fn get_bits(bits: u32, start: usize, end: usize) -> u32 {
    (bits & mask(start, end)) >> start
}

/// Replaces the bits in `start..end` with the low bits of `value`. Bits of `value` that do not
/// fit in the field are dropped.
pub fn set_bits(bits: u32, start: usize, end: usize, value: u32) -> u32 {
    let mask = mask(start, end);
    (bits & !mask) | ((value << start) & mask)
}

pub fn set_bit(bits: u32, bit_index: usize) -> u32 {
    let mask = 1 << bit_index;
    bits | mask
}

pub fn clear_bit(bits: u32, bit_index: usize) -> u32 {
    let mask = !(1 << bit_index);
    bits & mask
}

pub fn toggle_bit(bits: u32, bit_index: usize) -> u32 {
    let mask = 1 << bit_index;
    bits ^ mask
}

fn mask(start: usize, end: usize) -> u32 {
    let width = end - start;
    if width >= 32 {
        !0
    } else {
        // !0 is equal to 0xffffffff
        !(!0u32 << width) << start
    }
}
