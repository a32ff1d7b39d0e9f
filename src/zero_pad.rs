//! Zero padding for digit buffers. A digit buffer holds one decimal digit (0 to 9) per byte,
//! most significant digit first.

pub fn zero_digits(num_zeros: usize) -> Vec<u8> {
    vec![0; num_zeros]
}

pub fn pad_left(digits: &[u8], num_zeros: usize) -> Vec<u8> {
    let mut padded = zero_digits(num_zeros);
    padded.extend_from_slice(digits);
    padded
}

pub fn pad_right(digits: &[u8], num_zeros: usize) -> Vec<u8> {
    let mut padded = digits.to_vec();
    padded.resize(digits.len() + num_zeros, 0);
    padded
}

/// Left-pads the shorter of the two buffers so both have the same length.
pub fn pad_to_same_len(left: &[u8], right: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let len = left.len().max(right.len());
    (pad_left(left, len - left.len()), pad_left(right, len - right.len()))
}
