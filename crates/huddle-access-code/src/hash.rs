//! Rolling checksum behind the code's base digits.
//!
//! This is the classic `h = h * 31 + unit` string hash over UTF-16 code units,
//! truncated to a signed 32-bit integer after every step. It is not a MAC; the
//! arithmetic must stay bit-for-bit stable so existing codes keep resolving.

/// Lowest value of the base-digit field.
pub const BASE_DIGITS_MIN: u16 = 1000;

/// Number of distinct base-digit values (1000..=9999).
pub const BASE_DIGITS_SPAN: u64 = 9000;

pub fn rolling_hash(seed: &str) -> i32 {
    seed.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Map a hash onto the 4-digit range `1000..=9999`.
///
/// The absolute value is taken in 64 bits so `i32::MIN` maps like any other value.
pub fn base_digits(hash: i32) -> u16 {
    let folded = i64::from(hash).unsigned_abs() % BASE_DIGITS_SPAN;
    // folded < 9000, always fits
    folded as u16 + BASE_DIGITS_MIN
}
