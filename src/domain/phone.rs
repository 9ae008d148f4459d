//! The phone field is free text in the form but travels as bare digits.

use crate::constant::PHONE_DIGITS;

/// Drops every character that is not an ASCII digit.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Cosmetic mask applied on every keystroke: `DDD`, `DDD-DDD` or
/// `DDD-DDD-DDDD`. Digits past the tenth are dropped.
pub fn format_phone(value: &str) -> String {
    let digits: String = digits_only(value).chars().take(PHONE_DIGITS).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

pub fn is_complete(value: &str) -> bool {
    digits_only(value).len() == PHONE_DIGITS
}
