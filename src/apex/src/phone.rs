//! Phone number helpers for Mexican ten-digit numbers.

use crate::LeadError;

pub const MEXICAN_PHONE_DIGITS: usize = 10;

/// Keeps only the ASCII digits of `phone`.
pub fn digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Valid when exactly ten digits remain after dropping separators.
pub fn validate_mexican_phone(phone: &str) -> bool {
    digits(phone).len() == MEXICAN_PHONE_DIGITS
}

/// Formats as `(XX) XXXX-XXXX`, or returns the input unchanged if it is not ten digits.
pub fn format_mexican_phone(phone: &str) -> String {
    let cleaned = digits(phone);
    if cleaned.len() != MEXICAN_PHONE_DIGITS {
        return phone.to_string();
    }
    format!("({}) {}-{}", &cleaned[..2], &cleaned[2..6], &cleaned[6..])
}

pub fn check_min_digits(phone: &str, min: usize) -> Result<(), LeadError> {
    let got = digits(phone).len();
    if got < min {
        return Err(LeadError::PhoneTooShort { min, got });
    }
    Ok(())
}
