//! Display-only formatters. These never signal validity: a value that does
//! not have the expected digit count is returned unchanged so the form keeps
//! showing exactly what the user typed.

/// Renders a 10-digit mobile number as `XXX XXX XX XX`.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return raw.to_string();
    }
    format!(
        "{} {} {} {}",
        &digits[..3],
        &digits[3..6],
        &digits[6..8],
        &digits[8..]
    )
}

/// Renders an 11-digit national id as `XXX XXX XXX XX`.
pub fn format_national_id(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 11 {
        return raw.to_string();
    }
    format!(
        "{} {} {} {}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    )
}
