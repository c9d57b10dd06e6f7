use std::sync::LazyLock;

use regex::Regex;

use crate::config::CarrierPrefixes;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern compiles")
});

const EMAIL_MIN_LEN: usize = 5;
const EMAIL_MAX_LEN: usize = 100;

/// Validates a Turkish mobile number against the carrier allow-list.
///
/// After stripping whitespace the value must be exactly 10 digits starting
/// with `5`, and its three-digit prefix must be allow-listed. A number can
/// match the `5XXXXXXXXX` shape and still fail: prefixes like `510` are not
/// assigned to any carrier, and rejecting them early keeps obviously
/// unreachable numbers out of the lead pipeline.
pub fn validate_phone(phone: &str, prefixes: &CarrierPrefixes) -> bool {
    let cleaned: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.len() != 10 || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if !cleaned.starts_with('5') {
        return false;
    }

    let Ok(prefix) = cleaned[..3].parse::<u16>() else {
        return false;
    };
    prefixes.allows(prefix)
}

/// Validates an email address: trimmed length within 5-100 characters and a
/// conventional `local@domain.tld` shape.
pub fn validate_email(email: &str) -> bool {
    let trimmed = email.trim();
    let len = trimmed.chars().count();
    if len < EMAIL_MIN_LEN || len > EMAIL_MAX_LEN {
        return false;
    }
    EMAIL_RE.is_match(trimmed)
}
