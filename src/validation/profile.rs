use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

use crate::config::AgeWindow;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZçÇğĞıİöÖşŞüÜ\s]+$").expect("name pattern compiles")
});

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 50;

/// Validates a human name: 2-50 characters of Latin or Turkish letters and
/// whitespace, nothing else.
pub fn validate_name(name: &str) -> bool {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if len < NAME_MIN_LEN || len > NAME_MAX_LEN {
        return false;
    }
    NAME_RE.is_match(trimmed)
}

/// Validates a `YYYY-MM-DD` birth date against the eligibility window,
/// evaluated as of today.
pub fn validate_birth_date(date: &str, window: &AgeWindow) -> bool {
    validate_birth_date_on(date, window, Local::now().date_naive())
}

/// Same as [`validate_birth_date`] but with an explicit reference day, so
/// tests and batch re-checks are not tied to the wall clock.
pub fn validate_birth_date_on(date: &str, window: &AgeWindow, today: NaiveDate) -> bool {
    let Ok(parsed) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") else {
        return false;
    };
    if parsed > today {
        return false;
    }
    // Registrations predating civil records are data-entry noise.
    match NaiveDate::from_ymd_opt(1900, 1, 1) {
        Some(floor) if parsed < floor => return false,
        Some(_) => {}
        None => return false,
    }

    let mut age = today.year() - parsed.year();
    if (today.month(), today.day()) < (parsed.month(), parsed.day()) {
        age -= 1;
    }

    window.contains(age)
}

/// Validates free text by trimmed character count, inclusive on both bounds.
pub fn validate_text(text: &str, min_len: usize, max_len: usize) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    let len = trimmed.chars().count();
    len >= min_len && len <= max_len
}
