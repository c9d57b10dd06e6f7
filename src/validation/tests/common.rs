use chrono::NaiveDate;

use crate::config::{AgeWindow, CarrierPrefixes};

/// Known-valid national id used widely in Turkish test suites.
pub(super) const VALID_NATIONAL_ID: &str = "10000000146";

pub(super) fn carriers() -> CarrierPrefixes {
    CarrierPrefixes::default()
}

pub(super) fn age_window() -> AgeWindow {
    AgeWindow::new(13, 20)
}

/// Fixed reference day so age arithmetic is deterministic.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid date")
}
