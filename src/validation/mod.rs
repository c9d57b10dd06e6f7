//! Pure field validators, sanitizers, and display formatters.
//!
//! Every validator is total: any input string yields a plain `bool`, never a
//! panic and never a partial result. Callers re-prompt the user on `false`.
//! The same functions run in the browser client and in the server-side
//! request handlers, so the two can never drift apart.

mod contact;
mod format;
mod identity;
mod profile;
mod sanitize;

#[cfg(test)]
mod tests;

pub use contact::{validate_email, validate_phone};
pub use format::{format_national_id, format_phone_number};
pub use identity::validate_national_id;
pub use profile::{validate_birth_date, validate_birth_date_on, validate_name, validate_text};
pub use sanitize::sanitize_input;
