use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for accepted leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Raw scholarship-exam application exactly as the form posts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarshipApplication {
    pub student_name: String,
    pub national_id: String,
    pub birth_date: String,
    pub grade_level: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub email: String,
    pub kvkk_accepted: bool,
}

/// Sanitized scholarship lead produced by the intake guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarshipLead {
    pub lead_id: LeadId,
    pub student_name: String,
    /// Stored in display form (`XXX XXX XXX XX`); validity was already proven.
    pub national_id: String,
    pub birth_date: NaiveDate,
    pub grade_level: String,
    pub parent_name: String,
    /// Stored in display form (`XXX XXX XX XX`).
    pub parent_phone: String,
    pub email: String,
    pub received_at: DateTime<Utc>,
}

/// Raw "intro lesson" request from the trial-lesson form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroLessonRequest {
    pub student_name: String,
    pub phone: String,
    pub subject: String,
    pub note: Option<String>,
    pub kvkk_accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroLessonLead {
    pub lead_id: LeadId,
    pub student_name: String,
    pub phone: String,
    pub subject: String,
    pub note: Option<String>,
    pub received_at: DateTime<Utc>,
}

/// Raw contact-form message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub kvkk_accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLead {
    pub lead_id: LeadId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

/// First field-level violation found in a submission. Recoverable: the UI
/// re-prompts the user with the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("`{field}` must be 2-50 letters")]
    InvalidName { field: &'static str },
    #[error("national id failed format or checksum validation")]
    InvalidNationalId,
    #[error("`{field}` is not a recognized mobile number")]
    InvalidPhone { field: &'static str },
    #[error("email address is malformed")]
    InvalidEmail,
    #[error("birth date is outside the eligible age bracket")]
    IneligibleBirthDate,
    #[error("`{field}` must be between {min} and {max} characters")]
    TextOutOfBounds {
        field: &'static str,
        min: usize,
        max: usize,
    },
    #[error("personal-data consent must be accepted before submitting")]
    ConsentNotAccepted,
}
