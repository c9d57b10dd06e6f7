use chrono::{NaiveDate, Utc};

use super::domain::{
    ContactLead, ContactMessage, IntakeViolation, IntroLessonLead, IntroLessonRequest, LeadId,
    ScholarshipApplication, ScholarshipLead,
};
use crate::config::ValidationConfig;
use crate::validation::{
    format_national_id, format_phone_number, sanitize_input, validate_birth_date, validate_email,
    validate_name, validate_national_id, validate_phone, validate_text,
};

const GRADE_MIN_LEN: usize = 1;
const GRADE_MAX_LEN: usize = 30;
const SUBJECT_MIN_LEN: usize = 2;
const SUBJECT_MAX_LEN: usize = 100;
const MESSAGE_MIN_LEN: usize = 10;
const MESSAGE_MAX_LEN: usize = 1000;
const NOTE_MAX_LEN: usize = 500;

/// Guard responsible for producing sanitized lead records.
///
/// Checks run in form order and stop at the first violation, matching the
/// field-by-field feedback the forms give.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    config: ValidationConfig,
}

impl IntakeGuard {
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn scholarship_lead(
        &self,
        application: ScholarshipApplication,
    ) -> Result<ScholarshipLead, IntakeViolation> {
        if !application.kvkk_accepted {
            return Err(IntakeViolation::ConsentNotAccepted);
        }
        if !validate_name(&application.student_name) {
            return Err(IntakeViolation::InvalidName {
                field: "student_name",
            });
        }
        if !validate_national_id(&application.national_id) {
            return Err(IntakeViolation::InvalidNationalId);
        }
        if !validate_birth_date(&application.birth_date, &self.config.age_window) {
            return Err(IntakeViolation::IneligibleBirthDate);
        }
        let birth_date = NaiveDate::parse_from_str(application.birth_date.trim(), "%Y-%m-%d")
            .map_err(|_| IntakeViolation::IneligibleBirthDate)?;

        let grade_level = sanitize_input(&application.grade_level);
        if !validate_text(&grade_level, GRADE_MIN_LEN, GRADE_MAX_LEN) {
            return Err(IntakeViolation::TextOutOfBounds {
                field: "grade_level",
                min: GRADE_MIN_LEN,
                max: GRADE_MAX_LEN,
            });
        }
        if !validate_name(&application.parent_name) {
            return Err(IntakeViolation::InvalidName {
                field: "parent_name",
            });
        }
        if !validate_phone(&application.parent_phone, &self.config.carrier_prefixes) {
            return Err(IntakeViolation::InvalidPhone {
                field: "parent_phone",
            });
        }
        if !validate_email(&application.email) {
            return Err(IntakeViolation::InvalidEmail);
        }

        Ok(ScholarshipLead {
            lead_id: LeadId("pending".to_string()),
            student_name: application.student_name.trim().to_string(),
            national_id: format_national_id(application.national_id.trim()),
            birth_date,
            grade_level,
            parent_name: application.parent_name.trim().to_string(),
            parent_phone: format_phone_number(application.parent_phone.trim()),
            email: application.email.trim().to_string(),
            received_at: Utc::now(),
        })
    }

    pub fn intro_lesson_lead(
        &self,
        request: IntroLessonRequest,
    ) -> Result<IntroLessonLead, IntakeViolation> {
        if !request.kvkk_accepted {
            return Err(IntakeViolation::ConsentNotAccepted);
        }
        if !validate_name(&request.student_name) {
            return Err(IntakeViolation::InvalidName {
                field: "student_name",
            });
        }
        if !validate_phone(&request.phone, &self.config.carrier_prefixes) {
            return Err(IntakeViolation::InvalidPhone { field: "phone" });
        }

        let subject = sanitize_input(&request.subject);
        if !validate_text(&subject, SUBJECT_MIN_LEN, SUBJECT_MAX_LEN) {
            return Err(IntakeViolation::TextOutOfBounds {
                field: "subject",
                min: SUBJECT_MIN_LEN,
                max: SUBJECT_MAX_LEN,
            });
        }

        // The note is optional; a note that sanitizes down to nothing is
        // treated as absent rather than rejected.
        let note = match request.note.as_deref() {
            None => None,
            Some(raw) => {
                let cleaned = sanitize_input(raw);
                if cleaned.is_empty() {
                    None
                } else if cleaned.chars().count() > NOTE_MAX_LEN {
                    return Err(IntakeViolation::TextOutOfBounds {
                        field: "note",
                        min: 0,
                        max: NOTE_MAX_LEN,
                    });
                } else {
                    Some(cleaned)
                }
            }
        };

        Ok(IntroLessonLead {
            lead_id: LeadId("pending".to_string()),
            student_name: request.student_name.trim().to_string(),
            phone: format_phone_number(request.phone.trim()),
            subject,
            note,
            received_at: Utc::now(),
        })
    }

    pub fn contact_lead(&self, message: ContactMessage) -> Result<ContactLead, IntakeViolation> {
        if !message.kvkk_accepted {
            return Err(IntakeViolation::ConsentNotAccepted);
        }
        if !validate_name(&message.name) {
            return Err(IntakeViolation::InvalidName { field: "name" });
        }
        if !validate_email(&message.email) {
            return Err(IntakeViolation::InvalidEmail);
        }

        let subject = sanitize_input(&message.subject);
        if !validate_text(&subject, SUBJECT_MIN_LEN, SUBJECT_MAX_LEN) {
            return Err(IntakeViolation::TextOutOfBounds {
                field: "subject",
                min: SUBJECT_MIN_LEN,
                max: SUBJECT_MAX_LEN,
            });
        }
        let body = sanitize_input(&message.message);
        if !validate_text(&body, MESSAGE_MIN_LEN, MESSAGE_MAX_LEN) {
            return Err(IntakeViolation::TextOutOfBounds {
                field: "message",
                min: MESSAGE_MIN_LEN,
                max: MESSAGE_MAX_LEN,
            });
        }

        Ok(ContactLead {
            lead_id: LeadId("pending".to_string()),
            name: message.name.trim().to_string(),
            email: message.email.trim().to_string(),
            subject,
            message: body,
            received_at: Utc::now(),
        })
    }
}
