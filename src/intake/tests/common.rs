use std::sync::{Arc, Mutex};

use chrono::{Datelike, Local, Utc};

use crate::intake::domain::{
    ContactLead, ContactMessage, IntroLessonLead, IntroLessonRequest, ScholarshipApplication,
    ScholarshipLead,
};
use crate::intake::guard::IntakeGuard;
use crate::intake::sink::{SubmissionError, SubmissionReceipt, SubmissionSink};

/// Birth date safely inside the eligibility window for the given nominal age
/// regardless of when in the year the test runs.
pub(super) fn birth_date_for_age(age: i32) -> String {
    let today = Local::now().date_naive();
    format!("{}-01-15", today.year() - age)
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

pub(super) fn scholarship_application() -> ScholarshipApplication {
    ScholarshipApplication {
        student_name: "Zeynep Kaya".to_string(),
        national_id: "10000000146".to_string(),
        birth_date: birth_date_for_age(15),
        grade_level: "8. Sınıf".to_string(),
        parent_name: "Murat Kaya".to_string(),
        parent_phone: "5321234567".to_string(),
        email: "murat.kaya@example.com".to_string(),
        kvkk_accepted: true,
    }
}

pub(super) fn intro_lesson_request() -> IntroLessonRequest {
    IntroLessonRequest {
        student_name: "Emre Demir".to_string(),
        phone: "541 987 65 43".to_string(),
        subject: "Matematik".to_string(),
        note: Some("Hafta sonu uygun".to_string()),
        kvkk_accepted: true,
    }
}

pub(super) fn contact_message() -> ContactMessage {
    ContactMessage {
        name: "Fatma Çelik".to_string(),
        email: "fatma@example.com".to_string(),
        subject: "Kayıt bilgisi".to_string(),
        message: "Şubeniz hakkında bilgi almak istiyorum.".to_string(),
        kvkk_accepted: true,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemorySink {
    scholarship: Arc<Mutex<Vec<ScholarshipLead>>>,
    intro: Arc<Mutex<Vec<IntroLessonLead>>>,
    contact: Arc<Mutex<Vec<ContactLead>>>,
}

impl MemorySink {
    pub(super) fn scholarship_leads(&self) -> Vec<ScholarshipLead> {
        self.scholarship.lock().expect("sink mutex poisoned").clone()
    }

    pub(super) fn intro_leads(&self) -> Vec<IntroLessonLead> {
        self.intro.lock().expect("sink mutex poisoned").clone()
    }

    pub(super) fn contact_leads(&self) -> Vec<ContactLead> {
        self.contact.lock().expect("sink mutex poisoned").clone()
    }

    fn receipt(&self, reference: String) -> SubmissionReceipt {
        SubmissionReceipt {
            reference,
            accepted_at: Utc::now(),
        }
    }
}

impl SubmissionSink for MemorySink {
    fn submit_scholarship(
        &self,
        lead: &ScholarshipLead,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.scholarship
            .lock()
            .expect("sink mutex poisoned")
            .push(lead.clone());
        Ok(self.receipt(format!("sch-{}", lead.lead_id.0)))
    }

    fn submit_intro_lesson(
        &self,
        lead: &IntroLessonLead,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.intro
            .lock()
            .expect("sink mutex poisoned")
            .push(lead.clone());
        Ok(self.receipt(format!("intro-{}", lead.lead_id.0)))
    }

    fn submit_contact(&self, lead: &ContactLead) -> Result<SubmissionReceipt, SubmissionError> {
        self.contact
            .lock()
            .expect("sink mutex poisoned")
            .push(lead.clone());
        Ok(self.receipt(format!("contact-{}", lead.lead_id.0)))
    }
}

pub(super) struct UnavailableSink;

impl SubmissionSink for UnavailableSink {
    fn submit_scholarship(
        &self,
        _lead: &ScholarshipLead,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        Err(SubmissionError::Unavailable("backend offline".to_string()))
    }

    fn submit_intro_lesson(
        &self,
        _lead: &IntroLessonLead,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        Err(SubmissionError::Unavailable("backend offline".to_string()))
    }

    fn submit_contact(&self, _lead: &ContactLead) -> Result<SubmissionReceipt, SubmissionError> {
        Err(SubmissionError::Unavailable("backend offline".to_string()))
    }
}
