use std::sync::{Arc, Mutex};

use chrono::{Datelike, Local, Utc};
use enrollment_core::config::ValidationConfig;
use enrollment_core::intake::{
    ContactLead, ContactMessage, IntakeError, IntakeService, IntakeViolation, IntroLessonLead,
    IntroLessonRequest, ScholarshipApplication, ScholarshipLead, SubmissionError,
    SubmissionReceipt, SubmissionSink,
};

#[derive(Default)]
struct RecordingSink {
    scholarship: Mutex<Vec<ScholarshipLead>>,
    intro: Mutex<Vec<IntroLessonLead>>,
    contact: Mutex<Vec<ContactLead>>,
}

impl RecordingSink {
    fn receipt(&self, reference: &str) -> SubmissionReceipt {
        SubmissionReceipt {
            reference: reference.to_string(),
            accepted_at: Utc::now(),
        }
    }
}

impl SubmissionSink for RecordingSink {
    fn submit_scholarship(
        &self,
        lead: &ScholarshipLead,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.scholarship
            .lock()
            .expect("sink mutex poisoned")
            .push(lead.clone());
        Ok(self.receipt(&lead.lead_id.0))
    }

    fn submit_intro_lesson(
        &self,
        lead: &IntroLessonLead,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.intro
            .lock()
            .expect("sink mutex poisoned")
            .push(lead.clone());
        Ok(self.receipt(&lead.lead_id.0))
    }

    fn submit_contact(&self, lead: &ContactLead) -> Result<SubmissionReceipt, SubmissionError> {
        self.contact
            .lock()
            .expect("sink mutex poisoned")
            .push(lead.clone());
        Ok(self.receipt(&lead.lead_id.0))
    }
}

fn eligible_birth_date() -> String {
    format!("{}-01-15", Local::now().date_naive().year() - 15)
}

fn application() -> ScholarshipApplication {
    ScholarshipApplication {
        student_name: "Ayşe Yıldız".to_string(),
        national_id: "100 0000 0146".to_string(),
        birth_date: eligible_birth_date(),
        grade_level: "8. Sınıf".to_string(),
        parent_name: "Hasan Yıldız".to_string(),
        parent_phone: "532 123 45 67".to_string(),
        email: "hasan.yildiz@example.com".to_string(),
        kvkk_accepted: true,
    }
}

#[test]
fn scholarship_form_flows_through_to_the_sink_sanitized() {
    let sink = Arc::new(RecordingSink::default());
    let service = IntakeService::new(sink.clone(), ValidationConfig::default());

    let (lead, receipt) = service
        .submit_scholarship(application())
        .expect("application accepted");

    assert_eq!(receipt.reference, lead.lead_id.0);
    let recorded = sink.scholarship.lock().expect("sink mutex poisoned");
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].national_id, "100 000 001 46");
    assert_eq!(recorded[0].parent_phone, "532 123 45 67");
}

#[test]
fn contact_form_with_markup_is_stored_clean() {
    let sink = Arc::new(RecordingSink::default());
    let service = IntakeService::new(sink.clone(), ValidationConfig::default());

    let (lead, _) = service
        .submit_contact(ContactMessage {
            name: "Fatma Çelik".to_string(),
            email: "fatma@example.com".to_string(),
            subject: "Kayıt <b>bilgisi</b>".to_string(),
            message: "Şubeniz hakkında <script>steal()</script>bilgi almak istiyorum.".to_string(),
            kvkk_accepted: true,
        })
        .expect("message accepted");

    assert_eq!(lead.subject, "Kayıt bilgisi");
    assert_eq!(lead.message, "Şubeniz hakkında bilgi almak istiyorum.");
}

#[test]
fn rejected_intro_lesson_request_never_reaches_the_sink() {
    let sink = Arc::new(RecordingSink::default());
    let service = IntakeService::new(sink.clone(), ValidationConfig::default());

    let result = service.submit_intro_lesson(IntroLessonRequest {
        student_name: "Emre Demir".to_string(),
        phone: "5109876543".to_string(),
        subject: "Matematik".to_string(),
        note: None,
        kvkk_accepted: true,
    });

    match result {
        Err(IntakeError::Validation(IntakeViolation::InvalidPhone { field: "phone" })) => {}
        other => panic!("expected phone violation, got {other:?}"),
    }
    assert!(sink.intro.lock().expect("sink mutex poisoned").is_empty());
}
