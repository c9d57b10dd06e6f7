use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use super::domain::{
    ContactLead, ContactMessage, IntakeViolation, IntroLessonLead, IntroLessonRequest, LeadId,
    ScholarshipApplication, ScholarshipLead,
};
use super::guard::IntakeGuard;
use super::sink::{SubmissionError, SubmissionReceipt, SubmissionSink};
use crate::config::ValidationConfig;

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_lead_id() -> LeadId {
    let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("lead-{id:06}"))
}

/// Service composing the intake guard and the submission sink.
pub struct IntakeService<K> {
    guard: Arc<IntakeGuard>,
    sink: Arc<K>,
}

impl<K> IntakeService<K>
where
    K: SubmissionSink + 'static,
{
    pub fn new(sink: Arc<K>, config: ValidationConfig) -> Self {
        Self {
            guard: Arc::new(IntakeGuard::with_config(config)),
            sink,
        }
    }

    /// Validate and forward a scholarship-exam application.
    pub fn submit_scholarship(
        &self,
        application: ScholarshipApplication,
    ) -> Result<(ScholarshipLead, SubmissionReceipt), IntakeError> {
        let mut lead = self.guard.scholarship_lead(application)?;
        lead.lead_id = next_lead_id();
        let receipt = self.sink.submit_scholarship(&lead)?;
        info!(lead = %lead.lead_id.0, "scholarship application accepted");
        Ok((lead, receipt))
    }

    /// Validate and forward an intro-lesson request.
    pub fn submit_intro_lesson(
        &self,
        request: IntroLessonRequest,
    ) -> Result<(IntroLessonLead, SubmissionReceipt), IntakeError> {
        let mut lead = self.guard.intro_lesson_lead(request)?;
        lead.lead_id = next_lead_id();
        let receipt = self.sink.submit_intro_lesson(&lead)?;
        info!(lead = %lead.lead_id.0, "intro lesson request accepted");
        Ok((lead, receipt))
    }

    /// Validate and forward a contact message.
    pub fn submit_contact(
        &self,
        message: ContactMessage,
    ) -> Result<(ContactLead, SubmissionReceipt), IntakeError> {
        let mut lead = self.guard.contact_lead(message)?;
        lead.lead_id = next_lead_id();
        let receipt = self.sink.submit_contact(&lead)?;
        info!(lead = %lead.lead_id.0, "contact message accepted");
        Ok((lead, receipt))
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] IntakeViolation),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
