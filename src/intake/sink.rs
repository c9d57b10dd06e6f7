use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ContactLead, IntroLessonLead, ScholarshipLead};

/// Outbound seam for accepted leads (database insert plus notification mail,
/// implemented by the managed-backend collaborator).
pub trait SubmissionSink: Send + Sync {
    fn submit_scholarship(&self, lead: &ScholarshipLead)
        -> Result<SubmissionReceipt, SubmissionError>;
    fn submit_intro_lesson(
        &self,
        lead: &IntroLessonLead,
    ) -> Result<SubmissionReceipt, SubmissionError>;
    fn submit_contact(&self, lead: &ContactLead) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Acknowledgement returned by the submission backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: String,
    pub accepted_at: DateTime<Utc>,
}

/// Submission dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission backend unavailable: {0}")]
    Unavailable(String),
    #[error("submission rejected: {0}")]
    Rejected(String),
}
