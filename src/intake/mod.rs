//! Lead-capture intake: raw form payloads validated field by field and turned
//! into sanitized lead records before anything leaves the process.
//!
//! The guard applies the shared [`crate::validation`] functions, so the
//! browser form and the server-side handler enforce identical rules; the
//! sink is the out-of-scope network collaborator that actually records the
//! lead and sends the notification mail.

pub mod domain;
mod guard;
pub mod service;
pub mod sink;

#[cfg(test)]
mod tests;

pub use domain::{
    ContactLead, ContactMessage, IntakeViolation, IntroLessonLead, IntroLessonRequest, LeadId,
    ScholarshipApplication, ScholarshipLead,
};
pub use guard::IntakeGuard;
pub use service::{IntakeError, IntakeService};
pub use sink::{SubmissionError, SubmissionReceipt, SubmissionSink};
