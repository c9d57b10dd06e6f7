use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const EXAM_DATES_LIST: &str = "exam_dates";
pub const MEDIA_LIST: &str = "media";
pub const TESTIMONIALS_LIST: &str = "testimonials";

/// Completeness check applied defensively to every fetched or thawed list.
/// Upstream rows occasionally arrive with blank required fields; those
/// entries are dropped rather than rendered or cached.
pub trait CachedRecord {
    fn is_complete(&self) -> bool;
}

/// A scheduled scholarship-exam sitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamDate {
    pub id: String,
    pub exam_name: String,
    pub exam_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_deadline: Option<NaiveDate>,
    pub location: String,
}

impl CachedRecord for ExamDate {
    fn is_complete(&self) -> bool {
        !self.id.trim().is_empty() && !self.exam_name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Document,
}

/// One entry of the public media inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
}

impl CachedRecord for MediaFile {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.url.trim().is_empty()
    }
}

/// A published student testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub student_name: String,
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}

impl CachedRecord for Testimonial {
    fn is_complete(&self) -> bool {
        !self.student_name.trim().is_empty() && !self.quote.trim().is_empty()
    }
}
