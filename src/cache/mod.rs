//! Consent-gated, two-tier, TTL-bounded cache for the public list pages.
//!
//! Caching writes user-correlated state into durable client storage, so the
//! whole component is gated on the functional consent category: without it
//! the cache is never read from and never written to, and every load is a
//! forced fetch against the authoritative source.

mod domain;
mod service;
mod source;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::config::CacheConfig;
use crate::storage::KeyValueStore;

pub use domain::{
    CachedRecord, ExamDate, MediaFile, MediaType, Testimonial, EXAM_DATES_LIST, MEDIA_LIST,
    TESTIMONIALS_LIST,
};
pub use service::ListCache;
pub use source::{ListSource, SourceError};

/// Cache for the scholarship-exam calendar.
pub fn exam_dates_cache<S, F>(
    config: &CacheConfig,
    store: Arc<S>,
    source: F,
) -> ListCache<ExamDate, S, F>
where
    S: KeyValueStore,
    F: ListSource<ExamDate>,
{
    ListCache::new(EXAM_DATES_LIST, config.exam_dates_ttl, store, source)
}

/// Cache for the media inventory shown on gallery pages.
pub fn media_cache<S, F>(config: &CacheConfig, store: Arc<S>, source: F) -> ListCache<MediaFile, S, F>
where
    S: KeyValueStore,
    F: ListSource<MediaFile>,
{
    ListCache::new(MEDIA_LIST, config.media_ttl, store, source)
}

/// Cache for student testimonials.
pub fn testimonials_cache<S, F>(
    config: &CacheConfig,
    store: Arc<S>,
    source: F,
) -> ListCache<Testimonial, S, F>
where
    S: KeyValueStore,
    F: ListSource<Testimonial>,
{
    ListCache::new(TESTIMONIALS_LIST, config.testimonials_ttl, store, source)
}
