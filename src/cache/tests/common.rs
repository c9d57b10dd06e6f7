use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::cache::domain::{ExamDate, MediaFile, MediaType, Testimonial};
use crate::cache::source::{ListSource, SourceError};
use crate::consent::{ConsentPreferences, ConsentStore};
use crate::storage::{KeyValueStore, MemoryKeyValueStore, StorageError};

/// Source fake that counts invocations; cloning shares the counter, the
/// same way the service fakes in the intake tests share their event logs.
#[derive(Clone)]
pub(super) struct CountingSource<T> {
    response: Arc<Mutex<Result<Vec<T>, String>>>,
    calls: Arc<AtomicUsize>,
}

impl<T: Clone + Send> CountingSource<T> {
    pub(super) fn ok(records: Vec<T>) -> Self {
        Self {
            response: Arc::new(Mutex::new(Ok(records))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(super) fn failing(message: &str) -> Self {
        Self {
            response: Arc::new(Mutex::new(Err(message.to_string()))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T: Clone + Send> ListSource<T> for CountingSource<T> {
    fn fetch(&self) -> Result<Vec<T>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &*self.response.lock().expect("source mutex poisoned") {
            Ok(records) => Ok(records.clone()),
            Err(message) => Err(SourceError::Unavailable(message.clone())),
        }
    }
}

/// Store fake where every operation fails, mimicking disabled storage.
pub(super) struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Backend("storage disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("storage disabled".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("storage disabled".to_string()))
    }
}

pub(super) fn store() -> Arc<MemoryKeyValueStore> {
    Arc::new(MemoryKeyValueStore::default())
}

pub(super) fn grant_functional(store: &Arc<MemoryKeyValueStore>) {
    ConsentStore::new(store.clone())
        .save(ConsentPreferences::custom(false, true, false))
        .expect("consent saves");
}

pub(super) fn decline_functional(store: &Arc<MemoryKeyValueStore>) {
    ConsentStore::new(store.clone())
        .save(ConsentPreferences::necessary_only())
        .expect("consent saves");
}

pub(super) fn sample_media() -> Vec<MediaFile> {
    vec![MediaFile {
        name: "a.jpg".to_string(),
        url: "https://x/a.jpg".to_string(),
        media_type: MediaType::Image,
    }]
}

pub(super) fn sample_exam_dates() -> Vec<ExamDate> {
    vec![ExamDate {
        id: "exam-1".to_string(),
        exam_name: "Bursluluk Sınavı".to_string(),
        exam_date: NaiveDate::from_ymd_opt(2026, 9, 12).expect("valid date"),
        registration_deadline: Some(NaiveDate::from_ymd_opt(2026, 9, 1).expect("valid date")),
        location: "Merkez Kampüs".to_string(),
    }]
}

pub(super) fn sample_testimonials() -> Vec<Testimonial> {
    vec![Testimonial {
        id: "t-1".to_string(),
        student_name: "Elif K.".to_string(),
        quote: "Hedefimden yüksek bir puan aldım.".to_string(),
        program: Some("LGS".to_string()),
    }]
}
