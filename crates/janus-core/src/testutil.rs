//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit tests. Mocks use
//! `Arc<Mutex<_>>` for interior mutability, allowing test assertions on
//! recorded calls.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::{Salary, Source, VacancyRecord};
use crate::traits::{RecordStore, StoreTarget, VacancySource};

// ---------------------------------------------------------------------------
// MockVacancySource
// ---------------------------------------------------------------------------

/// Mock vendor source returning a configurable record set or error.
#[derive(Clone)]
pub struct MockVacancySource {
    tag: Source,
    records: Arc<Mutex<Result<Vec<VacancyRecord>, Option<AppError>>>>,
    /// Number of `search` calls issued.
    pub calls: Arc<Mutex<usize>>,
    /// Keywords received, in call order.
    pub keywords: Arc<Mutex<Vec<String>>>,
}

impl MockVacancySource {
    pub fn new(tag: Source, records: Vec<VacancyRecord>) -> Self {
        Self {
            tag,
            records: Arc::new(Mutex::new(Ok(records))),
            calls: Arc::new(Mutex::new(0)),
            keywords: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Source whose first `search` call fails with `error`.
    pub fn with_error(tag: Source, error: AppError) -> Self {
        Self {
            tag,
            records: Arc::new(Mutex::new(Err(Some(error)))),
            calls: Arc::new(Mutex::new(0)),
            keywords: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl VacancySource for MockVacancySource {
    fn source(&self) -> Source {
        self.tag
    }

    async fn search(&self, keyword: &str) -> Result<Vec<VacancyRecord>, AppError> {
        *self.calls.lock().unwrap() += 1;
        self.keywords.lock().unwrap().push(keyword.to_string());

        match &mut *self.records.lock().unwrap() {
            Ok(records) => Ok(records.clone()),
            Err(error) => Err(error
                .take()
                .unwrap_or_else(|| AppError::HttpError("mock error already taken".into()))),
        }
    }
}

// ---------------------------------------------------------------------------
// MockRecordStore
// ---------------------------------------------------------------------------

/// Mock store backed by an in-memory map, recording every save.
///
/// `load` returns whatever was last saved to the target, so service tests
/// observe the same write-then-read-back flow the file store provides.
#[derive(Clone)]
pub struct MockRecordStore {
    files: Arc<Mutex<HashMap<StoreTarget, Vec<VacancyRecord>>>>,
    /// Every `(target, records)` pair passed to `save`, in call order.
    pub saved: Arc<Mutex<Vec<(StoreTarget, Vec<VacancyRecord>)>>>,
    save_error: Arc<Mutex<Option<AppError>>>,
}

impl MockRecordStore {
    pub fn empty() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            saved: Arc::new(Mutex::new(Vec::new())),
            save_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Store that fails the first `save` with `error`.
    pub fn with_save_error(error: AppError) -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            saved: Arc::new(Mutex::new(Vec::new())),
            save_error: Arc::new(Mutex::new(Some(error))),
        }
    }
}

impl RecordStore for MockRecordStore {
    fn save(&self, target: StoreTarget, records: &[VacancyRecord]) -> Result<(), AppError> {
        if let Some(e) = self.save_error.lock().unwrap().take() {
            return Err(e);
        }
        self.saved.lock().unwrap().push((target, records.to_vec()));
        self.files.lock().unwrap().insert(target, records.to_vec());
        Ok(())
    }

    fn load(&self, target: StoreTarget) -> Result<Vec<VacancyRecord>, AppError> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .get(&target)
            .cloned()
            .unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Dummy records tagged with `source`, named `<stem> vacancy <i>`.
pub fn make_source_records(source: Source, count: usize) -> Vec<VacancyRecord> {
    (0..count)
        .map(|i| VacancyRecord {
            source,
            name: format!("{} vacancy {i}", source.file_stem()),
            city: "Москва".to_string(),
            salary: Salary::Range {
                from: Some(100_000),
                to: Some(200_000),
            },
            requirements: "Опыт работы от 1 года".to_string(),
            url: format!("https://example.com/vacancy/{i}"),
        })
        .collect()
}

/// Dummy HeadHunter-tagged records.
pub fn make_test_records(count: usize) -> Vec<VacancyRecord> {
    make_source_records(Source::HeadHunter, count)
}
