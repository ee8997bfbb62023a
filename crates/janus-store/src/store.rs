use std::fs;
use std::io::ErrorKind;

use janus_core::error::AppError;
use janus_core::models::VacancyRecord;
use janus_core::traits::{RecordStore, StoreTarget};

use crate::config::StoreConfig;

/// Flat-file JSON store.
///
/// Each save truncates and rewrites the target file completely; the files
/// never accumulate across fetch cycles. Contents are pretty-printed UTF-8
/// with non-ASCII characters left unescaped, so the files stay readable
/// next to the Russian-language vendor data.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StoreConfig,
}

impl JsonFileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }
}

impl RecordStore for JsonFileStore {
    fn save(&self, target: StoreTarget, records: &[VacancyRecord]) -> Result<(), AppError> {
        let path = self.config.path(target);
        fs::create_dir_all(self.config.data_dir())?;

        let json = serde_json::to_string_pretty(records)?;
        fs::write(&path, json)?;

        tracing::debug!(path = %path.display(), count = records.len(), "wrote records");
        Ok(())
    }

    fn load(&self, target: StoreTarget) -> Result<Vec<VacancyRecord>, AppError> {
        let path = self.config.path(target);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "file not found, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use janus_core::models::{SALARY_NOT_SPECIFIED, Salary, Source};
    use janus_core::testutil::{make_source_records, make_test_records};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(StoreConfig::new(dir.path()))
    }

    #[test]
    fn test_persist_then_load_round_trips_exactly() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let records = make_test_records(3);

        let target = StoreTarget::Source(Source::HeadHunter);
        store.save(target, &records).unwrap();
        let loaded = store.load(target).unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_missing_file_yields_empty_not_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let loaded = store.load(StoreTarget::Merged).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_overwrites_completely() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let target = StoreTarget::Source(Source::SuperJob);

        store.save(target, &make_test_records(5)).unwrap();
        store
            .save(target, &make_source_records(Source::SuperJob, 1))
            .unwrap();

        let loaded = store.load(target).unwrap();
        assert_eq!(loaded, make_source_records(Source::SuperJob, 1));
    }

    #[test]
    fn test_targets_do_not_collide() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .save(
                StoreTarget::Source(Source::HeadHunter),
                &make_test_records(2),
            )
            .unwrap();
        store
            .save(
                StoreTarget::Source(Source::SuperJob),
                &make_source_records(Source::SuperJob, 1),
            )
            .unwrap();

        assert_eq!(
            store
                .load(StoreTarget::Source(Source::HeadHunter))
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            store
                .load(StoreTarget::Source(Source::SuperJob))
                .unwrap()
                .len(),
            1
        );
        assert!(store.load(StoreTarget::Merged).unwrap().is_empty());
    }

    #[test]
    fn test_file_is_pretty_and_unescaped() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut records = make_test_records(1);
        records[0].salary = Salary::NotSpecified;
        let target = StoreTarget::Merged;
        store.save(target, &records).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("all_vacancy.json")).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.contains("Москва"));
        assert!(raw.contains(SALARY_NOT_SPECIFIED));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn test_malformed_file_is_a_hard_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        std::fs::write(dir.path().join("headhunter.json"), "not json").unwrap();
        let err = store
            .load(StoreTarget::Source(Source::HeadHunter))
            .unwrap_err();
        assert!(matches!(err, AppError::SerializationError(_)));
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("data");
        let store = JsonFileStore::new(StoreConfig::new(&nested));

        store
            .save(StoreTarget::Merged, &make_test_records(1))
            .unwrap();
        assert!(nested.join("all_vacancy.json").exists());
    }
}
