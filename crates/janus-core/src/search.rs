use crate::error::AppError;
use crate::models::VacancyRecord;
use crate::traits::{RecordStore, StoreTarget, VacancySource};

/// Orchestrates one fetch cycle: search → persist → read back.
///
/// Generic over the store via [`RecordStore`], enabling dependency
/// injection and testability without touching the real filesystem. Every
/// cycle flows through the flat file: what the caller gets back is what
/// was just written to disk, not the in-memory fetch result.
pub struct SearchService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> SearchService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run a single-vendor fetch cycle.
    ///
    /// Fetches and normalizes via the source, rewrites the vendor's flat
    /// file, then loads the file back and returns its contents. A transport
    /// failure aborts the cycle before anything is written.
    pub async fn search_source(
        &self,
        source: &impl VacancySource,
        keyword: &str,
    ) -> Result<Vec<VacancyRecord>, AppError> {
        let target = StoreTarget::Source(source.source());
        self.fetch_and_save(source, keyword).await?;
        self.store.load(target)
    }

    /// Run a combined fetch cycle over both vendors, sequentially.
    ///
    /// Each vendor's records are written to its own file, the concatenation
    /// (first vendor's order, then second's) to the merged file, and the
    /// merged file is loaded back and returned. A failure in either vendor
    /// aborts the whole cycle; there is no partial-failure aggregation.
    pub async fn search_all(
        &self,
        first: &impl VacancySource,
        second: &impl VacancySource,
        keyword: &str,
    ) -> Result<Vec<VacancyRecord>, AppError> {
        let mut merged = self.fetch_and_save(first, keyword).await?;
        merged.extend(self.fetch_and_save(second, keyword).await?);

        self.store.save(StoreTarget::Merged, &merged)?;
        self.store.load(StoreTarget::Merged)
    }

    async fn fetch_and_save(
        &self,
        source: &impl VacancySource,
        keyword: &str,
    ) -> Result<Vec<VacancyRecord>, AppError> {
        let tag = source.source();
        tracing::info!(source = %tag, keyword, "searching vacancies");

        let records = source.search(keyword).await?;
        tracing::info!(source = %tag, count = records.len(), "fetched vacancies");

        self.store.save(StoreTarget::Source(tag), &records)?;
        Ok(records)
    }
}
