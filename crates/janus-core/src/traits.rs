use std::future::Future;

use crate::error::AppError;
use crate::models::{Source, VacancyRecord};

/// Which flat file a store operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreTarget {
    /// One vendor's own file.
    Source(Source),
    /// The combined file written by an all-sources search.
    Merged,
}

/// Searches one vendor API and returns normalized vacancy records.
///
/// Implementations issue the vendor's own request shape (paginated or bulk)
/// and run the vendor's normalization, so callers only ever see
/// [`VacancyRecord`]s. Transport failures are not caught here; they
/// propagate to the caller, which decides whether to abort or skip the
/// source.
pub trait VacancySource: Send + Sync {
    fn source(&self) -> Source;

    fn search(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<VacancyRecord>, AppError>> + Send;
}

/// Persists and retrieves ordered sequences of vacancy records.
///
/// `save` replaces the target's contents completely; there is no append or
/// merge. `load` on a target that was never written is a recoverable
/// condition and yields an empty sequence.
pub trait RecordStore: Send + Sync {
    fn save(&self, target: StoreTarget, records: &[VacancyRecord]) -> Result<(), AppError>;

    fn load(&self, target: StoreTarget) -> Result<Vec<VacancyRecord>, AppError>;
}
