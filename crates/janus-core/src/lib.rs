pub mod error;
pub mod filter;
pub mod models;
pub mod search;
pub mod testutil;
pub mod traits;

pub use error::AppError;
pub use filter::FilterCriteria;
pub use models::{Salary, Source, VacancyRecord};
pub use search::SearchService;
pub use traits::{RecordStore, StoreTarget, VacancySource};
