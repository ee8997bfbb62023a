use crate::models::{Salary, VacancyRecord};

/// City and salary-range predicates applied over a loaded record set.
///
/// All predicates are optional; a record is retained only if every supplied
/// predicate passes. The default value is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: Option<String>,
    pub salary_from: Option<i64>,
    pub salary_to: Option<i64>,
}

impl FilterCriteria {
    pub fn new(city: Option<String>, salary_from: Option<i64>, salary_to: Option<i64>) -> Self {
        // An empty city prompt means "no constraint".
        let city = city.filter(|c| !c.is_empty());
        Self {
            city,
            salary_from,
            salary_to,
        }
    }

    /// True if the record passes every supplied predicate.
    ///
    /// Records whose salary is the not-specified sentinel always pass the
    /// range predicates, and a `null` bound inside a present pair never
    /// causes rejection; there is no information to reject on.
    pub fn matches(&self, record: &VacancyRecord) -> bool {
        if let Some(city) = &self.city {
            if record.city != *city {
                return false;
            }
        }

        if let Salary::Range { from, to } = record.salary {
            if let (Some(floor), Some(from)) = (self.salary_from, from) {
                if from < floor {
                    return false;
                }
            }
            if let (Some(ceiling), Some(to)) = (self.salary_to, to) {
                if to > ceiling {
                    return false;
                }
            }
        }

        true
    }

    /// Linear pass over `records`, preserving order.
    ///
    /// An empty result is not an error; it is reported as a diagnostic and
    /// surfaced to the user by the caller.
    pub fn apply(&self, records: &[VacancyRecord]) -> Vec<VacancyRecord> {
        let filtered: Vec<VacancyRecord> = records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();

        if filtered.is_empty() {
            tracing::info!(?self, "no vacancies matched the filter");
        }

        filtered
    }
}
