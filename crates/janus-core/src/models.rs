use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Substituted for the city when a vendor reports no location.
pub const CITY_NOT_SPECIFIED: &str = "(Город не указан)";

/// JSON form of [`Salary::NotSpecified`].
pub const SALARY_NOT_SPECIFIED: &str = "Зарплата не указана";

/// HeadHunter fallback when the snippet carries no requirement text.
pub const REQUIREMENTS_NOT_SPECIFIED: &str = "Требования не указаны";

/// SuperJob fallback when the candidate profile is absent or unstructured.
pub const REQUIREMENTS_SEE_LINK: &str = "С требованиями можете ознакомиться по ссылке";

/// SuperJob fallback when the structured profile lists no skills.
pub const SKILLS_NOT_SPECIFIED: &str = "Не указаны";

/// Vendor a vacancy was fetched from.
///
/// Serialized as the vendor tag the persisted files have always carried
/// (`"HeadHunter"` / `"Superjob"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    HeadHunter,
    #[serde(rename = "Superjob")]
    SuperJob,
}

impl Source {
    /// File stem used by the store for this vendor's flat file.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Source::HeadHunter => "headhunter",
            Source::SuperJob => "superjob",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::HeadHunter => write!(f, "HeadHunter"),
            Source::SuperJob => write!(f, "Superjob"),
        }
    }
}

/// Salary attached to a vacancy.
///
/// JSON form: the sentinel string [`SALARY_NOT_SPECIFIED`] when the vendor
/// reported nothing, otherwise a two-element `[from, to]` array where each
/// bound may independently be `null`. Nullness is preserved exactly; a
/// missing bound is never coerced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Salary {
    NotSpecified,
    Range {
        from: Option<i64>,
        to: Option<i64>,
    },
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Salary::NotSpecified => write!(f, "{SALARY_NOT_SPECIFIED}"),
            Salary::Range { from, to } => match (from, to) {
                (Some(from), Some(to)) => write!(f, "{from} - {to}"),
                (Some(from), None) => write!(f, "от {from}"),
                (None, Some(to)) => write!(f, "до {to}"),
                (None, None) => write!(f, "{SALARY_NOT_SPECIFIED}"),
            },
        }
    }
}

impl Serialize for Salary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Salary::NotSpecified => serializer.serialize_str(SALARY_NOT_SPECIFIED),
            Salary::Range { from, to } => (from, to).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Salary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bounds(Option<i64>, Option<i64>),
            Sentinel(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bounds(from, to) => Ok(Salary::Range { from, to }),
            Repr::Sentinel(s) if s == SALARY_NOT_SPECIFIED => Ok(Salary::NotSpecified),
            Repr::Sentinel(s) => Err(D::Error::custom(format!("unknown salary value '{s}'"))),
        }
    }
}

/// Normalized, vendor-agnostic vacancy.
///
/// Every field is always populated; sentinel strings stand in for data the
/// vendor did not supply, so no partial record ever reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub source: Source,
    pub name: String,
    pub city: String,
    pub salary: Salary,
    pub requirements: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(salary: Salary) -> VacancyRecord {
        VacancyRecord {
            source: Source::HeadHunter,
            name: "Rust developer".into(),
            city: "Москва".into(),
            salary,
            requirements: "Опыт от 3 лет".into(),
            url: "https://hh.ru/vacancy/1".into(),
        }
    }

    #[test]
    fn test_source_tags_round_trip() {
        assert_eq!(
            serde_json::to_string(&Source::HeadHunter).unwrap(),
            "\"HeadHunter\""
        );
        assert_eq!(
            serde_json::to_string(&Source::SuperJob).unwrap(),
            "\"Superjob\""
        );
        let back: Source = serde_json::from_str("\"Superjob\"").unwrap();
        assert_eq!(back, Source::SuperJob);
    }

    #[test]
    fn test_salary_sentinel_serializes_as_string() {
        let json = serde_json::to_string(&Salary::NotSpecified).unwrap();
        assert_eq!(json, format!("\"{SALARY_NOT_SPECIFIED}\""));
    }

    #[test]
    fn test_salary_range_serializes_as_pair() {
        let salary = Salary::Range {
            from: Some(100_000),
            to: None,
        };
        assert_eq!(serde_json::to_string(&salary).unwrap(), "[100000,null]");
    }

    #[test]
    fn test_salary_nullness_round_trips() {
        for salary in [
            Salary::Range {
                from: Some(50_000),
                to: Some(120_000),
            },
            Salary::Range {
                from: None,
                to: Some(90_000),
            },
            Salary::Range {
                from: Some(150_000),
                to: None,
            },
            Salary::Range {
                from: None,
                to: None,
            },
            Salary::NotSpecified,
        ] {
            let json = serde_json::to_string(&salary).unwrap();
            let back: Salary = serde_json::from_str(&json).unwrap();
            assert_eq!(back, salary);
        }
    }

    #[test]
    fn test_salary_rejects_unknown_string() {
        let result: Result<Salary, _> = serde_json::from_str("\"договорная\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_record_round_trips_field_for_field() {
        let rec = record(Salary::Range {
            from: Some(200_000),
            to: Some(300_000),
        });
        let json = serde_json::to_string_pretty(&rec).unwrap();
        let back: VacancyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_record_json_is_not_ascii_escaped() {
        let rec = record(Salary::NotSpecified);
        let json = serde_json::to_string_pretty(&rec).unwrap();
        assert!(json.contains("Москва"));
        assert!(json.contains(SALARY_NOT_SPECIFIED));
        assert!(!json.contains("\\u"));
    }
}
