use std::time::Duration;

use janus_core::error::AppError;
use janus_core::models::{
    CITY_NOT_SPECIFIED, REQUIREMENTS_NOT_SPECIFIED, Salary, Source, VacancyRecord,
};
use janus_core::traits::VacancySource;
use reqwest::Client;
use serde::Deserialize;

use crate::markup::strip_highlight;
use crate::transport::{DEFAULT_TIMEOUT, build_client, transport_error};

const ENDPOINT: &str = "https://api.hh.ru/vacancies";

/// Fixed region parameter (113 = Россия).
const AREA: u32 = 113;

/// Pages requested per search. The upstream page index is 0-based, but the
/// feed has always been queried for pages 1 through 10 inclusive.
const FIRST_PAGE: u32 = 1;
const LAST_PAGE: u32 = 10;

const PER_PAGE: u32 = 100;

/// HeadHunter vacancy client.
///
/// Issues sequential paginated GETs against the public vacancies endpoint
/// and normalizes each page's items. No credential is required.
#[derive(Clone)]
pub struct HeadHunterClient {
    client: Client,
    timeout_secs: u64,
}

impl HeadHunterClient {
    pub fn new() -> Result<Self, AppError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        Ok(Self {
            client: build_client(timeout)?,
            timeout_secs: timeout.as_secs(),
        })
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<Vec<HhItem>, AppError> {
        let response = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("text", keyword.to_string()),
                ("area", AREA.to_string()),
                ("page", page.to_string()),
                ("per_page", PER_PAGE.to_string()),
            ])
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpError(format!(
                "HTTP {} for {}",
                status.as_u16(),
                ENDPOINT
            )));
        }

        let body: HhPage = response
            .json()
            .await
            .map_err(|e| AppError::HttpError(format!("Failed to decode response body: {e}")))?;

        Ok(body.items)
    }
}

impl VacancySource for HeadHunterClient {
    fn source(&self) -> Source {
        Source::HeadHunter
    }

    async fn search(&self, keyword: &str) -> Result<Vec<VacancyRecord>, AppError> {
        let mut records = Vec::new();

        for page in FIRST_PAGE..=LAST_PAGE {
            let items = self.fetch_page(keyword, page).await?;
            if items.is_empty() {
                tracing::debug!(page, "empty page, stopping pagination");
                break;
            }
            tracing::debug!(page, count = items.len(), "fetched page");
            records.extend(items.into_iter().map(normalize));
        }

        Ok(records)
    }
}

// ---- Vendor payload ----

#[derive(Debug, Deserialize)]
struct HhPage {
    items: Vec<HhItem>,
}

#[derive(Debug, Deserialize)]
struct HhItem {
    name: String,
    address: Option<HhAddress>,
    salary: Option<HhSalary>,
    #[serde(default)]
    snippet: HhSnippet,
    alternate_url: String,
}

#[derive(Debug, Deserialize)]
struct HhAddress {
    city: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HhSalary {
    from: Option<i64>,
    to: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct HhSnippet {
    requirement: Option<String>,
}

/// Map one raw HeadHunter item onto the common record shape.
///
/// Missing location, salary, or requirement data becomes the corresponding
/// sentinel; present salary bounds keep their nullness untouched.
fn normalize(item: HhItem) -> VacancyRecord {
    let city = item
        .address
        .and_then(|a| a.city)
        .unwrap_or_else(|| CITY_NOT_SPECIFIED.to_string());

    let salary = match item.salary {
        None => Salary::NotSpecified,
        Some(s) => Salary::Range {
            from: s.from,
            to: s.to,
        },
    };

    let requirements = match item.snippet.requirement {
        None => REQUIREMENTS_NOT_SPECIFIED.to_string(),
        Some(text) => strip_highlight(&text),
    };

    VacancyRecord {
        source: Source::HeadHunter,
        name: item.name,
        city,
        salary,
        requirements,
        url: item.alternate_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(raw: serde_json::Value) -> HhItem {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_page_payload_parses() {
        let body = r#"{
            "items": [
                {
                    "name": "Rust-разработчик",
                    "address": {"city": "Москва"},
                    "salary": {"from": 250000, "to": null, "currency": "RUR"},
                    "snippet": {"requirement": "Опыт с <highlighttext>Rust</highlighttext>"},
                    "alternate_url": "https://hh.ru/vacancy/101"
                }
            ],
            "found": 1,
            "pages": 1,
            "page": 1
        }"#;
        let page: HhPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Rust-разработчик");
    }

    #[test]
    fn test_null_address_becomes_city_sentinel() {
        let record = normalize(item(serde_json::json!({
            "name": "Курьер",
            "address": null,
            "salary": null,
            "snippet": {"requirement": null},
            "alternate_url": "https://hh.ru/vacancy/1"
        })));
        assert_eq!(record.city, CITY_NOT_SPECIFIED);
    }

    #[test]
    fn test_address_with_null_city_becomes_city_sentinel() {
        let record = normalize(item(serde_json::json!({
            "name": "Курьер",
            "address": {"city": null},
            "salary": null,
            "snippet": {},
            "alternate_url": "https://hh.ru/vacancy/2"
        })));
        assert_eq!(record.city, CITY_NOT_SPECIFIED);
    }

    #[test]
    fn test_null_salary_becomes_sentinel() {
        let record = normalize(item(serde_json::json!({
            "name": "Аналитик",
            "address": {"city": "Казань"},
            "salary": null,
            "snippet": {"requirement": "SQL"},
            "alternate_url": "https://hh.ru/vacancy/3"
        })));
        assert_eq!(record.salary, Salary::NotSpecified);
    }

    #[test]
    fn test_salary_bounds_keep_their_nullness() {
        let record = normalize(item(serde_json::json!({
            "name": "Аналитик",
            "address": {"city": "Казань"},
            "salary": {"from": null, "to": 90000},
            "snippet": {"requirement": "SQL"},
            "alternate_url": "https://hh.ru/vacancy/4"
        })));
        assert_eq!(
            record.salary,
            Salary::Range {
                from: None,
                to: Some(90_000),
            }
        );
    }

    #[test]
    fn test_requirement_highlight_tags_are_stripped() {
        let record = normalize(item(serde_json::json!({
            "name": "Разработчик",
            "address": null,
            "salary": null,
            "snippet": {"requirement": "Опыт с <highlighttext>Rust</highlighttext> от 3 лет"},
            "alternate_url": "https://hh.ru/vacancy/5"
        })));
        assert_eq!(record.requirements, "Опыт с Rust от 3 лет");
    }

    #[test]
    fn test_missing_requirement_becomes_fallback() {
        let record = normalize(item(serde_json::json!({
            "name": "Разработчик",
            "address": null,
            "salary": null,
            "snippet": {"requirement": null},
            "alternate_url": "https://hh.ru/vacancy/6"
        })));
        assert_eq!(record.requirements, REQUIREMENTS_NOT_SPECIFIED);
    }

    #[test]
    fn test_name_and_url_pass_through() {
        let record = normalize(item(serde_json::json!({
            "name": "Тимлид",
            "address": {"city": "Москва"},
            "salary": {"from": 400000, "to": 500000},
            "snippet": {"requirement": "Опыт руководства"},
            "alternate_url": "https://hh.ru/vacancy/7"
        })));
        assert_eq!(record.source, Source::HeadHunter);
        assert_eq!(record.name, "Тимлид");
        assert_eq!(record.url, "https://hh.ru/vacancy/7");
    }
}
