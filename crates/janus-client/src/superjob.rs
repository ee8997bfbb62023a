use std::time::Duration;

use janus_core::error::AppError;
use janus_core::models::{
    CITY_NOT_SPECIFIED, REQUIREMENTS_SEE_LINK, SKILLS_NOT_SPECIFIED, Salary, Source, VacancyRecord,
};
use janus_core::traits::VacancySource;
use reqwest::Client;
use serde::Deserialize;

use crate::markup::strip_highlight;
use crate::transport::{DEFAULT_TIMEOUT, build_client, transport_error};

const ENDPOINT: &str = "https://api.superjob.ru/2.0/vacancies/";

/// Result-count cap for the single bulk request.
const RESULT_CAP: u32 = 100;

/// Environment variable holding the application credential.
pub const API_KEY_VAR: &str = "SUPERJOB_API_KEY";

const APP_ID_HEADER: &str = "X-Api-App-Id";

/// SuperJob vacancy client.
///
/// Issues one bulk GET against the vacancies endpoint, authenticated by the
/// application id header. The credential comes from [`API_KEY_VAR`]; its
/// absence is a hard failure raised at construction.
#[derive(Clone)]
pub struct SuperJobClient {
    client: Client,
    api_key: String,
    timeout_secs: u64,
}

impl SuperJobClient {
    /// Read the credential from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_env_with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn from_env_with_timeout(timeout: Duration) -> Result<Self, AppError> {
        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| AppError::MissingCredential(API_KEY_VAR))?;
        Self::with_timeout(api_key, timeout)
    }

    pub fn new(api_key: impl Into<String>) -> Result<Self, AppError> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key: api_key.into(),
            timeout_secs: timeout.as_secs(),
        })
    }
}

impl VacancySource for SuperJobClient {
    fn source(&self) -> Source {
        Source::SuperJob
    }

    async fn search(&self, keyword: &str) -> Result<Vec<VacancyRecord>, AppError> {
        let response = self
            .client
            .get(ENDPOINT)
            .header(APP_ID_HEADER, &self.api_key)
            .query(&[
                ("keyword", keyword.to_string()),
                ("count", RESULT_CAP.to_string()),
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

        let page: SjPage = response
            .json()
            .await
            .map_err(|e| AppError::HttpError(format!("Failed to decode response body: {e}")))?;

        Ok(page.objects.into_iter().map(normalize).collect())
    }
}

// ---- Vendor payload ----

#[derive(Debug, Deserialize)]
struct SjPage {
    objects: Vec<SjItem>,
}

#[derive(Debug, Deserialize)]
struct SjItem {
    profession: String,
    town: Option<SjTown>,
    payment_from: Option<i64>,
    payment_to: Option<i64>,
    candidat: Option<SjCandidate>,
    link: String,
}

#[derive(Debug, Deserialize)]
struct SjTown {
    title: String,
}

/// The candidate field arrives either as a structured profile or as a
/// free-text blob, depending on the posting.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SjCandidate {
    Profile(SjProfile),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct SjProfile {
    #[serde(rename = "professionalSkills", default)]
    professional_skills: Vec<String>,
}

/// Map one raw SuperJob item onto the common record shape.
///
/// The salary arrives as two flat fields; an absent lower bound means the
/// whole salary is unspecified, even when an upper bound is present. A
/// plain-string candidate field carries no extractable skill list and is
/// treated the same as an absent one.
fn normalize(item: SjItem) -> VacancyRecord {
    let city = match item.town {
        Some(town) => town.title,
        None => CITY_NOT_SPECIFIED.to_string(),
    };

    let salary = match item.payment_from {
        None => Salary::NotSpecified,
        Some(from) => Salary::Range {
            from: Some(from),
            to: item.payment_to,
        },
    };

    let requirements = match item.candidat {
        None | Some(SjCandidate::Text(_)) => REQUIREMENTS_SEE_LINK.to_string(),
        Some(SjCandidate::Profile(profile)) => {
            match profile.professional_skills.into_iter().next() {
                Some(skill) => strip_highlight(&skill),
                None => SKILLS_NOT_SPECIFIED.to_string(),
            }
        }
    };

    VacancyRecord {
        source: Source::SuperJob,
        name: item.profession,
        city,
        salary,
        requirements,
        url: item.link,
    }
}
