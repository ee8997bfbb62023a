use std::time::Duration;

use janus_core::error::AppError;
use reqwest::Client;

pub(crate) const USER_AGENT: &str = "Janus/0.1 (vacancy aggregator)";

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the reqwest client both vendor clients share the configuration of.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, AppError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::HttpError(e.to_string()))
}

/// Map a reqwest failure onto the transport taxonomy.
pub(crate) fn transport_error(e: reqwest::Error, timeout_secs: u64) -> AppError {
    if e.is_timeout() {
        AppError::Timeout(timeout_secs)
    } else if e.is_connect() {
        AppError::NetworkError(format!("Connection failed: {e}"))
    } else {
        AppError::HttpError(e.to_string())
    }
}
