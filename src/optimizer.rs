//! Blocking HTTP adapter for the route optimization service.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ServiceError;
use crate::request::OptimizeRequest;
use crate::response::OptimizeResponse;
use crate::traits::OptimizationService;

pub const OPTIMIZER_URL_ENV: &str = "TRIP_OPTIMIZER_URL";
pub const OPTIMIZER_TIMEOUT_ENV: &str = "TRIP_OPTIMIZER_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Full endpoint URL the request is POSTed to.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1/optimize/".to_string(),
            timeout_secs: 30,
        }
    }
}

impl OptimizerConfig {
    /// Defaults overridden by `TRIP_OPTIMIZER_URL` and
    /// `TRIP_OPTIMIZER_TIMEOUT_SECS` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(OPTIMIZER_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(OPTIMIZER_TIMEOUT_ENV) {
            match raw.trim().parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => warn!(value = %raw, "ignoring invalid {}", OPTIMIZER_TIMEOUT_ENV),
            }
        }
        config
    }
}

#[derive(Debug, Clone)]
pub struct OptimizerClient {
    config: OptimizerConfig,
    client: reqwest::blocking::Client,
}

impl OptimizerClient {
    pub fn new(config: OptimizerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }
}

impl OptimizationService for OptimizerClient {
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, ServiceError> {
        debug!(url = %self.config.base_url, days = request.days, "posting optimization request");

        let response = self.client.post(&self.config.base_url).json(request).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

pub const GENERIC_FAILURE_MESSAGE: &str =
    "Network error: could not reach the optimization service.";

#[derive(Deserialize)]
struct ErrorBody {
    detail: ErrorDetail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Deserialize)]
struct FieldError {
    msg: String,
}

/// User-facing text for a failed optimization call.
///
/// A server `detail` string is shown as is. A `detail` list of field errors
/// shows the first message as an input error. Anything else gets a generic
/// network message.
pub fn failure_message(error: &ServiceError) -> String {
    let ServiceError::Status { body, .. } = error else {
        return GENERIC_FAILURE_MESSAGE.to_string();
    };

    match serde_json::from_str::<ErrorBody>(body).map(|parsed| parsed.detail) {
        Ok(ErrorDetail::Message(detail)) if !detail.trim().is_empty() => detail,
        Ok(ErrorDetail::Fields(fields)) => match fields.into_iter().next() {
            Some(first) => format!("Invalid input: {}", first.msg),
            None => GENERIC_FAILURE_MESSAGE.to_string(),
        },
        _ => GENERIC_FAILURE_MESSAGE.to_string(),
    }
}
