//! Reporting API Contract
//!
//! The client side of the external reporting service.
//!
//! # Endpoints
//!
//! - `POST /api/report` - Submit a monthly report
//! - `GET /api/dashboard?month=YYYY-MM` - Aggregated statistics for a month
//!
//! Transport is left to implementations of [`ReportingApi`]: the native
//! [`HttpClient`](crate::client::HttpClient) uses reqwest, the web UI uses
//! gloo-net. Both hand the raw status and body to [`interpret_submit`] and
//! [`interpret_dashboard`] so they agree on what every response means.

pub mod error;

pub use error::{ApiError, ApiResult, GENERIC_ERROR_MESSAGE};

use async_trait::async_trait;

use crate::model::{DashboardSummary, ErrorBody, Report, SubmitReceipt};
use crate::month::Month;

/// Report submission endpoint
pub const REPORT_PATH: &str = "/api/report";

/// Dashboard endpoint
pub const DASHBOARD_PATH: &str = "/api/dashboard";

/// Fallback when a failed submission carries no `error` field
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit report";

/// Fallback when a failed dashboard fetch carries no `error` field
pub const DASHBOARD_FAILED_MESSAGE: &str = "Failed to fetch dashboard data";

/// Operations offered by the reporting API
///
/// Futures are not required to be `Send` so the trait can be implemented
/// on top of the browser's fetch.
#[async_trait(?Send)]
pub trait ReportingApi {
    /// Post a validated report
    async fn submit_report(&self, report: &Report) -> ApiResult<SubmitReceipt>;

    /// Fetch the summary for `month`; `None` means no data for that month
    async fn fetch_dashboard(&self, month: &Month) -> ApiResult<Option<DashboardSummary>>;
}

/// Strip surrounding whitespace and trailing slashes from a base URL
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Full URL of the report endpoint
pub fn report_url(base_url: &str) -> String {
    format!("{}{}", normalize_base_url(base_url), REPORT_PATH)
}

/// Full URL of the dashboard endpoint for `month`
pub fn dashboard_url(base_url: &str, month: &Month) -> String {
    format!(
        "{}{}?month={}",
        normalize_base_url(base_url),
        DASHBOARD_PATH,
        urlencoding::encode(&month.to_string())
    )
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Pull the `error` field out of a failure body, if there is one
fn rejection(status: u16, body: &str, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());

    ApiError::Rejected { status, message }
}

/// Interpret the response to `POST /api/report`
pub fn interpret_submit(status: u16, body: &str) -> ApiResult<SubmitReceipt> {
    if !is_success(status) {
        return Err(rejection(status, body, SUBMIT_FAILED_MESSAGE));
    }

    if body.trim().is_empty() {
        return Ok(SubmitReceipt::default());
    }

    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret the response to `GET /api/dashboard`
///
/// An empty body, `null`, `{}` or `204 No Content` all mean "no data for this
/// month".
pub fn interpret_dashboard(status: u16, body: &str) -> ApiResult<Option<DashboardSummary>> {
    if !is_success(status) {
        return Err(rejection(status, body, DASHBOARD_FAILED_MESSAGE));
    }

    let body = body.trim();
    if status == 204 || body.is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(ref fields) if fields.is_empty() => Ok(None),
        value => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string())),
    }
}
