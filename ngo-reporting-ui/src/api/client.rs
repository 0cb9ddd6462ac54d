//! HTTP API Client
//!
//! [`ReportingApi`] on top of the browser's fetch via gloo-net.
//!
//! Status codes and bodies are handed to the shared interpreters in
//! `ngo_reporting::api`, so the browser and the native client agree on what
//! every response means.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use ngo_reporting::api::{self, ApiError, ApiResult, ReportingApi};
use ngo_reporting::{DashboardSummary, Month, Report, SubmitReceipt};

/// API base URL when neither the build nor local storage provides one
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Local storage key that overrides the build-time API base URL
pub const API_URL_STORAGE_KEY: &str = "ngo_api_url";

/// API base URL baked in at build time (`NGO_API_URL`)
pub fn build_api_base() -> &'static str {
    option_env!("NGO_API_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Get the API base URL from local storage or use the build-time value
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten());

    let url = match stored {
        Some(url) if !url.trim().is_empty() => url,
        _ => build_api_base().to_string(),
    };
    // Normalize: remove trailing slash
    api::normalize_base_url(&url)
}

/// Reporting API client backed by gloo-net
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlooApi {
    base_url: String,
}

impl GlooApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: api::normalize_base_url(base_url),
        }
    }

    /// Client for the currently configured API base URL
    pub fn from_env() -> Self {
        Self::new(&get_api_base())
    }
}

/// Read the status and full body of a response
async fn read(response: Response) -> ApiResult<(u16, String)> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok((status, body))
}

fn network_error(error: gloo_net::Error) -> ApiError {
    ApiError::Transport(format!("Network error: {}", error))
}

#[async_trait(?Send)]
impl ReportingApi for GlooApi {
    async fn submit_report(&self, report: &Report) -> ApiResult<SubmitReceipt> {
        let response = Request::post(&api::report_url(&self.base_url))
            .json(report)
            .map_err(|e| ApiError::Transport(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;

        let (status, body) = read(response).await?;
        api::interpret_submit(status, &body)
    }

    async fn fetch_dashboard(&self, month: &Month) -> ApiResult<Option<DashboardSummary>> {
        let response = Request::get(&api::dashboard_url(&self.base_url, month))
            .send()
            .await
            .map_err(network_error)?;

        let (status, body) = read(response).await?;
        api::interpret_dashboard(status, &body)
    }
}
