//! Native HTTP Client
//!
//! reqwest implementation of [`ReportingApi`] used by the CLI and by
//! anything else running outside the browser.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::api::{self, ApiError, ApiResult, ReportingApi};
use crate::config::ApiConfig;
use crate::model::{DashboardSummary, Report, SubmitReceipt};
use crate::month::Month;

/// Reporting API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for the API described by `config`
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: api::normalize_base_url(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Status and body text of a response
    async fn read(response: reqwest::Response) -> ApiResult<(u16, String)> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        Ok((status, body))
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Transport("request timed out".to_string())
    } else if e.is_connect() {
        ApiError::Transport(format!("reporting API unavailable: {}", e))
    } else if e.is_decode() {
        ApiError::Decode(e.to_string())
    } else {
        ApiError::Transport(e.to_string())
    }
}

#[async_trait(?Send)]
impl ReportingApi for HttpClient {
    async fn submit_report(&self, report: &Report) -> ApiResult<SubmitReceipt> {
        let url = api::report_url(&self.base_url);
        tracing::debug!(url = %url, ngo_id = %report.organization_id, month = %report.month, "Submitting report");

        let response = self
            .client
            .post(&url)
            .json(report)
            .send()
            .await
            .map_err(transport_error)?;

        let (status, body) = Self::read(response).await?;
        api::interpret_submit(status, &body)
    }

    async fn fetch_dashboard(&self, month: &Month) -> ApiResult<Option<DashboardSummary>> {
        let url = api::dashboard_url(&self.base_url, month);
        tracing::debug!(url = %url, "Fetching dashboard");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;

        let (status, body) = Self::read(response).await?;
        api::interpret_dashboard(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let config = ApiConfig {
            base_url: "http://localhost:5000/".to_string(),
            request_timeout_secs: 5,
        };
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
