//! Dashboard
//!
//! State of the monthly dashboard screen. Every month selection issues a
//! [`DashboardRequest`] tagged with a sequence number; only the newest
//! request may change what is displayed, so a slow response for an earlier
//! month can never overwrite a later selection.

use crate::api::{ApiResult, ReportingApi};
use crate::model::DashboardSummary;
use crate::month::Month;

/// Shown when the API has nothing for the selected month
pub const EMPTY_MESSAGE: &str = "No data available for this month.";

/// Shown when the selected month is not a canonical `YYYY-MM`
pub const INVALID_MONTH_MESSAGE: &str = "Month must be in YYYY-MM format";

/// A dashboard fetch that has been issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardRequest {
    pub seq: u64,
    pub month: Month,
}

/// Dashboard screen state
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    input: String,
    month: Option<Month>,
    latest_seq: u64,
    loading: bool,
    error: Option<String>,
    summary: Option<DashboardSummary>,
}

/// What the dashboard renders, in priority order
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Error(String),
    Loading,
    Empty,
    Populated(Vec<SummaryCard>),
}

/// One figure on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
}

impl SummaryCard {
    /// The four cards for a summary, in display order
    pub fn from_summary(summary: &DashboardSummary) -> Vec<SummaryCard> {
        vec![
            SummaryCard {
                label: "Total NGOs Reporting",
                value: summary.total_ngos.to_string(),
            },
            SummaryCard {
                label: "Total People Helped",
                value: summary.total_people.to_string(),
            },
            SummaryCard {
                label: "Total Events Conducted",
                value: summary.total_events.to_string(),
            },
            SummaryCard {
                label: "Total Funds Utilized",
                value: format_funds(summary.total_funds),
            },
        ]
    }
}

/// Currency notation with two decimals, e.g. `$15320.75`
pub fn format_funds(amount: f64) -> String {
    format!("${:.2}", amount)
}

impl DashboardState {
    /// Dashboard showing `month`; call [`refresh`](Self::refresh) to load it
    pub fn new(month: Month) -> Self {
        Self {
            input: month.to_string(),
            month: Some(month),
            latest_seq: 0,
            loading: false,
            error: None,
            summary: None,
        }
    }

    /// Text currently in the month selector
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The selected month, if the selector holds a valid one
    pub fn month(&self) -> Option<Month> {
        self.month
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn summary(&self) -> Option<&DashboardSummary> {
        self.summary.as_ref()
    }

    /// Change the selected month from free text or the picker
    ///
    /// Any selection supersedes requests still in flight. Input that is not
    /// a canonical month issues nothing and shows a validation error.
    pub fn select_month(&mut self, input: &str) -> Option<DashboardRequest> {
        self.input = input.to_string();
        self.latest_seq += 1;

        match Month::parse(input) {
            Ok(month) => {
                self.month = Some(month);
                Some(self.issue(month))
            }
            Err(e) => {
                tracing::debug!("Month selection rejected: {}", e);
                self.month = None;
                self.loading = false;
                self.summary = None;
                self.error = Some(INVALID_MONTH_MESSAGE.to_string());
                None
            }
        }
    }

    /// Re-issue the request for the current month
    pub fn refresh(&mut self) -> Option<DashboardRequest> {
        let month = self.month?;
        self.latest_seq += 1;
        Some(self.issue(month))
    }

    fn issue(&mut self, month: Month) -> DashboardRequest {
        self.loading = true;
        self.error = None;

        let request = DashboardRequest {
            seq: self.latest_seq,
            month,
        };
        tracing::debug!(seq = request.seq, month = %month, "Dashboard request issued");
        request
    }

    /// Whether `request` is the newest one issued
    pub fn is_current(&self, request: &DashboardRequest) -> bool {
        request.seq == self.latest_seq
    }

    /// Record the result of `request`
    ///
    /// Returns `false` and leaves the state untouched when a newer request
    /// has been issued since.
    pub fn apply(
        &mut self,
        request: &DashboardRequest,
        result: ApiResult<Option<DashboardSummary>>,
    ) -> bool {
        if !self.is_current(request) {
            tracing::debug!(
                seq = request.seq,
                latest = self.latest_seq,
                month = %request.month,
                "Discarding stale dashboard response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(summary) => {
                self.error = None;
                self.summary = summary;
            }
            Err(e) => {
                tracing::warn!(month = %request.month, "Dashboard fetch failed: {}", e);
                self.error = Some(e.user_message());
                self.summary = None;
            }
        }
        true
    }

    /// What to render right now
    pub fn view(&self) -> DashboardView {
        if let Some(error) = &self.error {
            return DashboardView::Error(error.clone());
        }
        if self.loading {
            return DashboardView::Loading;
        }
        match &self.summary {
            Some(summary) => DashboardView::Populated(SummaryCard::from_summary(summary)),
            None => DashboardView::Empty,
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Month::current())
    }
}

/// Select `input` and load it through `api`
pub async fn load<A>(state: &mut DashboardState, api: &A, input: &str) -> DashboardView
where
    A: ReportingApi + ?Sized,
{
    if let Some(request) = state.select_month(input) {
        let result = api.fetch_dashboard(&request.month).await;
        state.apply(&request, result);
    }
    state.view()
}
