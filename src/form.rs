//! Report Submission
//!
//! State of the report submission screen: the draft being edited and the
//! lifecycle of a single submission (validate, post, show the outcome).
//!
//! The screen drives this in two steps so the state never has to be held
//! across an `await`: [`ReportForm::begin_submit`] validates and marks the
//! form busy, [`ReportForm::finish_submit`] records the API's answer.
//! [`submit`] chains both for callers that own the form outright.

use thiserror::Error;

use crate::api::{ApiError, ApiResult, ReportingApi};
use crate::model::{Report, ReportDraft, SubmitReceipt};
use crate::validation::{ReportField, ValidationError};

/// Submission screen state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportForm {
    draft: ReportDraft,
    submitting: bool,
    error: Option<String>,
    success: Option<String>,
}

/// Why a submission did not reach the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// How a submission that reached the API ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Stored by the API; the form has been reset
    Accepted(String),
    /// The API refused the report; the draft is kept
    Rejected(String),
    /// Network or unexpected failure; the draft is kept
    Failed(String),
}

impl SubmitOutcome {
    /// The message displayed for this outcome
    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Accepted(m) | SubmitOutcome::Rejected(m) | SubmitOutcome::Failed(m) => m,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

impl ReportForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    /// Current text of one field
    pub fn value(&self, field: ReportField) -> &str {
        self.draft.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Set a field's text. Editing clears the error message.
    pub fn update(&mut self, field: ReportField, value: impl Into<String>) {
        self.draft.set(field, value.into());
        self.error = None;
    }

    /// Validate the current draft without changing any state
    pub fn validate(&self) -> Result<Report, ValidationError> {
        self.draft.validate()
    }

    /// Restore the empty draft
    pub fn reset(&mut self) {
        self.draft = ReportDraft::default();
    }

    /// Start a submission
    ///
    /// Returns the report to post, or why nothing should be sent. A
    /// validation failure becomes the displayed error.
    pub fn begin_submit(&mut self) -> Result<Report, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        self.error = None;
        self.success = None;

        match self.draft.validate() {
            Ok(report) => {
                self.submitting = true;
                Ok(report)
            }
            Err(e) => {
                tracing::debug!(field = e.field().name(), "Report rejected by validation: {}", e);
                self.error = Some(e.to_string());
                Err(SubmitBlocked::Invalid(e))
            }
        }
    }

    /// Record the API's answer to the submission started by `begin_submit`
    pub fn finish_submit(&mut self, result: ApiResult<SubmitReceipt>) -> SubmitOutcome {
        self.submitting = false;

        match result {
            Ok(receipt) => {
                tracing::info!("Report accepted: {}", receipt.message);
                self.reset();
                self.error = None;
                self.success = Some(receipt.message.clone());
                SubmitOutcome::Accepted(receipt.message)
            }
            Err(e) => {
                let message = e.user_message();
                match e {
                    ApiError::Rejected { status, .. } => {
                        tracing::info!(status, "Report rejected by API: {}", message);
                        self.error = Some(message.clone());
                        SubmitOutcome::Rejected(message)
                    }
                    other => {
                        tracing::warn!("Report submission failed: {}", other);
                        self.error = Some(message.clone());
                        SubmitOutcome::Failed(message)
                    }
                }
            }
        }
    }
}

/// Validate and post the form's draft through `api`
///
/// Nothing is sent when validation fails or a submission is already running.
pub async fn submit<A>(form: &mut ReportForm, api: &A) -> Result<SubmitOutcome, SubmitBlocked>
where
    A: ReportingApi + ?Sized,
{
    let report = form.begin_submit()?;
    let result = api.submit_report(&report).await;
    Ok(form.finish_submit(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GENERIC_ERROR_MESSAGE;
    use crate::model::DashboardSummary;
    use crate::month::Month;
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Records posted reports and answers with a canned result
    struct RecordingApi {
        response: ApiResult<SubmitReceipt>,
        sent: RefCell<Vec<Report>>,
    }

    impl RecordingApi {
        fn answering(response: ApiResult<SubmitReceipt>) -> Self {
            Self {
                response,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ReportingApi for RecordingApi {
        async fn submit_report(&self, report: &Report) -> ApiResult<SubmitReceipt> {
            self.sent.borrow_mut().push(report.clone());
            self.response.clone()
        }

        async fn fetch_dashboard(&self, _month: &Month) -> ApiResult<Option<DashboardSummary>> {
            Ok(None)
        }
    }

    fn filled_form() -> ReportForm {
        let mut form = ReportForm::new();
        form.update(ReportField::NgoId, "NGO1");
        form.update(ReportField::Month, "2024-05");
        form.update(ReportField::PeopleHelped, "100");
        form.update(ReportField::EventsConducted, "3");
        form.update(ReportField::FundsUtilized, "250.5");
        form
    }

    fn accepted() -> ApiResult<SubmitReceipt> {
        Ok(SubmitReceipt {
            message: "Report submitted successfully".to_string(),
        })
    }

    #[tokio::test]
    async fn test_valid_report_sent_unchanged() {
        let api = RecordingApi::answering(accepted());
        let mut form = filled_form();

        let outcome = submit(&mut form, &api).await.unwrap();
        assert!(outcome.is_accepted());

        let sent = api.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            serde_json::to_value(&sent[0]).unwrap(),
            serde_json::json!({
                "ngo_id": "NGO1",
                "month": "2024-05",
                "people_helped": 100,
                "events_conducted": 3,
                "funds_utilized": 250.5,
            })
        );
    }

    #[tokio::test]
    async fn test_success_resets_form() {
        let api = RecordingApi::answering(accepted());
        let mut form = filled_form();

        submit(&mut form, &api).await.unwrap();

        assert_eq!(form.draft(), &ReportDraft::default());
        assert_eq!(form.success(), Some("Report submitted successfully"));
        assert_eq!(form.error(), None);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_invalid_report_never_sent() {
        let api = RecordingApi::answering(accepted());

        let mut form = filled_form();
        form.update(ReportField::NgoId, "");
        let blocked = submit(&mut form, &api).await.unwrap_err();
        assert_eq!(blocked, SubmitBlocked::Invalid(ValidationError::MissingNgoId));
        assert_eq!(form.error(), Some("NGO ID is required"));

        let mut form = filled_form();
        form.update(ReportField::Month, "");
        submit(&mut form, &api).await.unwrap_err();
        assert_eq!(form.error(), Some("Month is required in YYYY-MM format"));

        let mut form = filled_form();
        form.update(ReportField::EventsConducted, "-4");
        submit(&mut form, &api).await.unwrap_err();
        assert_eq!(form.error(), Some("Events conducted cannot be negative"));

        assert!(api.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_api_error_keeps_draft() {
        let api = RecordingApi::answering(Err(ApiError::Rejected {
            status: 400,
            message: "duplicate report".to_string(),
        }));
        let mut form = filled_form();
        let before = form.draft().clone();

        let outcome = submit(&mut form, &api).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Rejected("duplicate report".to_string()));
        assert_eq!(form.error(), Some("duplicate report"));
        assert_eq!(form.success(), None);
        assert_eq!(form.draft(), &before);
    }

    #[tokio::test]
    async fn test_transport_error_shows_generic_message() {
        let api = RecordingApi::answering(Err(ApiError::Transport("connection reset".to_string())));
        let mut form = filled_form();
        let before = form.draft().clone();

        let outcome = submit(&mut form, &api).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Failed(GENERIC_ERROR_MESSAGE.to_string()));
        assert_eq!(form.error(), Some(GENERIC_ERROR_MESSAGE));
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn test_single_submission_in_flight() {
        let mut form = filled_form();

        assert!(form.begin_submit().is_ok());
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));

        form.finish_submit(accepted());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_new_submission_clears_previous_messages() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit(accepted());
        assert!(form.success().is_some());

        form.update(ReportField::NgoId, "NGO2");
        form.update(ReportField::Month, "2024-06");
        form.begin_submit().unwrap();
        assert_eq!(form.success(), None);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = ReportForm::new();
        form.begin_submit().unwrap_err();
        assert!(form.error().is_some());

        form.update(ReportField::NgoId, "N");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut form = filled_form();
        form.update(ReportField::FundsUtilized, "-3");
        form.reset();
        assert_eq!(form.draft(), &ReportDraft::default());
        form.reset();
        assert_eq!(form.draft(), &ReportDraft::default());
        assert_eq!(form.draft(), ReportForm::new().draft());
    }
}
