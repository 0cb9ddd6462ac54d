//! Data Contract
//!
//! Records exchanged with the reporting API, plus the editable draft the
//! submission form holds before validation.

use serde::{Deserialize, Serialize};

use crate::month::Month;

/// A validated monthly report, ready to post to `/api/report`
///
/// Only produced by [`ReportDraft::validate`](crate::model::ReportDraft::validate),
/// so every value of this type satisfies the client-side rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "ngo_id")]
    pub organization_id: String,
    pub month: Month,
    pub people_helped: u64,
    pub events_conducted: u64,
    pub funds_utilized: f64,
}

/// Raw text of the five report fields as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub ngo_id: String,
    pub month: String,
    pub people_helped: String,
    pub events_conducted: String,
    pub funds_utilized: String,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            ngo_id: String::new(),
            month: String::new(),
            people_helped: "0".to_string(),
            events_conducted: "0".to_string(),
            funds_utilized: "0".to_string(),
        }
    }
}

/// Aggregated statistics for one month, as returned by `/api/dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_ngos: u64,
    pub total_people: u64,
    pub total_events: u64,
    pub total_funds: f64,
}

/// Successful response to a report submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    #[serde(default = "default_receipt_message")]
    pub message: String,
}

fn default_receipt_message() -> String {
    "Report submitted successfully".to_string()
}

impl Default for SubmitReceipt {
    fn default() -> Self {
        Self {
            message: default_receipt_message(),
        }
    }
}

/// Error payload returned by the API with a non-2xx status
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_wire_format() {
        let report = Report {
            organization_id: "NGO1".to_string(),
            month: Month::parse("2024-05").unwrap(),
            people_helped: 100,
            events_conducted: 3,
            funds_utilized: 250.5,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ngo_id": "NGO1",
                "month": "2024-05",
                "people_helped": 100,
                "events_conducted": 3,
                "funds_utilized": 250.5,
            })
        );
    }

    #[test]
    fn test_summary_accepts_integral_funds() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"total_ngos": 2, "total_people": 10, "total_events": 1, "total_funds": 300}"#,
        )
        .unwrap();
        assert_eq!(summary.total_funds, 300.0);
    }

    #[test]
    fn test_receipt_without_message() {
        let receipt: SubmitReceipt = serde_json::from_str("{}").unwrap();
        assert_eq!(receipt.message, "Report submitted successfully");
    }

    #[test]
    fn test_default_draft() {
        let draft = ReportDraft::default();
        assert!(draft.ngo_id.is_empty());
        assert!(draft.month.is_empty());
        assert_eq!(draft.people_helped, "0");
        assert_eq!(draft.events_conducted, "0");
        assert_eq!(draft.funds_utilized, "0");
    }
}
