//! # NGO Reporting
//!
//! Monthly activity reporting for NGOs: a submission form, an aggregated
//! monthly dashboard, and the client-side contract both share with the
//! reporting API.
//!
//! ## Modules
//!
//! - [`model`]: Wire records exchanged with the reporting API
//! - [`month`]: Canonical `YYYY-MM` month values
//! - [`validation`]: Client-side report validation rules
//! - [`form`]: Report submission screen state and lifecycle
//! - [`dashboard`]: Dashboard screen state with stale-response protection
//! - [`api`]: API client trait and response interpretation
//! - [`client`]: Native HTTP client (feature `native`)
//! - [`config`]: Configuration files and environment overrides (feature `native`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ngo_reporting::{form, ApiConfig, HttpClient, ReportField, ReportForm};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpClient::new(&ApiConfig::default())?;
//!
//!     let mut report = ReportForm::default();
//!     report.update(ReportField::NgoId, "NGO1");
//!     report.update(ReportField::Month, "2024-05");
//!     report.update(ReportField::PeopleHelped, "100");
//!     report.update(ReportField::EventsConducted, "3");
//!     report.update(ReportField::FundsUtilized, "250.5");
//!
//!     let outcome = form::submit(&mut report, &api).await?;
//!     println!("{}", outcome.message());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod dashboard;
pub mod form;
pub mod model;
pub mod month;
pub mod validation;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;

pub use api::{ApiError, ReportingApi, GENERIC_ERROR_MESSAGE};
pub use dashboard::{DashboardRequest, DashboardState, DashboardView, SummaryCard};
pub use form::{ReportForm, SubmitBlocked, SubmitOutcome};
pub use model::{DashboardSummary, Report, ReportDraft, SubmitReceipt};
pub use month::{Month, MonthError};
pub use validation::{ReportField, ValidationError};

#[cfg(feature = "native")]
pub use client::HttpClient;
#[cfg(feature = "native")]
pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
