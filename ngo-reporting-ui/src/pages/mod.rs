//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod submit_report;

pub use dashboard::Dashboard;
pub use submit_report::SubmitReport;
