//! UI Components
//!
//! Reusable Leptos components shared by the report and dashboard pages.

pub mod alert;
pub mod loading;
pub mod month_picker;
pub mod nav;
pub mod stat_card;

pub use alert::{Alert, AlertVariant};
pub use loading::{InlineLoading, Loading};
pub use month_picker::MonthPicker;
pub use nav::Nav;
pub use stat_card::StatCard;
