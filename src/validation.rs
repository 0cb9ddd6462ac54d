//! Report Validation
//!
//! Client-side rules applied before a report is posted. Rules run in a fixed
//! order and the first failure is reported; a draft that fails never reaches
//! the network.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::{Report, ReportDraft};
use crate::month::Month;

/// The editable fields of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportField {
    NgoId,
    Month,
    PeopleHelped,
    EventsConducted,
    FundsUtilized,
}

impl ReportField {
    /// All fields, in validation order
    pub const ALL: [ReportField; 5] = [
        ReportField::NgoId,
        ReportField::Month,
        ReportField::PeopleHelped,
        ReportField::EventsConducted,
        ReportField::FundsUtilized,
    ];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            ReportField::NgoId => "ngo_id",
            ReportField::Month => "month",
            ReportField::PeopleHelped => "people_helped",
            ReportField::EventsConducted => "events_conducted",
            ReportField::FundsUtilized => "funds_utilized",
        }
    }

    /// Sentence-case label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            ReportField::NgoId => "NGO ID",
            ReportField::Month => "Month",
            ReportField::PeopleHelped => "People helped",
            ReportField::EventsConducted => "Events conducted",
            ReportField::FundsUtilized => "Funds utilized",
        }
    }
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReportField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A field name that is not part of the report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report field '{0}'")]
pub struct UnknownField(pub String);

/// Validation failures, reported one at a time in rule order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("NGO ID is required")]
    MissingNgoId,

    #[error("Month is required in YYYY-MM format")]
    InvalidMonth,

    #[error("{0} cannot be negative")]
    Negative(ReportField),

    #[error("{0} must be a whole number")]
    NotAWholeNumber(ReportField),

    #[error("{0} must be a number")]
    NotANumber(ReportField),
}

impl ValidationError {
    /// The field the failure is about
    pub fn field(&self) -> ReportField {
        match self {
            ValidationError::MissingNgoId => ReportField::NgoId,
            ValidationError::InvalidMonth => ReportField::Month,
            ValidationError::Negative(field)
            | ValidationError::NotAWholeNumber(field)
            | ValidationError::NotANumber(field) => *field,
        }
    }
}

impl ReportDraft {
    /// Current text of a field
    pub fn get(&self, field: ReportField) -> &str {
        match field {
            ReportField::NgoId => &self.ngo_id,
            ReportField::Month => &self.month,
            ReportField::PeopleHelped => &self.people_helped,
            ReportField::EventsConducted => &self.events_conducted,
            ReportField::FundsUtilized => &self.funds_utilized,
        }
    }

    /// Replace the text of a field
    pub fn set(&mut self, field: ReportField, value: String) {
        match field {
            ReportField::NgoId => self.ngo_id = value,
            ReportField::Month => self.month = value,
            ReportField::PeopleHelped => self.people_helped = value,
            ReportField::EventsConducted => self.events_conducted = value,
            ReportField::FundsUtilized => self.funds_utilized = value,
        }
    }

    /// Apply the validation rules and build the report to send
    pub fn validate(&self) -> Result<Report, ValidationError> {
        if self.ngo_id.is_empty() {
            return Err(ValidationError::MissingNgoId);
        }

        let month = Month::parse(&self.month).map_err(|_| ValidationError::InvalidMonth)?;
        let people_helped = parse_count(ReportField::PeopleHelped, &self.people_helped)?;
        let events_conducted = parse_count(ReportField::EventsConducted, &self.events_conducted)?;
        let funds_utilized = parse_amount(ReportField::FundsUtilized, &self.funds_utilized)?;

        Ok(Report {
            organization_id: self.ngo_id.clone(),
            month,
            people_helped,
            events_conducted,
            funds_utilized,
        })
    }
}

/// Parse a non-negative integer count. Empty text counts as zero.
fn parse_count(field: ReportField, text: &str) -> Result<u64, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }

    if let Ok(value) = text.parse::<i128>() {
        if value < 0 {
            return Err(ValidationError::Negative(field));
        }
        return u64::try_from(value).map_err(|_| ValidationError::NotAWholeNumber(field));
    }

    // Number inputs may hand back "12.0" or "1e3"
    let value: f64 = text
        .parse()
        .map_err(|_| ValidationError::NotAWholeNumber(field))?;
    if !value.is_finite() {
        return Err(ValidationError::NotAWholeNumber(field));
    }
    if value < 0.0 {
        return Err(ValidationError::Negative(field));
    }
    if value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(ValidationError::NotAWholeNumber(field));
    }
    Ok(value as u64)
}

/// Parse a non-negative finite amount. Empty text counts as zero.
fn parse_amount(field: ReportField, text: &str) -> Result<f64, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = text.parse().map_err(|_| ValidationError::NotANumber(field))?;
    if !value.is_finite() {
        return Err(ValidationError::NotANumber(field));
    }
    if value < 0.0 {
        return Err(ValidationError::Negative(field));
    }
    // normalize -0.0
    Ok(if value == 0.0 { 0.0 } else { value })
}
