//! Teacher record and its mutable field set.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::TeacherId;
use crate::error::RosterError;

/// Accepted textual layouts for a hire date, tried in order.
const HIRE_DATE_TIME_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// The five fields a client supplies when adding or replacing a teacher.
///
/// Update is a full-record replace, so the same type serves both
/// operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Business identifier; uniqueness is not enforced.
    pub employee_number: String,
    /// Salary, no currency unit.
    pub salary: Decimal,
    /// Hire date and time, no timezone.
    pub hire_date: NaiveDateTime,
}

/// A stored teacher record.
///
/// `Teacher::default()` is the empty record: id `0`, empty strings, zero
/// salary and a hire date at the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Teacher {
    /// Storage-assigned primary key.
    pub id: TeacherId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Business identifier.
    pub employee_number: String,
    /// Salary, no currency unit.
    pub salary: Decimal,
    /// Hire date and time, no timezone.
    pub hire_date: NaiveDateTime,
}

impl Teacher {
    /// Builds a record from an assigned id and the supplied fields.
    #[must_use]
    pub fn from_draft(id: TeacherId, draft: TeacherDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            employee_number: draft.employee_number,
            salary: draft.salary,
            hire_date: draft.hire_date,
        }
    }
}

#[cfg(test)]
impl Teacher {
    /// Returns `true` for the empty record.
    pub(crate) fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Splits off the mutable fields.
    pub(crate) fn into_draft(self) -> TeacherDraft {
        TeacherDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            employee_number: self.employee_number,
            salary: self.salary,
            hire_date: self.hire_date,
        }
    }
}

/// Parses a submitted hire date.
///
/// Accepts `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM`,
/// `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds, and the
/// space-separated `YYYY-MM-DD HH:MM:SS`.
///
/// # Errors
///
/// Returns [`RosterError::InvalidRequest`] if no layout matches.
pub fn parse_hire_date(raw: &str) -> Result<NaiveDateTime, RosterError> {
    let raw = raw.trim();
    for format in HIRE_DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| RosterError::InvalidRequest(format!("invalid hire date: {raw}")))
}

/// Parses a submitted salary.
///
/// # Errors
///
/// Returns [`RosterError::InvalidRequest`] if `raw` is not a decimal number.
pub fn parse_salary(raw: &str) -> Result<Decimal, RosterError> {
    let raw = raw.trim();
    raw.parse::<Decimal>()
        .map_err(|_| RosterError::InvalidRequest(format!("invalid salary: {raw}")))
}
