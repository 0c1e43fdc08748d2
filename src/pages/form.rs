//! Submitted teacher form and its coercion into typed fields.

use serde::Deserialize;

use crate::domain::{TeacherDraft, parse_hire_date, parse_salary};
use crate::error::RosterError;

/// URL-encoded body posted by the create and edit forms.
///
/// Salary and hire date arrive as text and are coerced here; nothing else
/// is validated.
#[derive(Debug, Deserialize)]
pub struct TeacherForm {
    #[serde(rename = "TeacherFName")]
    first_name: String,
    #[serde(rename = "TeacherLName")]
    last_name: String,
    #[serde(rename = "EmployeeNumber", default)]
    employee_number: String,
    #[serde(rename = "TeacherSalary")]
    salary: String,
    #[serde(rename = "TeacherHireDate")]
    hire_date: String,
}

impl TryFrom<TeacherForm> for TeacherDraft {
    type Error = RosterError;

    fn try_from(form: TeacherForm) -> Result<Self, Self::Error> {
        Ok(Self {
            salary: parse_salary(&form.salary)?,
            hire_date: parse_hire_date(&form.hire_date)?,
            first_name: form.first_name,
            last_name: form.last_name,
            employee_number: form.employee_number,
        })
    }
}
