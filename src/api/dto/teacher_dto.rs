//! Teacher request/response bodies.
//!
//! Field names are camelCase (`teacherFName`, `teacherHireDate`, …).
//! Requests also accept the PascalCase spellings older clients send.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::{Teacher, TeacherDraft, TeacherId, parse_hire_date};

/// Request body for `POST /api/Teacher/AddTeacher` and
/// `PUT /api/Teacher/UpdateTeacher/{id}`.
///
/// A `teacherId` in the body is ignored; the id comes from storage (add)
/// or from the path (update).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TeacherRequest {
    /// Given name.
    #[serde(
        rename = "teacherFName",
        alias = "TeacherFName",
        alias = "teacherFname",
        alias = "TeacherFname"
    )]
    #[schema(example = "Sam")]
    pub teacher_fname: String,
    /// Family name.
    #[serde(
        rename = "teacherLName",
        alias = "TeacherLName",
        alias = "teacherLname",
        alias = "TeacherLname"
    )]
    #[schema(example = "Cooper")]
    pub teacher_lname: String,
    /// Business employee number.
    #[serde(rename = "employeeNumber", alias = "EmployeeNumber")]
    #[schema(example = "E9")]
    pub employee_number: String,
    /// Salary as a decimal string or JSON number.
    #[serde(rename = "teacherSalary", alias = "TeacherSalary")]
    #[schema(value_type = String, example = "50000.00")]
    pub teacher_salary: Decimal,
    /// Hire date: `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`.
    #[serde(
        rename = "teacherHireDate",
        alias = "TeacherHireDate",
        deserialize_with = "deserialize_hire_date"
    )]
    #[schema(value_type = String, example = "2020-01-01T00:00:00")]
    pub teacher_hire_date: NaiveDateTime,
}

impl From<TeacherRequest> for TeacherDraft {
    fn from(req: TeacherRequest) -> Self {
        Self {
            first_name: req.teacher_fname,
            last_name: req.teacher_lname,
            employee_number: req.employee_number,
            salary: req.teacher_salary,
            hire_date: req.teacher_hire_date,
        }
    }
}

/// A teacher as returned by the JSON API.
///
/// A missing teacher is reported as the empty record: `teacherId` `0`,
/// empty strings, zero salary, hire date `1970-01-01T00:00:00`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherResponse {
    /// Storage-assigned id.
    #[schema(value_type = i32, example = 3)]
    pub teacher_id: TeacherId,
    /// Given name.
    #[serde(rename = "teacherFName")]
    pub teacher_fname: String,
    /// Family name.
    #[serde(rename = "teacherLName")]
    pub teacher_lname: String,
    /// Business employee number.
    pub employee_number: String,
    /// Salary, serialized as a decimal string.
    #[schema(value_type = String, example = "50000.00")]
    pub teacher_salary: Decimal,
    /// Hire date, `YYYY-MM-DDTHH:MM:SS`.
    #[schema(value_type = String, example = "2020-01-01T00:00:00")]
    pub teacher_hire_date: NaiveDateTime,
}

impl From<Teacher> for TeacherResponse {
    fn from(t: Teacher) -> Self {
        Self {
            teacher_id: t.id,
            teacher_fname: t.first_name,
            teacher_lname: t.last_name,
            employee_number: t.employee_number,
            teacher_salary: t.salary,
            teacher_hire_date: t.hire_date,
        }
    }
}

fn deserialize_hire_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_hire_date(&raw).map_err(serde::de::Error::custom)
}
