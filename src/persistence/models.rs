//! Row shape of the `teachers` table and its decode into [`Teacher`].

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::domain::{Teacher, TeacherId};

/// One `teachers` row, in the column order every `SELECT` in this crate
/// uses: `teacherid, teacherfname, teacherlname, employeenumber, salary,
/// hiredate`.
pub type TeacherRow = (i32, String, String, String, Decimal, NaiveDateTime);

/// Decodes a fetched row into a [`Teacher`], field by field.
#[must_use]
pub fn decode_teacher(row: TeacherRow) -> Teacher {
    let (id, first_name, last_name, employee_number, salary, hire_date) = row;
    Teacher {
        id: TeacherId::new(id),
        first_name,
        last_name,
        employee_number,
        salary,
        hire_date,
    }
}
