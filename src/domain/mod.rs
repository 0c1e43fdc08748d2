//! Domain layer: the teacher record and its identifier.
//!
//! This module holds the server-side model shared by the persistence,
//! service, API and page layers, plus the type-coercion helpers that turn
//! submitted text into typed fields.

pub mod teacher;
pub mod teacher_id;

pub use teacher::{Teacher, TeacherDraft, parse_hire_date, parse_salary};
pub use teacher_id::TeacherId;
