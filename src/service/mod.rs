//! Service layer: teacher operation orchestration.
//!
//! [`TeacherService`] sits between the HTTP surfaces (JSON API and HTML
//! pages) and the [`crate::persistence::TeacherRepository`].

pub mod teacher_service;

pub use teacher_service::TeacherService;
