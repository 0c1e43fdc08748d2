//! Compiled HTML views for the teacher pages.
//!
//! Templates live under `templates/` and are checked against these
//! structs at build time.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::domain::{Teacher, TeacherId};
use crate::error::RosterError;

/// Table of every teacher.
#[derive(Debug, Template)]
#[template(path = "teacher_list.html")]
pub(crate) struct ListView {
    pub(crate) teachers: Vec<Teacher>,
}

/// One teacher's details.
#[derive(Debug, Template)]
#[template(path = "teacher_show.html")]
pub(crate) struct ShowView {
    pub(crate) teacher: Teacher,
}

/// Create and edit form; `teacher` prefills the inputs.
#[derive(Debug, Template)]
#[template(path = "teacher_form.html")]
pub(crate) struct FormView {
    pub(crate) heading: &'static str,
    pub(crate) action: String,
    pub(crate) teacher: Teacher,
}

/// Delete confirmation.
#[derive(Debug, Template)]
#[template(path = "teacher_delete_confirm.html")]
pub(crate) struct DeleteConfirmView {
    pub(crate) teacher: Teacher,
}

#[derive(Debug, Template)]
#[template(path = "not_found.html")]
struct NotFoundView {
    id: TeacherId,
}

/// Renders `view` as a `200 OK` HTML page.
///
/// # Errors
///
/// Returns [`RosterError::Template`] if rendering fails.
pub(crate) fn render<T: Template>(view: &T) -> Result<Response, RosterError> {
    Ok(Html(view.render()?).into_response())
}

/// Renders the `404` page for a missing teacher.
///
/// # Errors
///
/// Returns [`RosterError::Template`] if rendering fails.
pub(crate) fn not_found(id: TeacherId) -> Result<Response, RosterError> {
    let missing = RosterError::TeacherNotFound(id);
    tracing::debug!(error = %missing, "rendering not-found page");
    let body = NotFoundView { id }.render()?;
    Ok((missing.status_code(), Html(body)).into_response())
}
