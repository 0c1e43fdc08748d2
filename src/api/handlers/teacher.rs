//! Teacher CRUD handlers: list, find, add, delete, update.
//!
//! A missing teacher is answered with the empty record and `200 OK`, for
//! both find and update. Clients compare `teacherId` against `0`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::api::dto::{TeacherRequest, TeacherResponse};
use crate::app_state::AppState;
use crate::domain::{TeacherDraft, TeacherId};
use crate::error::{ErrorResponse, RosterError};

/// `GET /Teacher/ListTeachers`: Every stored teacher.
///
/// # Errors
///
/// Returns [`RosterError::Persistence`] on database failure.
#[utoipa::path(
    get,
    path = "/api/Teacher/ListTeachers",
    tag = "Teacher",
    summary = "List teachers",
    description = "Returns all teachers in storage order. No filtering or pagination.",
    responses(
        (status = 200, description = "All teachers", body = Vec<TeacherResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn list_teachers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RosterError> {
    let teachers = state.teacher_service.list_teachers().await?;
    let body: Vec<TeacherResponse> = teachers.into_iter().map(TeacherResponse::from).collect();
    Ok(Json(body))
}

/// `GET /Teacher/FindTeacher/{id}`: One teacher, or the empty record.
///
/// # Errors
///
/// Returns [`RosterError::Persistence`] on database failure.
#[utoipa::path(
    get,
    path = "/api/Teacher/FindTeacher/{id}",
    tag = "Teacher",
    summary = "Find a teacher",
    description = "Returns the teacher with the given id. An unknown id yields the empty record (teacherId 0), not an error.",
    params(
        ("id" = i32, Path, description = "Teacher id"),
    ),
    responses(
        (status = 200, description = "Teacher, or the empty record", body = TeacherResponse),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn find_teacher(
    State(state): State<AppState>,
    Path(id): Path<TeacherId>,
) -> Result<impl IntoResponse, RosterError> {
    let teacher = state
        .teacher_service
        .find_teacher(id)
        .await?
        .unwrap_or_default();
    Ok(Json(TeacherResponse::from(teacher)))
}

/// `POST /Teacher/AddTeacher`: Insert a teacher, answer its new id.
///
/// # Errors
///
/// Returns [`RosterError::Persistence`] on database failure.
#[utoipa::path(
    post,
    path = "/api/Teacher/AddTeacher",
    tag = "Teacher",
    summary = "Add a teacher",
    description = "Inserts a teacher from every field except teacherId and returns the id assigned by the database.",
    request_body = TeacherRequest,
    responses(
        (status = 200, description = "Id of the new teacher", body = i32),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn add_teacher(
    State(state): State<AppState>,
    Json(req): Json<TeacherRequest>,
) -> Result<impl IntoResponse, RosterError> {
    let draft = TeacherDraft::from(req);
    let id = state.teacher_service.add_teacher(&draft).await?;
    Ok(Json(id))
}

/// `DELETE /Teacher/DeleteTeacher/{id}`: Remove a teacher, answer the
/// rows affected.
///
/// # Errors
///
/// Returns [`RosterError::Persistence`] on database failure.
#[utoipa::path(
    delete,
    path = "/api/Teacher/DeleteTeacher/{id}",
    tag = "Teacher",
    summary = "Delete a teacher",
    description = "Deletes the teacher with the given id. Returns 1 if a row was removed, 0 otherwise.",
    params(
        ("id" = i32, Path, description = "Teacher id"),
    ),
    responses(
        (status = 200, description = "Rows affected", body = u64),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<TeacherId>,
) -> Result<impl IntoResponse, RosterError> {
    let affected = state.teacher_service.delete_teacher(id).await?;
    Ok(Json(affected))
}

/// `PUT /Teacher/UpdateTeacher/{id}`: Replace a teacher's fields, answer
/// the refreshed record.
///
/// # Errors
///
/// Returns [`RosterError::Persistence`] on database failure.
#[utoipa::path(
    put,
    path = "/api/Teacher/UpdateTeacher/{id}",
    tag = "Teacher",
    summary = "Update a teacher",
    description = "Replaces every mutable field of the teacher and returns the row as re-read from storage. An unknown id changes nothing and yields the empty record.",
    params(
        ("id" = i32, Path, description = "Teacher id"),
    ),
    request_body = TeacherRequest,
    responses(
        (status = 200, description = "Updated teacher, or the empty record", body = TeacherResponse),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<TeacherId>,
    Json(req): Json<TeacherRequest>,
) -> Result<impl IntoResponse, RosterError> {
    let draft = TeacherDraft::from(req);
    let teacher = state
        .teacher_service
        .update_teacher(id, &draft)
        .await?
        .unwrap_or_default();
    Ok(Json(TeacherResponse::from(teacher)))
}

/// Teacher routes, relative to `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/Teacher/ListTeachers", get(list_teachers))
        .route("/Teacher/FindTeacher/{id}", get(find_teacher))
        .route("/Teacher/AddTeacher", post(add_teacher))
        .route("/Teacher/DeleteTeacher/{id}", delete(delete_teacher))
        .route("/Teacher/UpdateTeacher/{id}", put(update_teacher))
}
