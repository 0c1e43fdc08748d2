//! Page handlers: render views from service results, redirect after
//! every write.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};

use super::form::TeacherForm;
use super::views::{self, DeleteConfirmView, FormView, ListView, ShowView};
use crate::app_state::AppState;
use crate::domain::{Teacher, TeacherDraft, TeacherId};
use crate::error::RosterError;

/// Location of the teacher list page.
pub const LIST_PATH: &str = "/TeacherPage/List";

fn show_path(id: TeacherId) -> String {
    format!("/TeacherPage/Show/{id}")
}

/// `GET /`: Send visitors to the teacher list.
pub async fn index() -> Redirect {
    Redirect::to(LIST_PATH)
}

/// `GET /TeacherPage/List`: Table of all teachers.
///
/// # Errors
///
/// Returns a [`RosterError`] on database or rendering failure.
pub async fn list(State(state): State<AppState>) -> Result<Response, RosterError> {
    let teachers = state.teacher_service.list_teachers().await?;
    views::render(&ListView { teachers })
}

/// `GET /TeacherPage/Show/{id}`: One teacher's details.
///
/// # Errors
///
/// Returns a [`RosterError`] on database or rendering failure.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<TeacherId>,
) -> Result<Response, RosterError> {
    match state.teacher_service.find_teacher(id).await? {
        Some(teacher) => views::render(&ShowView { teacher }),
        None => views::not_found(id),
    }
}

/// `GET /TeacherPage/New`: Empty create form.
///
/// # Errors
///
/// Returns [`RosterError::Template`] on rendering failure.
pub async fn new() -> Result<Response, RosterError> {
    views::render(&FormView {
        heading: "New Teacher",
        action: "/TeacherPage/Create".to_string(),
        teacher: Teacher::default(),
    })
}

/// `POST /TeacherPage/Create`: Add the submitted teacher, then show it.
///
/// # Errors
///
/// Returns [`RosterError::InvalidRequest`] if salary or hire date do not
/// parse, or [`RosterError::Persistence`] on database failure.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<TeacherForm>,
) -> Result<Response, RosterError> {
    let draft = TeacherDraft::try_from(form)?;
    let id = state.teacher_service.add_teacher(&draft).await?;
    Ok(Redirect::to(&show_path(id)).into_response())
}

/// `GET /TeacherPage/DeleteConfirm/{id}`: Ask before deleting.
///
/// # Errors
///
/// Returns a [`RosterError`] on database or rendering failure.
pub async fn delete_confirm(
    State(state): State<AppState>,
    Path(id): Path<TeacherId>,
) -> Result<Response, RosterError> {
    match state.teacher_service.find_teacher(id).await? {
        Some(teacher) => views::render(&DeleteConfirmView { teacher }),
        None => views::not_found(id),
    }
}

/// `POST /TeacherPage/Delete/{id}`: Delete, then return to the list.
///
/// # Errors
///
/// Returns [`RosterError::Persistence`] on database failure.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<TeacherId>,
) -> Result<Response, RosterError> {
    state.teacher_service.delete_teacher(id).await?;
    Ok(Redirect::to(LIST_PATH).into_response())
}

/// `GET /TeacherPage/Edit/{id}`: Form prefilled with the current values.
///
/// # Errors
///
/// Returns a [`RosterError`] on database or rendering failure.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<TeacherId>,
) -> Result<Response, RosterError> {
    match state.teacher_service.find_teacher(id).await? {
        Some(teacher) => views::render(&FormView {
            heading: "Edit Teacher",
            action: format!("/TeacherPage/Update/{id}"),
            teacher,
        }),
        None => views::not_found(id),
    }
}

/// `POST /TeacherPage/Update/{id}`: Replace the teacher's fields, then
/// show it.
///
/// # Errors
///
/// Returns [`RosterError::InvalidRequest`] if salary or hire date do not
/// parse, or [`RosterError::Persistence`] on database failure.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<TeacherId>,
    Form(form): Form<TeacherForm>,
) -> Result<Response, RosterError> {
    let draft = TeacherDraft::try_from(form)?;
    state.teacher_service.update_teacher(id, &draft).await?;
    Ok(Redirect::to(&show_path(id)).into_response())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::app_state::AppState;
    use crate::pages::build_router;
    use crate::persistence::memory::InMemoryTeacherStore;

    fn app() -> axum::Router {
        build_router().with_state(AppState::new(Arc::new(InMemoryTeacherStore::new())))
    }

    async fn call(
        app: &axum::Router,
        method: Method,
        uri: &str,
        form: Option<&str>,
    ) -> (StatusCode, Option<String>, String) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match form {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        };
        let Ok(request) = request else {
            panic!("request build failed");
        };
        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("router call failed");
        };
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let Ok(bytes) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        (status, location, String::from_utf8_lossy(&bytes).into_owned())
    }

    const SAM: &str = "TeacherFName=Sam&TeacherLName=Cooper&EmployeeNumber=E9\
                       &TeacherSalary=50000&TeacherHireDate=2020-01-01";

    #[tokio::test]
    async fn root_redirects_to_list() {
        let (status, location, _) = call(&app(), Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/TeacherPage/List"));
    }

    #[tokio::test]
    async fn create_redirects_to_show_page() {
        let app = app();
        let (status, location, _) =
            call(&app, Method::POST, "/TeacherPage/Create", Some(SAM)).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/TeacherPage/Show/1"));

        let (status, _, html) = call(&app, Method::GET, "/TeacherPage/Show/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Sam Cooper"));
        assert!(html.contains("E9"));
        assert!(html.contains("2020-01-01"));
    }

    #[tokio::test]
    async fn list_shows_every_teacher() {
        let app = app();
        call(&app, Method::POST, "/TeacherPage/Create", Some(SAM)).await;
        let other = "TeacherFName=Linda&TeacherLName=Chan&EmployeeNumber=T382\
                     &TeacherSalary=60.22&TeacherHireDate=2015-08-22T00:00";
        call(&app, Method::POST, "/TeacherPage/Create", Some(other)).await;

        let (status, _, html) = call(&app, Method::GET, "/TeacherPage/List", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Sam Cooper"));
        assert!(html.contains("Linda Chan"));
    }

    #[tokio::test]
    async fn missing_teacher_pages_are_not_found() {
        let app = app();
        for uri in [
            "/TeacherPage/Show/9",
            "/TeacherPage/Edit/9",
            "/TeacherPage/DeleteConfirm/9",
        ] {
            let (status, _, html) = call(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(html.contains("No teacher has id 9"));
        }
    }

    #[tokio::test]
    async fn edit_form_is_prefilled_and_update_redirects() {
        let app = app();
        call(&app, Method::POST, "/TeacherPage/Create", Some(SAM)).await;

        let (status, _, html) = call(&app, Method::GET, "/TeacherPage/Edit/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"action="/TeacherPage/Update/1""#));
        assert!(html.contains(r#"value="Cooper""#));
        assert!(html.contains(r#"value="2020-01-01T00:00:00""#));

        let changed = "TeacherFName=Sam&TeacherLName=Carter&EmployeeNumber=E9\
                       &TeacherSalary=51000&TeacherHireDate=2020-01-01T00:00";
        let (status, location, _) =
            call(&app, Method::POST, "/TeacherPage/Update/1", Some(changed)).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/TeacherPage/Show/1"));

        let (_, _, html) = call(&app, Method::GET, "/TeacherPage/Show/1", None).await;
        assert!(html.contains("Sam Carter"));
        assert!(html.contains("51000"));
    }

    #[tokio::test]
    async fn edit_form_keeps_hire_date_seconds() {
        let app = app();
        let precise = "TeacherFName=Sam&TeacherLName=Cooper&EmployeeNumber=E9\
                       &TeacherSalary=50000&TeacherHireDate=2020-01-01T09:30:15";
        call(&app, Method::POST, "/TeacherPage/Create", Some(precise)).await;

        let (_, _, html) = call(&app, Method::GET, "/TeacherPage/Edit/1", None).await;
        assert!(html.contains(r#"value="2020-01-01T09:30:15""#));
        assert!(html.contains(r#"step="1""#));

        let renamed = "TeacherFName=Samuel&TeacherLName=Cooper&EmployeeNumber=E9\
                       &TeacherSalary=50000&TeacherHireDate=2020-01-01T09:30:15";
        call(&app, Method::POST, "/TeacherPage/Update/1", Some(renamed)).await;

        let (_, _, html) = call(&app, Method::GET, "/TeacherPage/Edit/1", None).await;
        assert!(html.contains(r#"value="Samuel""#));
        assert!(html.contains(r#"value="2020-01-01T09:30:15""#));
    }

    #[tokio::test]
    async fn update_of_missing_teacher_lands_on_not_found() {
        let app = app();
        let (status, location, _) =
            call(&app, Method::POST, "/TeacherPage/Update/42", Some(SAM)).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/TeacherPage/Show/42"));

        let (status, _, html) = call(&app, Method::GET, "/TeacherPage/Show/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("No teacher has id 42"));

        let (_, _, html) = call(&app, Method::GET, "/TeacherPage/List", None).await;
        assert!(!html.contains("Sam Cooper"));
    }

    #[tokio::test]
    async fn delete_confirm_then_delete_returns_to_list() {
        let app = app();
        call(&app, Method::POST, "/TeacherPage/Create", Some(SAM)).await;

        let (status, _, html) =
            call(&app, Method::GET, "/TeacherPage/DeleteConfirm/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"action="/TeacherPage/Delete/1""#));

        let (status, location, _) = call(&app, Method::POST, "/TeacherPage/Delete/1", None).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/TeacherPage/List"));

        let (status, _, _) = call(&app, Method::GET, "/TeacherPage/Show/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unparsable_salary_is_bad_request() {
        let bad = "TeacherFName=A&TeacherLName=B&EmployeeNumber=C\
                   &TeacherSalary=plenty&TeacherHireDate=2020-01-01";
        let (status, _, body) = call(&app(), Method::POST, "/TeacherPage/Create", Some(bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("invalid salary"));
    }

    #[tokio::test]
    async fn new_form_posts_to_create() {
        let (status, _, html) = call(&app(), Method::GET, "/TeacherPage/New", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"action="/TeacherPage/Create""#));
        assert!(html.contains(r#"name="TeacherHireDate""#));
    }
}
