//! OpenAPI document for the JSON API.
//!
//! Served at `/api-docs/openapi.json`; with the `swagger-ui` feature an
//! interactive browser is mounted at `/swagger-ui` as well.

use axum::Router;
use utoipa::OpenApi;

use super::dto::{TeacherRequest, TeacherResponse};
use super::handlers::{system, teacher};
use crate::app_state::AppState;
use crate::error::{ErrorBody, ErrorResponse};

/// Path of the generated OpenAPI JSON document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI description of every JSON endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "teacher-roster",
        description = "CRUD API over the school's teacher records."
    ),
    paths(
        teacher::list_teachers,
        teacher::find_teacher,
        teacher::add_teacher,
        teacher::delete_teacher,
        teacher::update_teacher,
        system::health_handler,
    ),
    components(schemas(TeacherRequest, TeacherResponse, ErrorResponse, ErrorBody)),
    tags(
        (name = "Teacher", description = "Teacher records"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Routes serving the OpenAPI document (and Swagger UI when enabled).
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router<AppState> {
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi()),
    )
}

/// Routes serving the OpenAPI document (and Swagger UI when enabled).
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(OPENAPI_JSON_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}
