//! Presentation layer: server-rendered teacher pages.
//!
//! Every page goes through [`crate::service::TeacherService`]; this layer
//! never touches the database. Writes answer `303 See Other` pointing at
//! a read view.

pub mod form;
pub mod handlers;
mod views;

use axum::Router;
use axum::routing::{get, post};

use crate::app_state::AppState;

/// Builds the router for `/` and every `/TeacherPage/...` route.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .route(handlers::LIST_PATH, get(handlers::list))
        .route("/TeacherPage/Show/{id}", get(handlers::show))
        .route("/TeacherPage/New", get(handlers::new))
        .route("/TeacherPage/Create", post(handlers::create))
        .route("/TeacherPage/DeleteConfirm/{id}", get(handlers::delete_confirm))
        .route("/TeacherPage/Delete/{id}", post(handlers::delete))
        .route("/TeacherPage/Edit/{id}", get(handlers::edit))
        .route("/TeacherPage/Update/{id}", post(handlers::update))
}
