//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::TeacherRepository;
use crate::service::TeacherService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Teacher service used by both the JSON API and the HTML pages.
    pub teacher_service: Arc<TeacherService>,
}

impl AppState {
    /// Builds the state around a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn TeacherRepository>) -> Self {
        Self {
            teacher_service: Arc::new(TeacherService::new(repository)),
        }
    }
}
