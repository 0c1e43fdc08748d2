//! Teacher service: orchestrates repository calls and logs mutations.

use std::sync::Arc;

use crate::domain::{Teacher, TeacherDraft, TeacherId};
use crate::error::RosterError;
use crate::persistence::TeacherRepository;

/// Orchestration layer for all teacher operations.
///
/// Stateless coordinator over a [`TeacherRepository`]. Both the JSON API
/// and the HTML pages go through it; neither touches the database
/// directly.
#[derive(Debug, Clone)]
pub struct TeacherService {
    repository: Arc<dyn TeacherRepository>,
}

impl TeacherService {
    /// Creates a new `TeacherService`.
    #[must_use]
    pub fn new(repository: Arc<dyn TeacherRepository>) -> Self {
        Self { repository }
    }

    /// Lists every stored teacher.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Persistence`] on database failure.
    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, RosterError> {
        let teachers = self.repository.list_all().await?;
        tracing::debug!(count = teachers.len(), "listed teachers");
        Ok(teachers)
    }

    /// Looks up one teacher. `None` means no row has this id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Persistence`] on database failure.
    pub async fn find_teacher(&self, id: TeacherId) -> Result<Option<Teacher>, RosterError> {
        let teacher = self.repository.find_by_id(id).await?;
        if teacher.is_none() {
            tracing::debug!(teacher_id = %id, "teacher not found");
        }
        Ok(teacher)
    }

    /// Inserts a teacher and returns the id the database assigned.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Persistence`] on database failure.
    pub async fn add_teacher(&self, draft: &TeacherDraft) -> Result<TeacherId, RosterError> {
        let id = self.repository.add(draft).await?;
        tracing::info!(teacher_id = %id, employee_number = %draft.employee_number, "teacher added");
        Ok(id)
    }

    /// Deletes a teacher and returns the rows affected (`0` or `1`).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Persistence`] on database failure.
    pub async fn delete_teacher(&self, id: TeacherId) -> Result<u64, RosterError> {
        let affected = self.repository.delete(id).await?;
        tracing::info!(teacher_id = %id, affected, "teacher deleted");
        Ok(affected)
    }

    /// Replaces every mutable field of a teacher, then re-reads the row.
    ///
    /// Returns `None` when no row has this id; the write is then a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Persistence`] on database failure.
    pub async fn update_teacher(
        &self,
        id: TeacherId,
        draft: &TeacherDraft,
    ) -> Result<Option<Teacher>, RosterError> {
        let affected = self.repository.update(id, draft).await?;
        if affected == 0 {
            tracing::warn!(teacher_id = %id, "update matched no teacher");
        } else {
            tracing::info!(teacher_id = %id, "teacher updated");
        }
        self.find_teacher(id).await
    }
}
