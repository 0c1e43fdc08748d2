//! In-memory teacher repository for unit tests.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use super::TeacherRepository;
use crate::domain::{Teacher, TeacherDraft, TeacherId};
use crate::error::RosterError;

/// Map-backed repository that assigns ids like a serial column.
#[derive(Debug, Default)]
pub(crate) struct InMemoryTeacherStore {
    rows: RwLock<BTreeMap<TeacherId, Teacher>>,
    next_id: RwLock<i32>,
    fail: bool,
}

impl InMemoryTeacherStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A store whose every call reports a persistence failure.
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), RosterError> {
        if self.fail {
            return Err(RosterError::Persistence("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TeacherRepository for InMemoryTeacherStore {
    async fn list_all(&self) -> Result<Vec<Teacher>, RosterError> {
        self.check()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, RosterError> {
        self.check()?;
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn add(&self, draft: &TeacherDraft) -> Result<TeacherId, RosterError> {
        self.check()?;
        let mut next_id = self.next_id.write().await;
        *next_id += 1;
        let id = TeacherId::new(*next_id);
        self.rows
            .write()
            .await
            .insert(id, Teacher::from_draft(id, draft.clone()));
        Ok(id)
    }

    async fn delete(&self, id: TeacherId) -> Result<u64, RosterError> {
        self.check()?;
        Ok(u64::from(self.rows.write().await.remove(&id).is_some()))
    }

    async fn update(&self, id: TeacherId, draft: &TeacherDraft) -> Result<u64, RosterError> {
        self.check()?;
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) => {
                *row = Teacher::from_draft(id, draft.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
