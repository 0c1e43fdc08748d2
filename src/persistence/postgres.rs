//! PostgreSQL implementation of the teacher repository.

use sqlx::PgPool;

use super::TeacherRepository;
use super::models::{TeacherRow, decode_teacher};
use crate::domain::{Teacher, TeacherDraft, TeacherId};
use crate::error::RosterError;

/// PostgreSQL-backed teacher store using `sqlx::PgPool`.
///
/// Every method checks one connection out of the pool for a single
/// statement; sqlx returns it to the pool when the statement finishes or
/// fails.
#[derive(Debug, Clone)]
pub struct PostgresTeacherStore {
    pool: PgPool,
}

impl PostgresTeacherStore {
    /// Creates a store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl TeacherRepository for PostgresTeacherStore {
    async fn list_all(&self) -> Result<Vec<Teacher>, RosterError> {
        let rows = sqlx::query_as::<_, TeacherRow>(
            "SELECT teacherid, teacherfname, teacherlname, employeenumber, salary, hiredate \
             FROM teachers ORDER BY teacherid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(decode_teacher).collect())
    }

    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, RosterError> {
        let row = sqlx::query_as::<_, TeacherRow>(
            "SELECT teacherid, teacherfname, teacherlname, employeenumber, salary, hiredate \
             FROM teachers WHERE teacherid = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(decode_teacher))
    }

    async fn add(&self, draft: &TeacherDraft) -> Result<TeacherId, RosterError> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO teachers (teacherfname, teacherlname, employeenumber, salary, hiredate) \
             VALUES ($1, $2, $3, $4, $5) RETURNING teacherid",
        )
        .bind(&draft.first_name)
        .bind(&draft.last_name)
        .bind(&draft.employee_number)
        .bind(draft.salary)
        .bind(draft.hire_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(TeacherId::new(id))
    }

    async fn delete(&self, id: TeacherId) -> Result<u64, RosterError> {
        let result = sqlx::query("DELETE FROM teachers WHERE teacherid = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn update(&self, id: TeacherId, draft: &TeacherDraft) -> Result<u64, RosterError> {
        let result = sqlx::query(
            "UPDATE teachers SET teacherfname = $1, teacherlname = $2, employeenumber = $3, \
             salary = $4, hiredate = $5 WHERE teacherid = $6",
        )
        .bind(&draft.first_name)
        .bind(&draft.last_name)
        .bind(&draft.employee_number)
        .bind(draft.salary)
        .bind(draft.hire_date)
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
