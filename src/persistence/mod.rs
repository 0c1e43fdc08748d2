//! Persistence layer: the teacher repository and its PostgreSQL backend.
//!
//! [`TeacherRepository`] is the data access seam used by the service
//! layer. [`PostgresTeacherStore`] implements it with one parameterized
//! statement per operation over a `sqlx::PgPool`.

#[cfg(test)]
pub(crate) mod memory;
pub mod models;
pub mod postgres;

pub use postgres::PostgresTeacherStore;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::RosterConfig;
use crate::domain::{Teacher, TeacherDraft, TeacherId};
use crate::error::RosterError;

/// Data access operations on the `teachers` table.
///
/// Each method runs exactly one statement. Storage failures surface as
/// [`RosterError::Persistence`] and are never retried.
#[async_trait::async_trait]
pub trait TeacherRepository: Send + Sync + std::fmt::Debug {
    /// Returns every stored teacher, in id order.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Persistence`] on database failure.
    async fn list_all(&self) -> Result<Vec<Teacher>, RosterError>;

    /// Returns the teacher with the given id, or `None` if no row matches.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Persistence`] on database failure.
    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, RosterError>;

    /// Inserts a new row and returns its storage-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Persistence`] on database failure.
    async fn add(&self, draft: &TeacherDraft) -> Result<TeacherId, RosterError>;

    /// Removes the row with the given id and returns the rows affected
    /// (`0` or `1`).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Persistence`] on database failure.
    async fn delete(&self, id: TeacherId) -> Result<u64, RosterError>;

    /// Replaces every mutable field of the row with the given id and
    /// returns the rows affected (`0` or `1`).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Persistence`] on database failure.
    async fn update(&self, id: TeacherId, draft: &TeacherDraft) -> Result<u64, RosterError>;
}

/// Builds the connection pool described by `config`.
///
/// Connections are opened lazily on first use, so the server can start
/// before the database is reachable.
///
/// # Errors
///
/// Returns [`RosterError::Persistence`] if `DATABASE_URL` is malformed.
pub fn connect(config: &RosterConfig) -> Result<PgPool, RosterError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(config.connect_timeout())
        .connect_lazy(&config.database_url)?;
    Ok(pool)
}
