//! Type-safe teacher identifier.
//!
//! [`TeacherId`] is a newtype wrapper around the `teacherid` serial
//! column so that teacher identifiers cannot be confused with row counts
//! or other integers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of a teacher record.
///
/// Assigned by the database on insert and immutable thereafter. The value
/// `0` never names a stored row; it marks the empty record returned for a
/// missing teacher.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(transparent)]
pub struct TeacherId(i32);

impl TeacherId {
    /// Wraps a raw `teacherid` value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw `teacherid` value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for TeacherId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<TeacherId> for i32 {
    fn from(id: TeacherId) -> Self {
        id.0
    }
}
