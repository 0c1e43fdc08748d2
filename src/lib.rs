//! # teacher-roster
//!
//! REST API and server-rendered pages for the school's teacher records.
//!
//! Every operation is one parameterized SQL statement against the
//! `teachers` table. There is no cache and no cross-request state; the
//! connection pool is built once from configuration and passed down.
//!
//! ## Architecture
//!
//! ```text
//! Clients (JSON, browser)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── Page Handlers (pages/)
//!     │
//!     ├── TeacherService (service/)
//!     │
//!     ├── TeacherRepository (persistence/)
//!     │
//!     └── PostgreSQL `teachers`
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod pages;
pub mod persistence;
pub mod service;
