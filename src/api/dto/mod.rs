//! Data Transfer Objects for REST request/response serialization.
//!
//! Salaries travel as decimal strings so cents survive the round trip.

pub mod teacher_dto;

pub use teacher_dto::*;
