//! Core data models for the dealership API.
//!
//! Each entity has a read shape (the stored row, including its generated id)
//! and a create shape (what a client sends). Read shapes map to tables via
//! `sqlx::FromRow`; both serialize as JSON via `serde`.

pub mod buyer;
pub mod car;
pub mod item;
pub mod sale;
pub mod seller;
pub mod stock;
pub mod user;
