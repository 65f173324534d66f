//! # Report Desk Core
//!
//! Shared logic for Report Desk: data models, the repeated-word
//! analysis algorithm, and the store abstraction.
//!
//! This crate contains no tokio, sqlx, filesystem I/O, or other
//! native-only dependencies. The analysis functions are pure and can
//! be exercised directly in unit tests without a database.

pub mod analysis;
pub mod models;
pub mod store;
