//! # Report Desk
//!
//! **A small HTTP API for managing projects and their reports, backed by
//! SQLite, with one analytical endpoint that flags reports containing a
//! word repeated at least three times.**
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌─────────────┐   ┌──────────┐
//! │   HTTP   │──▶│ Store trait  │──▶│  SQLite   │
//! │  (Axum)  │   │ (async seam) │   │   (WAL)   │
//! └────┬─────┘   └─────────────┘   └──────────┘
//!      │
//!      ▼
//! ┌───────────────────────┐
//! │ repeated-word detector │   (pure, report-desk-core)
//! └───────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! 1. CRUD endpoints map request parameters straight onto [`Store`]
//!    operations — there is no business logic in between.
//! 2. The analytical endpoint fetches the full report corpus via
//!    [`Store::all_reports`], runs the pure
//!    [`filter_repeated`](report_desk_core::analysis::filter_repeated)
//!    pass over it, and serializes the qualifying subset as-is.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`db`] | SQLite connection pool with WAL mode |
//! | [`migrate`] | Database schema setup (idempotent) |
//! | [`sqlite_store`] | SQLite implementation of the `Store` trait |
//! | [`server`] | JSON HTTP server (Axum) with CORS |
//! | [`scan`] | CLI repeated-word scan over the stored corpus |
//! | [`stats`] | Database statistics for `reportd stats` |
//!
//! [`Store`]: report_desk_core::store::Store
//! [`Store::all_reports`]: report_desk_core::store::Store::all_reports

pub mod config;
pub mod db;
pub mod migrate;
pub mod scan;
pub mod server;
pub mod sqlite_store;
pub mod stats;

pub use report_desk_core::analysis;
pub use report_desk_core::models;
pub use report_desk_core::store;
