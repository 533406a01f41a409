//! # Booktrack Architecture
//!
//! Booktrack is a **UI-agnostic book catalog library**. The catalog is a plain
//! text file of `Title:Author:ISBN:Copies` lines; the library validates it,
//! searches it, adds to it, and stays correct when many tasks hit the same
//! catalog from different threads. The `booktrack` binary is one client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prints tables and statistics           │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + Tasks (task.rs)                             │
//! │  - Tracker facade: config, session, worker pool             │
//! │  - Tasks turn failures into logged, counted outcomes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Operation classification, search, add, ingest            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: validate.rs, search.rs, store/                       │
//! │  - Pure validation and queries                              │
//! │  - CatalogStore over FsBackend (production) / MemBackend    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Shared State
//!
//! A [`task::Session`] bundles the three things tasks share: the
//! [`store::CatalogStore`] (writers serialized, readers on snapshots), the
//! [`metrics::SessionMetrics`] (atomic counters) and the [`errlog::ErrorLog`]
//! (one atomic append per entry). There is no global state.
//!
//! ## Module Overview
//!
//! - [`api`]: The `Tracker` facade, entry point for all operations
//! - [`commands`]: Operation dispatch and the per-operation logic
//! - [`task`]: Ingestion/operation tasks and the worker pool
//! - [`store`]: Catalog ownership and storage backends
//! - [`search`]: Title and ISBN queries
//! - [`validate`]: Line validation
//! - [`model`]: The `Book` record
//! - [`metrics`]: Session counters
//! - [`errlog`]: The error log side file
//! - [`config`]: Optional `booktrack.json` settings
//! - [`init`]: Catalog path checks and creation
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod errlog;
pub mod error;
pub mod init;
pub mod metrics;
pub mod model;
pub mod search;
pub mod store;
pub mod task;
pub mod validate;
