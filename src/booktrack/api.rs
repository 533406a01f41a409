//! # API Facade
//!
//! [`Tracker`] is the single entry point for UI clients. It wires a
//! [`CatalogStore`], the session metrics and the error log together, applies
//! the [`TrackerConfig`], and exposes the operations as task runs so every
//! caller gets the same counting and logging behavior.
//!
//! ## Generic Over CatalogBackend
//!
//! - Production: `Tracker<FsBackend>` via [`Tracker::open`]
//! - Testing: `Tracker<MemBackend>` via [`Tracker::with_backend`]

use crate::commands::ingest::write_entry;
use crate::config::TrackerConfig;
use crate::errlog::{ErrorLog, LogEntry};
use crate::error::Result;
use crate::init::{catalog_dir, prepare_catalog};
use crate::metrics::MetricsSnapshot;
use crate::store::backend::CatalogBackend;
use crate::store::fs_backend::FsBackend;
use crate::store::{Catalog, CatalogStore, RejectedLine};
use crate::task::{run_all, IngestionTask, OperationTask, Session, Task, TaskReport};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct Tracker<B: CatalogBackend> {
    session: Session<B>,
    config: TrackerConfig,
    load_rejections: Vec<RejectedLine>,
}

impl Tracker<FsBackend> {
    /// Open (creating if needed) the catalog file at `catalog`.
    ///
    /// Reads `booktrack.json` from the catalog's directory and places the
    /// error log beside the catalog.
    pub fn open(catalog: &Path) -> Result<Self> {
        prepare_catalog(catalog)?;
        let config = TrackerConfig::load(catalog_dir(catalog))?;
        let log = ErrorLog::beside(catalog, &config.error_log);
        Self::with_backend(FsBackend::new(catalog), log, config)
    }
}

impl<B: CatalogBackend> Tracker<B> {
    /// Load the backend's catalog, counting valid lines and logging the rest.
    pub fn with_backend(backend: B, log: ErrorLog, config: TrackerConfig) -> Result<Self> {
        let (store, rejected) = CatalogStore::open(backend)?;
        let store = store.with_duplicate_policy(config.duplicate_policy());
        let session = Session::new(store, log);

        session.metrics.record_valid(session.store.len() as u64);
        for line in &rejected {
            session.metrics.record_error();
            write_entry(&session.log, &LogEntry::invalid_line(&line.raw, &line.error));
        }
        debug!(
            books = session.store.len(),
            rejected = rejected.len(),
            "tracker ready"
        );

        Ok(Self {
            session,
            config,
            load_rejections: rejected,
        })
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    /// Ingest every file concurrently on the configured worker count.
    pub fn ingest<P: Into<PathBuf>>(&self, paths: impl IntoIterator<Item = P>) -> Vec<TaskReport> {
        let tasks: Vec<Task> = paths
            .into_iter()
            .map(|p| IngestionTask::new(p).into())
            .collect();
        self.run_tasks(&tasks)
    }

    /// Classify `argument` and run it as a single operation.
    pub fn run_operation(&self, argument: &str) -> TaskReport {
        OperationTask::new(argument).run(&self.session)
    }

    pub fn run_tasks(&self, tasks: &[Task]) -> Vec<TaskReport> {
        run_all(&self.session, tasks, self.config.workers)
    }

    pub fn catalog(&self) -> Catalog {
        self.session.store.snapshot()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.session.metrics.snapshot()
    }

    /// Lines of the catalog file that failed validation when it was opened.
    pub fn load_rejections(&self) -> &[RejectedLine] {
        &self.load_rejections
    }

    pub fn error_log_path(&self) -> &Path {
        self.session.log.path()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Operation};
pub use crate::task::TaskOutcome;
