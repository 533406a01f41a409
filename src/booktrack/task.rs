//! # Tasks
//!
//! Units of work that can run on any thread against one shared [`Session`].
//! A task never returns an error to whoever scheduled it: failures are logged,
//! counted in the session metrics and described in the returned
//! [`TaskReport`], so from the scheduler's side every task simply finishes.
//!
//! [`run_all`] is a small scoped worker pool for running a batch of tasks;
//! any other executor works as long as it hands each task a `&Session`.

use crate::commands::ingest::{self, write_entry, IngestSummary};
use crate::commands::{execute, CmdResult, Operation};
use crate::errlog::{ErrorLog, LogCategory, LogEntry};
use crate::error::{CatalogError, ErrorKind};
use crate::metrics::SessionMetrics;
use crate::store::backend::CatalogBackend;
use crate::store::CatalogStore;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use tracing::{info, warn};

/// Everything a task may touch.
pub struct Session<B: CatalogBackend> {
    pub store: CatalogStore<B>,
    pub metrics: SessionMetrics,
    pub log: ErrorLog,
}

impl<B: CatalogBackend> Session<B> {
    pub fn new(store: CatalogStore<B>, log: ErrorLog) -> Self {
        Self {
            store,
            metrics: SessionMetrics::new(),
            log,
        }
    }

    /// Count and log a task level failure.
    fn fail(&self, category: LogCategory, raw_input: &str, error: &CatalogError) -> TaskOutcome {
        self.metrics.record_error();
        write_entry(&self.log, &LogEntry::new(category, raw_input, error));
        TaskOutcome::Failure {
            kind: error.kind(),
            detail: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Success,
    Failure { kind: ErrorKind, detail: String },
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Success)
    }
}

#[derive(Debug)]
pub struct TaskReport {
    /// Path for ingestion, argument for operations.
    pub label: String,
    pub outcome: TaskOutcome,
    pub ingest: Option<IngestSummary>,
    pub result: Option<CmdResult>,
}

impl TaskReport {
    fn new(label: String, outcome: TaskOutcome) -> Self {
        Self {
            label,
            outcome,
            ingest: None,
            result: None,
        }
    }
}

/// Load one file into the store, record by record.
#[derive(Debug, Clone)]
pub struct IngestionTask {
    pub path: PathBuf,
}

impl IngestionTask {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn run<B: CatalogBackend>(&self, session: &Session<B>) -> TaskReport {
        let label = self.path.display().to_string();
        match ingest::run(&session.store, &session.metrics, &session.log, &self.path) {
            Ok(summary) => {
                info!(
                    file = %label,
                    accepted = summary.accepted,
                    rejected = summary.rejected.len(),
                    "file reading completed"
                );
                let mut report = TaskReport::new(label, TaskOutcome::Success);
                report.ingest = Some(summary);
                report
            }
            Err(e) => {
                warn!(file = %label, error = %e, "error reading file");
                let outcome = session.fail(LogCategory::FileRead, &label, &e);
                TaskReport::new(label, outcome)
            }
        }
    }
}

/// Classify one argument and execute it.
#[derive(Debug, Clone)]
pub struct OperationTask {
    pub argument: String,
}

impl OperationTask {
    pub fn new(argument: impl Into<String>) -> Self {
        Self {
            argument: argument.into(),
        }
    }

    pub fn run<B: CatalogBackend>(&self, session: &Session<B>) -> TaskReport {
        let op = Operation::classify(&self.argument);
        match execute(&session.store, &session.metrics, &op) {
            Ok(result) => {
                info!(argument = %self.argument, "operation completed");
                let mut report = TaskReport::new(self.argument.clone(), TaskOutcome::Success);
                report.result = Some(result);
                report
            }
            Err(e) => {
                warn!(argument = %self.argument, error = %e, "operation failed");
                let outcome = session.fail(LogCategory::Operation, &self.argument, &e);
                TaskReport::new(self.argument.clone(), outcome)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Task {
    Ingest(IngestionTask),
    Operation(OperationTask),
}

impl Task {
    pub fn run<B: CatalogBackend>(&self, session: &Session<B>) -> TaskReport {
        match self {
            Task::Ingest(task) => task.run(session),
            Task::Operation(task) => task.run(session),
        }
    }
}

impl From<IngestionTask> for Task {
    fn from(task: IngestionTask) -> Self {
        Task::Ingest(task)
    }
}

impl From<OperationTask> for Task {
    fn from(task: OperationTask) -> Self {
        Task::Operation(task)
    }
}

/// Run `tasks` on up to `workers` threads; reports come back in task order.
pub fn run_all<B: CatalogBackend>(
    session: &Session<B>,
    tasks: &[Task],
    workers: usize,
) -> Vec<TaskReport> {
    let next = AtomicUsize::new(0);
    let slots: Vec<Mutex<Option<TaskReport>>> = tasks.iter().map(|_| Mutex::new(None)).collect();
    let workers = workers.clamp(1, tasks.len().max(1));

    thread::scope(|s| {
        for _ in 0..workers {
            s.spawn(|| loop {
                let i = next.fetch_add(1, Ordering::Relaxed);
                let Some(task) = tasks.get(i) else {
                    break;
                };
                *slots[i].lock() = Some(task.run(session));
            });
        }
    });

    slots
        .into_iter()
        .filter_map(Mutex::into_inner)
        .collect()
}
