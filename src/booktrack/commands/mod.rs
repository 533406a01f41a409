//! # Command Layer
//!
//! Business logic for the three user operations plus file ingestion. Each
//! command works on a shared [`CatalogStore`] and [`SessionMetrics`] and
//! returns a [`CmdResult`]; nothing here prints.
//!
//! A single textual argument picks the operation, see [`Operation::classify`].

use crate::error::Result;
use crate::metrics::SessionMetrics;
use crate::model::Book;
use crate::store::backend::CatalogBackend;
use crate::store::{AddResult, CatalogStore};
use crate::validate::{field_count, is_isbn};

pub mod add;
pub mod ingest;
pub mod search;

/// What a single argument asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    IsbnSearch(String),
    Add(String),
    TitleSearch(String),
}

impl Operation {
    /// ISBN first, then a four field record, and anything else is a title
    /// keyword. The argument is used verbatim.
    pub fn classify(arg: &str) -> Self {
        if is_isbn(arg) {
            Operation::IsbnSearch(arg.to_string())
        } else if field_count(arg) == 4 {
            Operation::Add(arg.to_string())
        } else {
            Operation::TitleSearch(arg.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books to show the user: search hits, or the book just added.
    pub books: Vec<Book>,
    pub added: Option<AddResult>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    pub fn with_added(mut self, added: AddResult) -> Self {
        self.books = vec![added.book.clone()];
        self.added = Some(added);
        self
    }
}

/// Run one operation against the store.
pub fn execute<B: CatalogBackend>(
    store: &CatalogStore<B>,
    metrics: &SessionMetrics,
    op: &Operation,
) -> Result<CmdResult> {
    match op {
        Operation::IsbnSearch(isbn) => search::by_isbn(store, metrics, isbn),
        Operation::Add(line) => add::run(store, metrics, line),
        Operation::TitleSearch(keyword) => search::by_title(store, metrics, keyword),
    }
}
