use serde::Serialize;

/// Separator between the four fields of a catalog line.
pub const FIELD_SEPARATOR: char = ':';

/// One validated catalog entry.
///
/// Fields are private so a `Book` can only come out of [`crate::validate`];
/// there is no way to edit one in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    copies: u32,
}

impl Book {
    pub(crate) fn new(title: String, author: String, isbn: String, copies: u32) -> Self {
        Self {
            title,
            author,
            isbn,
            copies,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn copies(&self) -> u32 {
        self.copies
    }

    /// The `Title:Author:ISBN:Copies` form written to the catalog file.
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.title,
            self.author,
            self.isbn,
            self.copies,
            sep = FIELD_SEPARATOR
        )
    }

    /// Key used to keep the catalog ordered.
    pub fn sort_key(&self) -> String {
        self.title.to_lowercase()
    }
}
