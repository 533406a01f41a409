//! Read-only queries over a [`Catalog`] snapshot.

use crate::error::{CatalogError, Result};
use crate::model::Book;
use crate::store::Catalog;

/// Books whose title contains `keyword`, ignoring case, in catalog order.
///
/// No match is an empty vector, not an error.
pub fn by_title(catalog: &Catalog, keyword: &str) -> Vec<Book> {
    let keyword_lower = keyword.to_lowercase();
    catalog
        .iter()
        .filter(|book| book.title().to_lowercase().contains(&keyword_lower))
        .cloned()
        .collect()
}

/// The single book carrying `isbn`.
///
/// Fails with `NotFound` when nothing matches and with `DuplicateIsbn` when
/// more than one book shares the ISBN; in that case no book is returned.
pub fn by_isbn(catalog: &Catalog, isbn: &str) -> Result<Book> {
    let mut matches = catalog.iter().filter(|book| book.isbn() == isbn);
    match (matches.next(), matches.next()) {
        (Some(book), None) => Ok(book.clone()),
        (None, _) => Err(CatalogError::NotFound(isbn.to_string())),
        (Some(_), Some(_)) => Err(CatalogError::DuplicateIsbn(isbn.to_string())),
    }
}
