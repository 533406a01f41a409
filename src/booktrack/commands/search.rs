use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::metrics::SessionMetrics;
use crate::search;
use crate::store::backend::CatalogBackend;
use crate::store::CatalogStore;

/// Look up one ISBN. Not finding it is a normal, empty result.
pub fn by_isbn<B: CatalogBackend>(
    store: &CatalogStore<B>,
    metrics: &SessionMetrics,
    isbn: &str,
) -> Result<CmdResult> {
    let catalog = store.snapshot();
    match search::by_isbn(&catalog, isbn) {
        Ok(book) => {
            metrics.record_search_results(1);
            Ok(CmdResult::default().with_books(vec![book]))
        }
        Err(CatalogError::NotFound(_)) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!("No book found with ISBN {}", isbn)));
            Ok(result)
        }
        Err(e) => Err(e),
    }
}

pub fn by_title<B: CatalogBackend>(
    store: &CatalogStore<B>,
    metrics: &SessionMetrics,
    keyword: &str,
) -> Result<CmdResult> {
    let catalog = store.snapshot();
    let books = search::by_title(&catalog, keyword);
    metrics.record_search_results(books.len() as u64);

    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No books matched \"{}\"",
            keyword
        )));
    }
    Ok(result.with_books(books))
}
