use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::metrics::SessionMetrics;
use crate::store::backend::CatalogBackend;
use crate::store::CatalogStore;
use crate::validate::validate;

/// Validate `line` as a record and insert it.
pub fn run<B: CatalogBackend>(
    store: &CatalogStore<B>,
    metrics: &SessionMetrics,
    line: &str,
) -> Result<CmdResult> {
    let book = validate(line)?;
    let added = store.add(book)?;
    metrics.record_added();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added: {} ({} in catalog)",
        added.book.title(),
        added.count
    )));
    Ok(result.with_added(added))
}
