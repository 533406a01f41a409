use crate::error::Result;

/// Raw line storage for one catalog.
///
/// This trait handles the "how" of persistence (filesystem vs memory), while
/// [`super::CatalogStore`] handles ordering, locking and validation.
/// Implementations are only ever called with the store's writer lock held,
/// so `write_lines` takes `&mut self`.
pub trait CatalogBackend: Send {
    /// Read every line of the catalog.
    /// Returns Ok(None) when the catalog does not exist yet.
    fn read_lines(&self) -> Result<Option<Vec<String>>>;

    /// Replace the whole catalog with `lines`.
    /// MUST be atomic (e.g. write to tmp then rename): a reader sees the old
    /// content or the new content, never a mix.
    fn write_lines(&mut self, lines: &[String]) -> Result<()>;

    /// Human readable location, used in logs.
    fn location(&self) -> String;
}
