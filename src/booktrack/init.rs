//! Catalog path checks and first-run setup.

use crate::error::{CatalogError, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub const CATALOG_EXTENSION: &str = "txt";

/// Directory holding `catalog`; `.` for a bare file name.
pub fn catalog_dir(catalog: &Path) -> PathBuf {
    match catalog.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Make sure `catalog` names a `.txt` file and that it exists.
///
/// Missing parent directories and an empty catalog file are created. An
/// existing file is left untouched.
pub fn prepare_catalog(catalog: &Path) -> Result<()> {
    let has_txt_ext = catalog
        .extension()
        .is_some_and(|ext| ext == CATALOG_EXTENSION);
    if !has_txt_ext {
        return Err(CatalogError::InvalidFileName(format!(
            "Catalog file must end with .{}: {}",
            CATALOG_EXTENSION,
            catalog.display()
        )));
    }

    let dir = catalog_dir(catalog);
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(catalog)?;
    Ok(())
}
