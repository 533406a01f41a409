use super::backend::CatalogBackend;
use super::decode_lines;
use crate::error::{CatalogError, Result};
use crate::init::catalog_dir;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Catalog stored as a single text file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CatalogError::Io)?;
        }
        Ok(())
    }
}

impl CatalogBackend for FsBackend {
    fn read_lines(&self) -> Result<Option<Vec<String>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(decode_lines(&self.path, &bytes))),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
            Err(e) => Err(CatalogError::Io(e)),
        }
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        let dir = catalog_dir(&self.path);
        self.ensure_dir(&dir)?;

        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }

        // Atomic write
        let tmp_path = dir.join(format!(".catalog-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(CatalogError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CatalogError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::CatalogStore;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FsBackend) {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().join("catalog.txt"));
        (dir, backend)
    }

    #[test]
    fn missing_file_reads_as_none() {
        let (_dir, backend) = setup();
        assert_eq!(backend.read_lines().unwrap(), None);
    }

    #[test]
    fn write_then_read_preserves_lines() {
        let (_dir, mut backend) = setup();
        let lines = vec!["a:b:1234567890123:1".to_string(), "c:d:1234567890124:2".to_string()];
        backend.write_lines(&lines).unwrap();

        assert_eq!(backend.read_lines().unwrap(), Some(lines));
        let raw = fs::read_to_string(backend.path()).unwrap();
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn empty_rewrite_leaves_empty_file() {
        let (_dir, mut backend) = setup();
        backend.write_lines(&[]).unwrap();
        assert_eq!(backend.read_lines().unwrap(), Some(vec![]));
    }

    #[test]
    fn rewrite_leaves_no_temp_files() {
        let (dir, mut backend) = setup();
        backend.write_lines(&["x:y:1234567890123:1".to_string()]).unwrap();
        backend.write_lines(&["z:y:1234567890123:1".to_string()]).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["catalog.txt".to_string()]);
    }

    #[test]
    fn invalid_utf8_only_affects_its_own_line() {
        let (_dir, backend) = setup();
        fs::write(
            backend.path(),
            b"Dune:Herbert:9780441013593:4\nCaf\xe9:Someone:9780141439587:1\nEmma:Austen:9780141439587:1\n",
        )
        .unwrap();

        let lines = backend.read_lines().unwrap().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Dune:Herbert:9780441013593:4");
        assert!(lines[1].starts_with("Caf\u{FFFD}:"));
        assert_eq!(lines[2], "Emma:Austen:9780141439587:1");
    }

    #[test]
    fn open_keeps_books_around_an_undecodable_line() {
        let (_dir, backend) = setup();
        fs::write(
            backend.path(),
            b"Dune:Herbert:9780441013593:4\n\xff\xfe\nEmma:Austen:9780141439587:1\n",
        )
        .unwrap();

        let (store, rejected) = CatalogStore::open(backend).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].line_number, 2);
        assert_eq!(rejected[0].error.kind(), ErrorKind::MalformedEntry);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut backend = FsBackend::new(dir.path().join("nested/deeper/catalog.txt"));
        backend.write_lines(&["x:y:1234567890123:1".to_string()]).unwrap();
        assert!(backend.path().exists());
    }
}
