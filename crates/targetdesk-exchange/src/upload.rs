//! Upload intake: allow-list validation and timestamped storage.

use chrono::Local;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

pub const SUBDIR_STRUCTURES: &str = "structures";
pub const SUBDIR_IMPORTS: &str = "imports";
pub const SUBDIR_EXPORTS: &str = "exports";

const ALLOWED_EXTENSIONS: &[&str] = &["pdb", "csv", "json", "xls", "xlsx"];

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("invalid file type: .{0}")]
    DisallowedExtension(String),

    #[error("file name has no extension")]
    MissingExtension,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown export kind: {0}")]
    UnknownExportKind(String),
}

/// Root of the upload directory tree.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn structures_dir(&self) -> PathBuf {
        self.root.join(SUBDIR_STRUCTURES)
    }

    /// Create the root and its subfolders if missing.
    pub async fn ensure_dirs(&self) -> std::io::Result<()> {
        for sub in [SUBDIR_STRUCTURES, SUBDIR_IMPORTS, SUBDIR_EXPORTS] {
            fs::create_dir_all(self.root.join(sub)).await?;
        }
        Ok(())
    }

    /// Store an uploaded file, rejecting disallowed extensions before any
    /// filesystem write. PDB files go to `structures/`, everything else to
    /// `imports/`, all prefixed with a `%Y%m%d_%H%M%S` timestamp.
    pub async fn store(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExchangeError> {
        let ext = extension(filename)?;
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ExchangeError::DisallowedExtension(ext));
        }

        let sub = if ext == "pdb" {
            SUBDIR_STRUCTURES
        } else {
            SUBDIR_IMPORTS
        };
        self.write_stamped(sub, &sanitize_filename(filename), bytes)
            .await
    }

    /// Store an import file under `imports/{timestamp}_{kind}_{name}`.
    /// Only CSV is accepted for imports.
    pub async fn store_import(
        &self,
        kind: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, ExchangeError> {
        let ext = extension(filename)?;
        if ext != "csv" {
            return Err(ExchangeError::DisallowedExtension(ext));
        }

        let name = format!("{}_{}", sanitize_filename(kind), sanitize_filename(filename));
        self.write_stamped(SUBDIR_IMPORTS, &name, bytes).await
    }

    async fn write_stamped(
        &self,
        sub: &str,
        name: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, ExchangeError> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = self.root.join(sub).join(format!("{stamp}_{name}"));

        fs::create_dir_all(self.root.join(sub)).await?;
        fs::write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "file stored");
        Ok(path)
    }
}

/// Keep only `[A-Za-z0-9_.-]`; strips path separators along the way.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect()
}

fn extension(filename: &str) -> Result<String, ExchangeError> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .ok_or(ExchangeError::MissingExtension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn disallowed_extension_writes_nothing() {
        let dir = tempdir().unwrap();
        let store = UploadStore::new(dir.path());
        store.ensure_dirs().await.unwrap();

        let err = store.store("malware.exe", b"MZ").await.unwrap_err();
        assert!(matches!(err, ExchangeError::DisallowedExtension(ref e) if e == "exe"));

        // Nothing landed in any subfolder.
        for sub in [SUBDIR_STRUCTURES, SUBDIR_IMPORTS, SUBDIR_EXPORTS] {
            let mut entries = fs::read_dir(dir.path().join(sub)).await.unwrap();
            assert!(entries.next_entry().await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn pdb_upload_lands_in_structures() {
        let dir = tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let path = store.store("1abc.pdb", b"HEADER\n").await.unwrap();
        assert!(path.starts_with(dir.path().join(SUBDIR_STRUCTURES)));
        assert!(path.exists());

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with("_1abc.pdb"));
    }

    #[tokio::test]
    async fn import_rejects_non_csv() {
        let dir = tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let err = store
            .store_import("targets", "targets.json", b"{}")
            .await
            .unwrap_err();
        assert!(matches!(err, ExchangeError::DisallowedExtension(_)));
    }

    #[tokio::test]
    async fn import_path_includes_kind() {
        let dir = tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let path = store
            .store_import("targets", "batch one.csv", b"name\n")
            .await
            .unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        // Spaces stripped by sanitization.
        assert!(name.ends_with("_targets_batchone.csv"));
    }

    #[test]
    fn sanitize_strips_path_separators() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "....etcpasswd");
        assert_eq!(sanitize_filename("r-1_final.pdb"), "r-1_final.pdb");
    }

    #[test]
    fn missing_extension_is_rejected() {
        assert!(matches!(
            extension("README"),
            Err(ExchangeError::MissingExtension)
        ));
        assert_eq!(extension("A.PDB").unwrap(), "pdb");
    }
}
