/// Snapshot persistence for the address book
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::address_book::AddressBook;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("snapshot {path} is malformed: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and writes the whole address book as one JSON file
#[derive(Clone, Debug)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, or an empty book if none has been written yet
    pub async fn load(&self) -> Result<AddressBook, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No snapshot at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: AddressBook =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::Format {
                path: self.path.clone(),
                source,
            })?;

        info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    /// Write the snapshot next to the target, then move it into place
    pub async fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(book).map_err(|source| StorageError::Format {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| self.io_error(e))?;
        debug!("Wrote {} bytes to {}", json.len(), tmp.display());

        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();

        let mut john = Record::new("John");
        john.add_phone("1234567890").unwrap();
        john.add_phone("5555555555").unwrap();
        john.set_birthday("24.12.1990").unwrap();
        book.add_record(john);

        let mut jane = Record::new("Jane");
        jane.add_phone("9876543210").unwrap();
        book.add_record(jane);

        book
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("book.json"));

        let book = storage.load().await.unwrap();
        assert!(book.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("book.json"));
        let book = sample_book();

        storage.save(&book).await.unwrap();
        let restored = storage.load().await.unwrap();

        assert_eq!(restored, book);
        let john = restored.find("John").unwrap();
        assert_eq!(john.phones_display(), "1234567890; 5555555555");
        assert_eq!(john.birthday.unwrap().to_string(), "24.12.1990");
        assert!(restored.find("Jane").unwrap().birthday.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_and_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        let storage = Storage::new(&path);

        storage.save(&sample_book()).await.unwrap();
        storage.save(&AddressBook::new()).await.unwrap();

        assert!(storage.load().await.unwrap().is_empty());
        assert!(!dir.path().join("book.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_phone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        std::fs::write(&path, r#"[{"name":"John","phones":["123"],"birthday":null}]"#).unwrap();

        let err = Storage::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StorageError::Format { .. }));
    }

    #[tokio::test]
    async fn test_load_rejects_duplicate_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        std::fs::write(
            &path,
            r#"[
                {"name":"John","phones":["1111111111"],"birthday":null},
                {"name":"John","phones":["2222222222"],"birthday":"24.12.1990"}
            ]"#,
        )
        .unwrap();

        let err = Storage::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StorageError::Format { .. }));
        assert!(err.to_string().contains("John appears more than once"));
    }

    #[tokio::test]
    async fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        std::fs::write(&path, b"not json").unwrap();

        let err = Storage::new(&path).load().await.unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }
}
