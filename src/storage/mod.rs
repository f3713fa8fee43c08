//! Pluggable blob store backing the file download endpoint.
//!
//! The server only depends on the five-operation [`Store`] trait; the
//! in-memory implementation is the default. The virtual path assigned at
//! store time ends in the file id, which is what the download endpoint
//! resolves.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use rand::RngCore;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("file not found")]
    NotFound,
}

/// Metadata about a stored file.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub filename: String,
    pub mime_type: String,
    pub size: u64,
}

/// File storage operations consumed by the server.
pub trait Store: Send + Sync {
    /// Save data, returning a unique file id.
    fn store(&self, data: Vec<u8>, filename: &str, mime_type: &str) -> Result<String, StoreError>;

    /// Retrieve file data and metadata by file id.
    fn get(&self, file_id: &str) -> Result<(Vec<u8>, FileMetadata), StoreError>;

    /// The virtual file path for a file id, as exposed through `getFile`.
    fn get_path(&self, file_id: &str) -> Result<String, StoreError>;

    /// Remove a file from the store.
    fn delete(&self, file_id: &str) -> Result<(), StoreError>;

    /// Remove all files.
    fn clear(&self) -> Result<(), StoreError>;
}

struct MemoryFile {
    data: Vec<u8>,
    metadata: FileMetadata,
    path: String,
}

/// In-memory implementation of [`Store`].
#[derive(Default)]
pub struct MemoryStore {
    files: RwLock<HashMap<String, MemoryFile>>,
    counter: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_file_id(&self) -> String {
        let mut bytes = [0u8; 12];
        rand::thread_rng().fill_bytes(&mut bytes);
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        format!("{}{:04x}", hex, n)
    }
}

impl Store for MemoryStore {
    fn store(&self, data: Vec<u8>, filename: &str, mime_type: &str) -> Result<String, StoreError> {
        let file_id = self.generate_file_id();
        let path = format!("documents/{}", file_id);

        let metadata = FileMetadata {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            size: data.len() as u64,
        };

        let mut files = self.files.write().unwrap();
        files.insert(file_id.clone(), MemoryFile { data, metadata, path });
        Ok(file_id)
    }

    fn get(&self, file_id: &str) -> Result<(Vec<u8>, FileMetadata), StoreError> {
        let files = self.files.read().unwrap();
        let file = files.get(file_id).ok_or(StoreError::NotFound)?;
        Ok((file.data.clone(), file.metadata.clone()))
    }

    fn get_path(&self, file_id: &str) -> Result<String, StoreError> {
        let files = self.files.read().unwrap();
        let file = files.get(file_id).ok_or(StoreError::NotFound)?;
        Ok(file.path.clone())
    }

    fn delete(&self, file_id: &str) -> Result<(), StoreError> {
        let mut files = self.files.write().unwrap();
        files.remove(file_id);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut files = self.files.write().unwrap();
        files.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_get() {
        let store = MemoryStore::new();
        let id = store.store(b"hello".to_vec(), "greeting.txt", "text/plain").unwrap();

        let (data, meta) = store.get(&id).unwrap();
        assert_eq!(data, b"hello");
        assert_eq!(meta.filename, "greeting.txt");
        assert_eq!(meta.mime_type, "text/plain");
        assert_eq!(meta.size, 5);
    }

    #[test]
    fn test_get_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nope").unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn test_path_ends_with_file_id() {
        let store = MemoryStore::new();
        let id = store.store(vec![1, 2, 3], "a.bin", "application/octet-stream").unwrap();
        let path = store.get_path(&id).unwrap();
        assert_eq!(path, format!("documents/{}", id));
    }

    #[test]
    fn test_unique_ids() {
        let store = MemoryStore::new();
        let a = store.store(vec![], "a", "text/plain").unwrap();
        let b = store.store(vec![], "b", "text/plain").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_delete_and_clear() {
        let store = MemoryStore::new();
        let id = store.store(vec![1], "a", "text/plain").unwrap();
        store.delete(&id).unwrap();
        assert!(store.get(&id).is_err());

        let id2 = store.store(vec![2], "b", "text/plain").unwrap();
        store.clear().unwrap();
        assert!(store.get(&id2).is_err());
    }
}
