use std::fs;
use std::path::PathBuf;

use crate::traits::file_store::FileStore;

/// `FileStore` over a directory on the host filesystem.
///
/// Names are resolved relative to the root directory; no path traversal
/// outside it is attempted because the transport controller only passes
/// flat names like `0.wav`.
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileStore for DirectoryStore {
    fn size_of(&self, name: &str) -> Result<u64, String> {
        fs::metadata(self.root.join(name))
            .map(|m| m.len())
            .map_err(|e| format!("failed to stat {}: {}", name, e))
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, String> {
        fs::read(self.root.join(name)).map_err(|e| format!("failed to read {}: {}", name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("audio_transport_test_{}", name));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn reads_files_by_name() {
        let dir = temp_dir("dir_store");
        fs::write(dir.join("0.wav"), b"abcd").unwrap();

        let store = DirectoryStore::new(&dir);
        assert_eq!(store.size_of("0.wav").unwrap(), 4);
        assert_eq!(store.read("0.wav").unwrap(), b"abcd");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let store = DirectoryStore::new(temp_dir("dir_store_missing"));
        assert!(store.read("nope.wav").is_err());
        assert!(store.size_of("nope.wav").is_err());
    }
}
