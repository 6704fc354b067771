use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use super::loader::{self, LoadError};
use super::model::DatasetCollection;

// ---------------------------------------------------------------------------
// Source identity
// ---------------------------------------------------------------------------

/// Stable identity of a workbook source, used as the memoization key.
/// A file that changes on disk (mtime or size) gets a new identity, so a
/// stale cache entry is simply never hit again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceId {
    File {
        path: PathBuf,
        mtime: Option<SystemTime>,
        len: u64,
    },
    /// In-memory workbooks are keyed by a content hash.
    Bytes { hash: u64 },
}

impl SourceId {
    fn of_file(path: &Path) -> Result<Self, LoadError> {
        let meta = std::fs::metadata(path).map_err(|source| LoadError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(SourceId::File {
            path: path.to_path_buf(),
            mtime: meta.modified().ok(),
            len: meta.len(),
        })
    }

    fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        bytes.hash(&mut hasher);
        SourceId::Bytes {
            hash: hasher.finish(),
        }
    }
}

// ---------------------------------------------------------------------------
// Memoizing loader
// ---------------------------------------------------------------------------

/// Session-local memoization of parsed workbooks: each distinct source is
/// parsed once, repeat loads hand back the same `Arc`. Write-once per key;
/// re-parsing the same bytes would produce an equal collection anyway.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<SourceId, Arc<DatasetCollection>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a workbook file, reusing the cached result when the file is
    /// unchanged (same path, mtime, and size).
    pub fn load_path(&mut self, path: &Path) -> Result<Arc<DatasetCollection>, LoadError> {
        let key = SourceId::of_file(path)?;
        if let Some(hit) = self.entries.get(&key) {
            log::debug!("cache hit for {path:?}");
            return Ok(Arc::clone(hit));
        }
        let collection = Arc::new(loader::load_path(path)?);
        self.entries.insert(key, Arc::clone(&collection));
        Ok(collection)
    }

    /// Load a workbook from bytes, keyed by content hash.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<Arc<DatasetCollection>, LoadError> {
        let key = SourceId::of_bytes(bytes);
        if let Some(hit) = self.entries.get(&key) {
            return Ok(Arc::clone(hit));
        }
        let collection = Arc::new(loader::load_reader(Cursor::new(bytes))?);
        self.entries.insert(key, Arc::clone(&collection));
        Ok(collection)
    }

    /// Number of distinct sources parsed this session.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
