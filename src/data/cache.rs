//! In-memory reuse of a loaded series across recomputes.
//!
//! Interactive parameter changes re-render the report many times a minute
//! while the source file rarely changes. The cache keys on the file's size
//! and modification time and reloads only when either moves.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::data::loader::{self, LoadError, LoadedSeries};

/// Size and mtime snapshot of the backing file.
///
/// `None` when the file cannot be stat'ed, which covers the sample-fallback
/// case. A file that appears later changes the fingerprint and forces a
/// reload.
type Fingerprint = Option<(u64, SystemTime)>;

fn fingerprint(path: &Path) -> Fingerprint {
    let meta = fs::metadata(path).ok()?;
    let modified = meta.modified().ok()?;
    Some((meta.len(), modified))
}

#[derive(Debug, Clone)]
struct CacheEntry {
    path: PathBuf,
    fingerprint: Fingerprint,
    loaded: LoadedSeries,
}

/// Caches the most recently loaded series for one source path.
#[derive(Debug, Default)]
pub struct SeriesCache {
    entry: Option<CacheEntry>,
}

impl SeriesCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`, reusing the cached series while the file is unchanged.
    ///
    /// # Errors
    ///
    /// Propagates [`LoadError`] from a fresh load. A failed load clears the
    /// entry so the next call retries from disk.
    pub fn load(&mut self, path: &Path) -> Result<LoadedSeries, LoadError> {
        let current = fingerprint(path);
        if let Some(entry) = &self.entry {
            if entry.path == path && entry.fingerprint == current {
                return Ok(entry.loaded.clone());
            }
        }

        self.entry = None;
        let loaded = loader::load(path)?;
        self.entry = Some(CacheEntry {
            path: path.to_path_buf(),
            fingerprint: current,
            loaded: loaded.clone(),
        });
        Ok(loaded)
    }

    /// Drops the cached entry. The next load re-reads the file.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
