use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of persisted recent searches.
pub const MAX_RECENT: usize = 10;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Recent-search store I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Recent-search store at '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One persisted recent search.
///
/// `movie_name` is the upsert key; `created_at` is unix milliseconds and
/// orders entries for both eviction and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearchEntry {
    pub movie_name: String,
    pub created_at: u64,
}

/// Bounded file-backed store of recent search queries.
///
/// The store holds at most [`MAX_RECENT`] entries as a JSON array on
/// disk. Mutations rewrite the file through a temp-file rename under an
/// exclusive advisory lock, so eviction and insertion land together: a
/// crash leaves either the old list or the new one, never an
/// over-capacity intermediate.
#[derive(Clone)]
pub struct RecentSearchStore {
    path: PathBuf,
}

impl RecentSearchStore {
    /// Create a store handle for the given file location.
    ///
    /// The file is created lazily on first write; a missing file reads
    /// as an empty store.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when at least one recent search is persisted.
    pub fn is_non_empty(&self) -> Result<bool, StoreError> {
        Ok(!self.read_entries()?.is_empty())
    }

    /// Record a search, bumping it to most-recent if it already exists.
    ///
    /// A new name evicts the single oldest entry first when the store is
    /// at capacity. An existing name only has its timestamp refreshed;
    /// no duplicate is created and nothing is evicted.
    pub fn upsert(&self, movie_name: &str) -> Result<(), StoreError> {
        let _lock = self.lock_exclusive()?;

        let mut entries = self.read_entries()?;
        let stamp = next_timestamp(&entries);

        if let Some(existing) = entries.iter_mut().find(|e| e.movie_name == movie_name) {
            existing.created_at = stamp;
            return self.commit(&entries);
        }

        while entries.len() >= MAX_RECENT {
            let Some(oldest) = entries
                .iter()
                .enumerate()
                .min_by_key(|(_, e)| e.created_at)
                .map(|(i, _)| i)
            else {
                break;
            };
            let evicted = entries.remove(oldest);
            tracing::debug!(movie_name = %evicted.movie_name, "Evicting oldest recent search");
        }

        entries.push(RecentSearchEntry {
            movie_name: movie_name.to_string(),
            created_at: stamp,
        });

        self.commit(&entries)
    }

    /// All entries sorted by `created_at` ascending (oldest first, most
    /// recent last — display callers reverse).
    pub fn list_ordered_by_recency(&self) -> Result<Vec<RecentSearchEntry>, StoreError> {
        let mut entries = self.read_entries()?;
        entries.sort_by_key(|e| e.created_at);
        Ok(entries)
    }

    fn read_entries(&self) -> Result<Vec<RecentSearchEntry>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Serialize to a temp file in the store directory, then rename over
    /// the store file.
    fn commit(&self, entries: &[RecentSearchEntry]) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let content = serde_json::to_string_pretty(entries).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            source: e,
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;

        Ok(())
    }

    /// Take an exclusive advisory lock on a sidecar lock file.
    ///
    /// The lock releases when the returned handle drops. The store file
    /// itself cannot carry the lock because commits replace its inode.
    fn lock_exclusive(&self) -> Result<File, StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(io_err)?;

        lock_file.lock_exclusive().map_err(io_err)?;
        Ok(lock_file)
    }
}

/// Timestamp for the next insert or bump.
///
/// Wall-clock millis, pushed past the current maximum when the clock has
/// not advanced since the last write. Keeps `created_at` strictly
/// ordered even for back-to-back upserts within one millisecond.
fn next_timestamp(entries: &[RecentSearchEntry]) -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let newest = entries.iter().map(|e| e.created_at).max().unwrap_or(0);
    now.max(newest + 1)
}
