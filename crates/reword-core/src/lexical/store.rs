//! Synonym stores: caches of word records keyed by lemma.
//!
//! Entries are treated as immutable once written; writing the same lemma
//! twice simply replaces the record with an equivalent one.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::io;
use std::sync::RwLock;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, warn};

use super::WordRecord;
use crate::config::Config;
use crate::error::{StoreError, StoreResult};

/// Key-space version of on-disk records.
pub const STORE_VERSION: &str = "v1";

/// A key-value cache of word records.
pub trait SynonymStore {
    /// Read a lemma's record, `None` when it was never stored.
    fn get(&self, lemma: &str) -> StoreResult<Option<WordRecord>>;

    /// Store a lemma's record.
    fn set(&self, lemma: &str, record: &WordRecord) -> StoreResult<()>;
}

impl<S: SynonymStore + ?Sized> SynonymStore for &S {
    fn get(&self, lemma: &str) -> StoreResult<Option<WordRecord>> {
        (**self).get(lemma)
    }

    fn set(&self, lemma: &str, record: &WordRecord) -> StoreResult<()> {
        (**self).set(lemma, record)
    }
}

impl<S: SynonymStore + ?Sized> SynonymStore for Box<S> {
    fn get(&self, lemma: &str) -> StoreResult<Option<WordRecord>> {
        (**self).get(lemma)
    }

    fn set(&self, lemma: &str, record: &WordRecord) -> StoreResult<()> {
        (**self).set(lemma, record)
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, WordRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored lemmas.
    pub fn len(&self) -> usize {
        self.records.read().map_or(0, |records| records.len())
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SynonymStore for MemoryStore {
    fn get(&self, lemma: &str) -> StoreResult<Option<WordRecord>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.get(lemma).cloned())
    }

    fn set(&self, lemma: &str, record: &WordRecord) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        records.insert(lemma.to_string(), record.clone());
        Ok(())
    }
}

/// One JSON file per lemma under `<root>/v1/`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: Utf8PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. Directories are created on first write.
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// The file holding `lemma`'s record.
    pub fn path_for(&self, lemma: &str) -> Utf8PathBuf {
        self.root
            .join(STORE_VERSION)
            .join(format!("{}.json", escape_lemma(lemma)))
    }
}

/// File-name-safe form of a lemma.
///
/// Lowercase letters, digits, apostrophes and hyphens are kept; every other
/// byte becomes `%XX`.
pub fn escape_lemma(lemma: &str) -> String {
    let mut escaped = String::with_capacity(lemma.len());
    for c in lemma.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '\'' | '-') {
            escaped.push(c);
        } else {
            let mut buf = [0; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(escaped, "%{byte:02X}");
            }
        }
    }
    escaped
}

impl SynonymStore for FileStore {
    fn get(&self, lemma: &str) -> StoreResult<Option<WordRecord>> {
        let path = self.path_for(lemma);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let record =
            serde_json::from_str(&contents).map_err(|source| StoreError::Serde { path, source })?;
        Ok(Some(record))
    }

    fn set(&self, lemma: &str, record: &WordRecord) -> StoreResult<()> {
        let path = self.path_for(lemma);

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(io_error(dir))?;
        }

        let json = serde_json::to_string_pretty(record).map_err(|source| StoreError::Serde {
            path: path.clone(),
            source,
        })?;

        // Write then rename so readers never see a half-written record.
        let tmp = path.with_extension(format!("json.{}.tmp", std::process::id()));
        std::fs::write(&tmp, json).map_err(io_error(&tmp))?;
        std::fs::rename(&tmp, &path).map_err(io_error(&path))?;

        debug!(lemma, path = %path, "stored word record");
        Ok(())
    }
}

fn io_error(path: &Utf8Path) -> impl FnOnce(io::Error) -> StoreError + use<> {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}

/// A store that remembers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl SynonymStore for NullStore {
    fn get(&self, _lemma: &str) -> StoreResult<Option<WordRecord>> {
        Ok(None)
    }

    fn set(&self, _lemma: &str, _record: &WordRecord) -> StoreResult<()> {
        Ok(())
    }
}

/// The store a configuration asks for.
///
/// Files under the cache directory, or a [`NullStore`] when caching is off or
/// no cache directory can be found.
pub fn open_store(config: &Config) -> Box<dyn SynonymStore + Send + Sync> {
    if config.no_cache {
        return Box::new(NullStore);
    }
    match config.resolved_cache_dir() {
        Some(dir) => Box::new(FileStore::new(dir)),
        None => {
            warn!("no cache directory available, word records will not be cached");
            Box::new(NullStore)
        }
    }
}
