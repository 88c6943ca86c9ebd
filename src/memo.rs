// File: src/memo.rs
//! Memoized conjugation results, optionally backed by a bincode store.
//!
//! Conjugation is a pure function of (verb, tense, voice), so a stored
//! entry can only go stale when the rules themselves change; delete the
//! store file after upgrading.

use crate::core::engine::conjugate;
use crate::core::types::{Conjugation, Tense, Verb, Voice};
use crate::error::{ConjugationError, PersistenceError};
use crate::persistence::{load_from_disk, save_to_disk};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub verb: Verb,
    pub tense: Tense,
    pub voice: Voice,
}

#[derive(Debug, Default)]
pub struct ConjugationCache {
    entries: HashMap<CacheKey, Conjugation>,
    store_path: Option<PathBuf>,
}

impl ConjugationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store at `path`, starting empty when it is missing or
    /// unreadable. Either way later `save` calls write back to `path`.
    pub fn from_file_or_new(path: &Path) -> Self {
        let mut cache = match load_from_disk(path) {
            Ok(cache) => cache,
            Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no memo store yet");
                Self::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable memo store");
                Self::new()
            }
        };
        cache.store_path = Some(path.to_path_buf());
        cache
    }

    pub(crate) fn from_entries(entries: Vec<(CacheKey, Conjugation)>) -> Self {
        Self { entries: entries.into_iter().collect(), store_path: None }
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (CacheKey, Conjugation)> + '_ {
        self.entries.iter().map(|(k, v)| (k.clone(), v.clone()))
    }

    pub fn get_or_conjugate(
        &mut self,
        verb: &Verb,
        tense: Tense,
        voice: Voice,
    ) -> Result<&Conjugation, ConjugationError> {
        let key = CacheKey { verb: verb.clone(), tense, voice };
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                debug!(root = %verb.root(), "memo hit");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => Ok(entry.insert(conjugate(verb, tense, voice)?)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the store back if this cache was opened from a file.
    pub fn save(&self) -> Result<(), PersistenceError> {
        match &self.store_path {
            Some(path) => save_to_disk(self, path),
            None => Ok(()),
        }
    }
}
