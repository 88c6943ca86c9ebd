// File: src/persistence.rs
use crate::core::types::Conjugation;
use crate::error::PersistenceError;
use crate::memo::{CacheKey, ConjugationCache};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// On-disk shape of the memo store. Entries are kept as a flat list so the
/// encoding does not depend on hash order.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct SerializableState {
    entries: Vec<(CacheKey, Conjugation)>,
}

pub fn save_to_disk(cache: &ConjugationCache, path: &Path) -> Result<(), PersistenceError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState { entries: cache.entries().collect() };

    // Written beside the target and renamed over it, so a crash never
    // leaves a half-written store.
    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }
    temp_file.persist(path)?;
    debug!(entries = state.entries.len(), path = %path.display(), "memo store saved");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<ConjugationCache, PersistenceError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;
    debug!(entries = state.entries.len(), path = %path.display(), "memo store loaded");
    Ok(ConjugationCache::from_entries(state.entries))
}
