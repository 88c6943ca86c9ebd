// File: src/lexicon.rs
//! Verb lexicons are JSON arrays of
//! `{ "root", "form", "formPattern"?, "passiveVoice" }` records.

use crate::core::types::Verb;
use crate::error::PersistenceError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

pub fn parse_lexicon(json: &str) -> Result<Vec<Verb>, PersistenceError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_lexicon(path: &Path) -> Result<Vec<Verb>, PersistenceError> {
    let file = File::open(path)?;
    let verbs: Vec<Verb> = serde_json::from_reader(BufReader::new(file))?;
    info!(verbs = verbs.len(), path = %path.display(), "lexicon loaded");
    Ok(verbs)
}

/// Entries whose root matches `root`, in lexicon order.
pub fn find_by_root<'a>(verbs: &'a [Verb], root: &str) -> Vec<&'a Verb> {
    match root.parse::<crate::core::root::Root>() {
        Ok(root) => verbs.iter().filter(|v| *v.root() == root).collect(),
        Err(_) => Vec::new(),
    }
}
