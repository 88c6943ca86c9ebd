// File: src/error.rs
use thiserror::Error;

/// Everything the engine can reject. Once a `Verb` has been built, the
/// conjugators themselves cannot fail; these errors come from parsing
/// lexicon data and from asking for a voice/tense pair that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConjugationError {
    #[error("a root needs 3 to 5 radicals, got {0}")]
    InvalidRootLength(usize),

    #[error("'{0}' cannot be a root radical")]
    InvalidRootLetter(char),

    #[error("verb form must be between 1 and 10, got {0}")]
    UnknownForm(u8),

    #[error("unrecognized Form I vowel pattern '{0}'")]
    UnknownFormPattern(String),

    #[error("Form I verbs need a vowel pattern in the lexicon")]
    MissingFormPattern,

    #[error("unrecognized mood '{0}'")]
    UnknownMood(String),

    #[error("unrecognized tense '{0}'")]
    UnknownTense(String),

    #[error("unrecognized voice '{0}'")]
    UnknownVoice(String),

    #[error("unrecognized passive capability '{0}'")]
    UnknownPassiveVoice(String),

    #[error("unrecognized pronoun '{0}'")]
    UnknownPronoun(String),

    #[error("unrecognized diacritics preference '{0}'")]
    UnknownDiacriticsPreference(String),

    #[error("this verb has no passive voice")]
    NoPassive,

    #[error("there is no passive imperative")]
    PassiveImperative,
}

/// Failures of the on-disk side: lexicon files and the memo store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("memo store encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("lexicon error: {0}")]
    Lexicon(#[from] serde_json::Error),

    #[error("could not persist temp file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, ConjugationError>;
