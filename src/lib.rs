// src/lib.rs

pub mod core;
pub mod error;
pub mod lexicon;
pub mod memo;
pub mod persistence;

pub use crate::core::active::{
    conjugate_future, conjugate_imperative, conjugate_past, conjugate_present_mood,
};
pub use crate::core::engine::conjugate;
pub use crate::core::letters::{
    geminate_double_letters, remove_leading_diacritics, remove_trailing_diacritics,
    replace_final_diacritic, strip_diacritics,
};
pub use crate::core::passive::{
    can_conjugate_passive, conjugate_passive_future, conjugate_passive_past,
    conjugate_passive_present_mood, constrain_passive_conjugation,
};
pub use crate::core::render::{
    apply_diacritics_preference, render_conjugation, DiacriticsPreference,
};
pub use crate::core::root::{analyze_root, Root, RootAnalysis, RootClass};
pub use crate::core::types::{
    Conjugation, Form, Gender, Mood, Number, PassiveVoice, Person, PronounId, Tense, Verb, Voice,
};
pub use crate::core::vowels::{resolve_form_one_vowels, FormPattern};
pub use crate::error::{ConjugationError, PersistenceError};
pub use crate::memo::ConjugationCache;
