// File: src/core/passive.rs
//! Passive-voice paradigms. Stems are the active skeletons re-vowelled
//! (فُعِلَ / يُفْعَلُ) and go through the same weak-root readjustment.

use crate::core::active::{past_conjugation, present_words, render, with_future_prefix};
use crate::core::types::{Conjugation, Mood, PassiveVoice, PronounId, Verb, Voice};

pub fn can_conjugate_passive(verb: &Verb) -> bool {
    verb.passive_voice() != PassiveVoice::None
}

/// Blanks every slot but 3ms for verbs whose passive is impersonal
/// (سِيرَ بِهِ). Other verbs pass through unchanged.
pub fn constrain_passive_conjugation(verb: &Verb, conjugation: Conjugation) -> Conjugation {
    match verb.passive_voice() {
        PassiveVoice::Impersonal => conjugation.map(|pronoun, form| {
            if pronoun == PronounId::ThirdMasculineSingular {
                form.to_string()
            } else {
                String::new()
            }
        }),
        PassiveVoice::Full | PassiveVoice::None => conjugation,
    }
}

pub fn conjugate_passive_past(verb: &Verb) -> Conjugation {
    constrain_passive_conjugation(verb, past_conjugation(verb, Voice::Passive))
}

pub fn conjugate_passive_present_mood(verb: &Verb, mood: Mood) -> Conjugation {
    constrain_passive_conjugation(verb, render(&present_words(verb, Voice::Passive, mood)))
}

pub fn conjugate_passive_future(verb: &Verb) -> Conjugation {
    with_future_prefix(&conjugate_passive_present_mood(verb, Mood::Indicative))
}
