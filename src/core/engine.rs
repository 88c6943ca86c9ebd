// File: src/core/engine.rs
use crate::core::active::{
    conjugate_future, conjugate_imperative, conjugate_past, conjugate_present_mood,
};
use crate::core::passive::{
    can_conjugate_passive, conjugate_passive_future, conjugate_passive_past,
    conjugate_passive_present_mood,
};
use crate::core::types::{Conjugation, Tense, Verb, Voice};
use crate::error::{ConjugationError, Result};

/// Single entry point over every tense and voice.
///
/// Asking for the passive of a verb without one, or for a passive
/// imperative, is an error rather than an empty paradigm.
pub fn conjugate(verb: &Verb, tense: Tense, voice: Voice) -> Result<Conjugation> {
    match voice {
        Voice::Active => Ok(match tense {
            Tense::Past => conjugate_past(verb),
            Tense::Present(mood) => conjugate_present_mood(verb, mood),
            Tense::Future => conjugate_future(verb),
            Tense::Imperative => conjugate_imperative(verb),
        }),
        Voice::Passive => {
            if tense == Tense::Imperative {
                return Err(ConjugationError::PassiveImperative);
            }
            if !can_conjugate_passive(verb) {
                return Err(ConjugationError::NoPassive);
            }
            Ok(match tense {
                Tense::Past => conjugate_passive_past(verb),
                Tense::Present(mood) => conjugate_passive_present_mood(verb, mood),
                Tense::Future => conjugate_passive_future(verb),
                Tense::Imperative => return Err(ConjugationError::PassiveImperative),
            })
        }
    }
}
