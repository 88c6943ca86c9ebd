// File: src/core/mood.rs
//! Subjunctive and jussive endings, derived from finished indicative words.

use crate::core::letters::{ShortVowel, ALIF, NOON, WAW, YA};
use crate::core::types::{Mood, PronounId};
use crate::core::word::{Cell, Mark, Word};

enum MoodEnding {
    /// The indicative ends in ن, which both moods drop.
    Noon,
    /// Feminine plurals never change.
    FemininePlural,
    /// The final short vowel (or long vowel) carries the mood.
    Vowel,
}

fn mood_ending(pronoun: PronounId) -> MoodEnding {
    use PronounId::*;
    match pronoun {
        SecondFeminineSingular
        | SecondDual
        | SecondMasculinePlural
        | ThirdMasculineDual
        | ThirdFeminineDual
        | ThirdMasculinePlural => MoodEnding::Noon,
        SecondFemininePlural | ThirdFemininePlural => MoodEnding::FemininePlural,
        FirstSingular
        | FirstPlural
        | SecondMasculineSingular
        | ThirdMasculineSingular
        | ThirdFeminineSingular => MoodEnding::Vowel,
    }
}

/// Maps the thirteen indicative words to `mood`. `apocopate` shortens a long
/// vowel left before a silent final radical (hollow verbs).
pub(crate) fn derive_mood(indicative: &[Word; 13], mood: Mood, apocopate: bool) -> [Word; 13] {
    PronounId::ALL.map(|pronoun| {
        let word = &indicative[pronoun.index()];
        match (mood, mood_ending(pronoun)) {
            (Mood::Indicative, _) | (_, MoodEnding::FemininePlural) => word.clone(),
            (_, MoodEnding::Noon) => drop_noon_ending(word),
            (Mood::Subjunctive, MoodEnding::Vowel) => subjunctive_ending(word),
            (Mood::Jussive, MoodEnding::Vowel) => jussive_ending(word, apocopate),
        }
    })
}

// تَكْتُبُونَ → تَكْتُبُوْا: the plural و takes the silent alif once ن is gone.
fn drop_noon_ending(word: &Word) -> Word {
    let mut out = word.clone();
    if out.last().is_some_and(|c| c.base == NOON) {
        out.pop();
    }
    if out.last().is_some_and(|c| c.base == WAW && c.mark == Mark::Sukoon) {
        out.push(Cell::long(ALIF));
    }
    out
}

fn subjunctive_ending(word: &Word) -> Word {
    let mut out = word.clone();
    if let Some(last) = out.last_mut() {
        if !last.is_long_vowel() || matches!(last.base, WAW | YA) {
            last.mark = Mark::Fatha;
        }
    }
    out
}

fn jussive_ending(word: &Word, apocopate: bool) -> Word {
    let mut out = word.clone();
    if out.last().is_some_and(|c| c.is_long_vowel()) {
        out.pop();
        return out;
    }
    if apocopate && out.len() >= 3 {
        let long_at = out.len() - 2;
        if out[long_at].is_long_vowel() {
            let long = out.remove(long_at);
            if let Some(vowel) = short_of(long.base) {
                out[long_at - 1].mark = Mark::of(vowel);
            }
        }
    }
    if let Some(last) = out.last_mut() {
        // A doubled final radical cannot be silent: يَمُدَّ, يَحْمَرَّ.
        last.mark = if last.shadda { Mark::Fatha } else { Mark::Sukoon };
    }
    out
}

fn short_of(long: char) -> Option<ShortVowel> {
    match long {
        ALIF => Some(ShortVowel::A),
        WAW => Some(ShortVowel::U),
        YA => Some(ShortVowel::I),
        _ => None,
    }
}
