// File: src/core/active.rs
//! Active-voice paradigms: past, present in its three moods, future and
//! imperative.

use crate::core::letters::{ShortVowel, ALIF, HAMZA, WAW, YA};
use crate::core::mood::derive_mood;
use crate::core::stem::{
    drops_hamza_in_imperative, is_initial_radical, underlying_radicals, Inflector,
};
use crate::core::types::{Conjugation, Form, Mood, Person, PronounId, Verb, Voice};
use crate::core::word::{Cell, Mark, Word};

/// سَ, prefixed to the indicative to form the future.
pub const FUTURE_PREFIX: &str = "\u{0633}\u{064e}";

pub fn conjugate_past(verb: &Verb) -> Conjugation {
    past_conjugation(verb, Voice::Active)
}

pub fn conjugate_present_mood(verb: &Verb, mood: Mood) -> Conjugation {
    render(&present_words(verb, Voice::Active, mood))
}

/// سَ + the indicative, slot for slot.
pub fn conjugate_future(verb: &Verb) -> Conjugation {
    with_future_prefix(&conjugate_present_mood(verb, Mood::Indicative))
}

/// Second-person commands built from the jussive; first- and third-person
/// slots are empty.
pub fn conjugate_imperative(verb: &Verb) -> Conjugation {
    let jussive = present_words(verb, Voice::Active, Mood::Jussive);
    let radicals = underlying_radicals(verb);
    Conjugation::from_fn(|pronoun| {
        if pronoun.person() != Person::Second {
            return String::new();
        }
        imperative(verb, &radicals, &jussive[pronoun.index()]).render()
    })
}

pub(crate) fn past_conjugation(verb: &Verb, voice: Voice) -> Conjugation {
    let inflector = Inflector::past(verb, voice);
    Conjugation::from_fn(|pronoun| inflector.inflect(pronoun).render())
}

pub(crate) fn present_words(verb: &Verb, voice: Voice, mood: Mood) -> [Word; 13] {
    let inflector = Inflector::present(verb, voice);
    let indicative = PronounId::ALL.map(|pronoun| inflector.inflect(pronoun));
    derive_mood(&indicative, mood, inflector.apocopates())
}

pub(crate) fn render(words: &[Word; 13]) -> Conjugation {
    Conjugation::from_fn(|pronoun| words[pronoun.index()].render())
}

pub(crate) fn with_future_prefix(indicative: &Conjugation) -> Conjugation {
    indicative.map(|_, form| {
        if form.is_empty() {
            String::new()
        } else {
            format!("{FUTURE_PREFIX}{form}")
        }
    })
}

fn imperative(verb: &Verb, radicals: &[char], jussive: &Word) -> Word {
    let mut word = jussive.clone();
    if word.is_empty() {
        return word;
    }
    word.remove(0);
    if !verb.root().is_triliteral() {
        return word;
    }
    match verb.form() {
        Form::I(pattern) => {
            form_one_imperative(word, pattern.present_vowel(), drops_hamza_in_imperative(radicals))
        }
        Form::IV => {
            // The prefix damma that merged a glide into و is gone: أَوْجِدْ.
            if let Some(first) = word.first().copied() {
                if is_initial_radical(&first) && first.is_long_vowel() {
                    word[0] = Cell { base: radicals[0], mark: Mark::Sukoon, ..first };
                }
            }
            word.insert(0, Cell::affix(HAMZA, Mark::Fatha));
            word
        }
        Form::VII | Form::VIII | Form::IX | Form::X => {
            word.insert(0, Cell::affix(ALIF, Mark::Kasra));
            word
        }
        Form::II | Form::III | Form::V | Form::VI => word,
    }
}

// اُكْتُبْ, اِضْرِبْ, اِفْتَحْ; كُلْ; اِيذَنْ.
fn form_one_imperative(mut word: Word, present_vowel: ShortVowel, drops_hamza: bool) -> Word {
    let Some(first) = word.first().copied() else {
        return word;
    };
    if first.mark != Mark::Sukoon {
        return word;
    }
    if first.base == HAMZA && drops_hamza {
        word.remove(0);
        return word;
    }
    let helper = if present_vowel == ShortVowel::U { ShortVowel::U } else { ShortVowel::I };
    if matches!(first.base, HAMZA | WAW | YA) {
        word[0] = Cell { base: helper.long_letter(), mark: Mark::Bare, ..first };
    }
    word.insert(0, Cell::affix(ALIF, Mark::of(helper)));
    word
}
