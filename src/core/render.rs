// File: src/core/render.rs
//! Display-time filtering of vowel marks. Conjugators always produce fully
//! vowelled text; this only thins it for presentation.

use crate::core::letters::{
    strip_diacritics, ALIF, ALIF_MAQSURA, DAMMA, FATHA, KASRA, SHADDA, WAW, YA,
};
use crate::core::types::Conjugation;
use crate::error::ConjugationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiacriticsPreference {
    /// Every mark, as produced.
    #[default]
    All,
    /// Drops short vowels a following long vowel already spells out.
    #[serde(rename = "some")]
    Partial,
    /// No marks at all.
    #[serde(rename = "none")]
    Bare,
}

impl DiacriticsPreference {
    pub fn token(self) -> &'static str {
        match self {
            DiacriticsPreference::All => "all",
            DiacriticsPreference::Partial => "some",
            DiacriticsPreference::Bare => "none",
        }
    }
}

impl FromStr for DiacriticsPreference {
    type Err = ConjugationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DiacriticsPreference::All),
            "some" => Ok(DiacriticsPreference::Partial),
            "none" => Ok(DiacriticsPreference::Bare),
            other => Err(ConjugationError::UnknownDiacriticsPreference(other.to_string())),
        }
    }
}

impl fmt::Display for DiacriticsPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

pub fn apply_diacritics_preference(text: &str, preference: DiacriticsPreference) -> String {
    match preference {
        DiacriticsPreference::All => text.to_string(),
        DiacriticsPreference::Bare => strip_diacritics(text),
        DiacriticsPreference::Partial => drop_predictable_vowels(text),
    }
}

/// Applies the preference to every slot of a paradigm.
pub fn render_conjugation(
    conjugation: &Conjugation,
    preference: DiacriticsPreference,
) -> Conjugation {
    conjugation.map(|_, form| apply_diacritics_preference(form, preference))
}

fn drop_predictable_vowels(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            !is_predictable(c, chars.get(i + 1).copied(), chars.get(i + 2).copied())
        })
        .map(|(_, c)| *c)
        .collect()
}

// A short vowel is predictable before its own long letter, unless that letter
// is a consonantal glide carrying a vowel or shadda of its own (يُوَاقِيَا).
fn is_predictable(mark: char, next: Option<char>, after: Option<char>) -> bool {
    let long = matches!(
        (mark, next),
        (DAMMA, Some(WAW)) | (KASRA, Some(YA)) | (FATHA, Some(ALIF | ALIF_MAQSURA))
    );
    long && !matches!(after, Some(FATHA | DAMMA | KASRA | SHADDA))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::letters::is_diacritic;

    fn marks(s: &str) -> usize {
        s.chars().filter(|c| is_diacritic(*c)).count()
    }

    #[test]
    fn parses_preferences() {
        assert_eq!("some".parse::<DiacriticsPreference>(), Ok(DiacriticsPreference::Partial));
        assert_eq!(
            "most".parse::<DiacriticsPreference>(),
            Err(ConjugationError::UnknownDiacriticsPreference("most".into()))
        );
    }

    #[test]
    fn all_is_identity() {
        let text = "كَتَبُوْا";
        assert_eq!(apply_diacritics_preference(text, DiacriticsPreference::All), text);
    }

    #[test]
    fn none_strips_everything() {
        assert_eq!(apply_diacritics_preference("يَكْتُبُونَ", DiacriticsPreference::Bare), "يكتبون");
    }

    #[test]
    fn some_drops_only_vowels_before_matching_long_letters() {
        let text = "\u{0642}\u{064e}\u{0627}\u{0644}\u{064e}"; // قَالَ
        let partial = apply_diacritics_preference(text, DiacriticsPreference::Partial);
        assert_eq!(partial, "\u{0642}\u{0627}\u{0644}\u{064e}");
        assert!(marks(&partial) < marks(text));
        assert!(marks(&partial) > 0);
    }

    #[test]
    fn some_keeps_vowels_before_consonantal_glides() {
        // يُوَاقِيَا: the و and ي carry their own fatha, so the damma and
        // kasra before them stay; only the fathas before the two alifs go.
        let text = "\u{064a}\u{064f}\u{0648}\u{064e}\u{0627}\u{0642}\u{0650}\u{064a}\u{064e}\u{0627}";
        let partial = apply_diacritics_preference(text, DiacriticsPreference::Partial);
        assert_eq!(
            partial,
            "\u{064a}\u{064f}\u{0648}\u{0627}\u{0642}\u{0650}\u{064a}\u{0627}"
        );
        assert!(marks(&partial) > 0);
        assert!(marks(&partial) < marks(text));
    }

    #[test]
    fn some_drops_vowel_before_silent_long_letter() {
        // كَتَبُوْا keeps the sukoon on و but loses the damma before it.
        let text = "\u{0643}\u{064e}\u{062a}\u{064e}\u{0628}\u{064f}\u{0648}\u{0652}\u{0627}";
        assert_eq!(
            apply_diacritics_preference(text, DiacriticsPreference::Partial),
            "\u{0643}\u{064e}\u{062a}\u{064e}\u{0628}\u{0648}\u{0652}\u{0627}"
        );
    }

    #[test]
    fn serde_uses_the_lowercase_tokens() {
        assert_eq!(serde_json::to_string(&DiacriticsPreference::Bare).unwrap(), "\"none\"");
        assert_eq!(
            serde_json::from_str::<DiacriticsPreference>("\"some\"").unwrap(),
            DiacriticsPreference::Partial
        );
    }
}
