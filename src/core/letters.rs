// File: src/core/letters.rs
//! The Arabic letters and marks the engine works with, plus total helpers
//! over diacritized strings. None of these functions fail: characters they do
//! not know about are passed through untouched.

use unicode_normalization::UnicodeNormalization;

pub const FATHA: char = '\u{064e}';
pub const DAMMA: char = '\u{064f}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKOON: char = '\u{0652}';

pub const HAMZA: char = '\u{0621}';
pub const ALIF_MADDA: char = '\u{0622}';
pub const ALIF_HAMZA_ABOVE: char = '\u{0623}';
pub const WAW_HAMZA: char = '\u{0624}';
pub const ALIF_HAMZA_BELOW: char = '\u{0625}';
pub const YA_HAMZA: char = '\u{0626}';

pub const ALIF: char = '\u{0627}';
pub const ALIF_MAQSURA: char = '\u{0649}';
pub const WAW: char = '\u{0648}';
pub const YA: char = '\u{064a}';

pub const TA: char = '\u{062a}';
pub const NOON: char = '\u{0646}';
pub const SEEN: char = '\u{0633}';
pub const MEEM: char = '\u{0645}';
pub const DAL: char = '\u{062f}';
pub const THAL: char = '\u{0630}';
pub const ZAY: char = '\u{0632}';
pub const SAD: char = '\u{0635}';
pub const DAD: char = '\u{0636}';
pub const TAH: char = '\u{0637}';
pub const ZAH: char = '\u{0638}';
pub const KHAH: char = '\u{062e}';
pub const RA: char = '\u{0631}';
pub const AIN: char = '\u{0639}';

/// The three short vowels a stem can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortVowel {
    A,
    I,
    U,
}

impl ShortVowel {
    pub fn diacritic(self) -> char {
        match self {
            ShortVowel::A => FATHA,
            ShortVowel::I => KASRA,
            ShortVowel::U => DAMMA,
        }
    }

    /// The letter that lengthens this vowel.
    pub fn long_letter(self) -> char {
        match self {
            ShortVowel::A => ALIF,
            ShortVowel::I => YA,
            ShortVowel::U => WAW,
        }
    }
}

pub fn is_weak_letter(c: char) -> bool {
    matches!(c, ALIF | WAW | YA | ALIF_MAQSURA)
}

pub fn is_hamzated_letter(c: char) -> bool {
    matches!(
        c,
        HAMZA | ALIF_MADDA | ALIF_HAMZA_ABOVE | WAW_HAMZA | ALIF_HAMZA_BELOW | YA_HAMZA
    )
}

/// Harakat, tanwin, shadda, sukoon and the other combining marks of the block,
/// plus the dagger alif.
pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064b}'..='\u{065f}' | '\u{0670}')
}

/// Letters that may stand as a radical.
pub fn is_arabic_letter(c: char) -> bool {
    matches!(c, '\u{0621}'..='\u{063a}' | '\u{0641}'..='\u{064a}')
}

pub fn strip_diacritics(word: &str) -> String {
    word.chars().filter(|&c| !is_diacritic(c)).collect()
}

/// Replaces whatever marks sit on the last base letter with `diacritic`.
pub fn replace_final_diacritic(word: &str, diacritic: char) -> String {
    let mut out = remove_trailing_diacritics(word);
    if !out.is_empty() {
        out.push(diacritic);
    }
    out
}

/// Drops the marks attached to the last base letter.
pub fn remove_trailing_diacritics(word: &str) -> String {
    word.trim_end_matches(is_diacritic).to_string()
}

/// Drops the marks attached to the first base letter.
pub fn remove_leading_diacritics(word: &str) -> String {
    let mut chars = word.chars();
    let mut out = String::with_capacity(word.len());
    // Marks before any base letter are dropped too.
    for c in chars.by_ref() {
        if !is_diacritic(c) {
            out.push(c);
            break;
        }
    }
    let rest: String = chars.collect();
    out.push_str(rest.trim_start_matches(is_diacritic));
    out
}

/// Two identical consonants, touching or split only by a sukoon, become one
/// consonant carrying a shadda. Marks on the second letter are kept, and the
/// result is NFC (vowel before shadda).
pub fn geminate_double_letters(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if !is_diacritic(c) && c != ALIF && !is_long_vowel_position(&chars, i) {
            let next = if chars.get(i + 1) == Some(&SUKOON) { i + 2 } else { i + 1 };
            let doubled_already = chars.get(next + 1) == Some(&SHADDA)
                || chars.get(next + 2) == Some(&SHADDA);
            if chars.get(next) == Some(&c) && !doubled_already {
                out.push(c);
                out.push(SHADDA);
                i = next + 1;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }
    out.nfc().collect()
}

// A bare waw/ya right after its matching short vowel is a long vowel, not a consonant.
fn is_long_vowel_position(chars: &[char], i: usize) -> bool {
    let Some(prev) = i.checked_sub(1).map(|p| chars[p]) else {
        return false;
    };
    matches!((prev, chars[i]), (DAMMA, WAW) | (KASRA, YA))
}

/// The seat a hamza takes when its governing vowel is `vowel`: alif for
/// fatha, waw for damma, ya for kasra and anything else. Non-hamza letters
/// are returned unchanged.
pub fn seat_hamza(letter: char, vowel: char) -> char {
    if !is_hamzated_letter(letter) {
        return letter;
    }
    match vowel {
        FATHA => ALIF_HAMZA_ABOVE,
        DAMMA => WAW_HAMZA,
        _ => YA_HAMZA,
    }
}
