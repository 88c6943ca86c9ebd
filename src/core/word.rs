// File: src/core/word.rs
//! A word under construction: one cell per base letter, each holding at most
//! one vowel (or sukoon) plus an optional shadda. Keeping marks structured
//! rather than as loose combining characters means no rule can ever leave two
//! vowels on one letter.
//!
//! Hamzas stay abstract (`ء`) until [`Word::render`], which picks their seats
//! from the finished vowel context.

use crate::core::letters::{
    seat_hamza, ShortVowel, ALIF, ALIF_HAMZA_ABOVE, ALIF_HAMZA_BELOW, ALIF_MADDA, ALIF_MAQSURA,
    DAMMA, FATHA, HAMZA, KASRA, SHADDA, SUKOON, WAW, WAW_HAMZA, YA, YA_HAMZA,
};
use std::ops::{Index, IndexMut};
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mark {
    /// No mark: long-vowel letters and the alif of the dual.
    Bare,
    Fatha,
    Damma,
    Kasra,
    Sukoon,
}

impl Mark {
    pub(crate) fn of(vowel: ShortVowel) -> Self {
        match vowel {
            ShortVowel::A => Mark::Fatha,
            ShortVowel::I => Mark::Kasra,
            ShortVowel::U => Mark::Damma,
        }
    }

    pub(crate) fn vowel(self) -> Option<ShortVowel> {
        match self {
            Mark::Fatha => Some(ShortVowel::A),
            Mark::Kasra => Some(ShortVowel::I),
            Mark::Damma => Some(ShortVowel::U),
            Mark::Bare | Mark::Sukoon => None,
        }
    }

    pub(crate) fn is_vowel(self) -> bool {
        self.vowel().is_some()
    }

    fn diacritic(self) -> Option<char> {
        match self {
            Mark::Bare => None,
            Mark::Fatha => Some(FATHA),
            Mark::Damma => Some(DAMMA),
            Mark::Kasra => Some(KASRA),
            Mark::Sukoon => Some(SUKOON),
        }
    }

    // Which vowel wins when two compete for a medial hamza.
    fn strength(self) -> u8 {
        match self {
            Mark::Kasra => 3,
            Mark::Damma => 2,
            Mark::Fatha => 1,
            Mark::Bare | Mark::Sukoon => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Affix,
    /// Zero-based radical position.
    Radical(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) base: char,
    pub(crate) mark: Mark,
    pub(crate) shadda: bool,
    pub(crate) role: Role,
}

impl Cell {
    pub(crate) const fn affix(base: char, mark: Mark) -> Self {
        Self { base, mark, shadda: false, role: Role::Affix }
    }

    pub(crate) const fn radical(index: usize, base: char, mark: Mark) -> Self {
        Self { base, mark, shadda: false, role: Role::Radical(index) }
    }

    pub(crate) const fn long(base: char) -> Self {
        Self::affix(base, Mark::Bare)
    }

    pub(crate) const fn doubled(mut self) -> Self {
        self.shadda = true;
        self
    }

    pub(crate) fn is_radical(&self) -> bool {
        matches!(self.role, Role::Radical(_))
    }

    pub(crate) fn is_long_vowel(&self) -> bool {
        self.mark == Mark::Bare && matches!(self.base, ALIF | WAW | YA | ALIF_MAQSURA)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Word {
    cells: Vec<Cell>,
}

impl Word {
    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn first(&self) -> Option<&Cell> {
        self.cells.first()
    }

    pub(crate) fn last(&self) -> Option<&Cell> {
        self.cells.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Cell> {
        self.cells.last_mut()
    }

    pub(crate) fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub(crate) fn extend(&mut self, cells: &[Cell]) {
        self.cells.extend_from_slice(cells);
    }

    pub(crate) fn insert(&mut self, index: usize, cell: Cell) {
        self.cells.insert(index, cell);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Cell {
        self.cells.remove(index)
    }

    pub(crate) fn pop(&mut self) -> Option<Cell> {
        self.cells.pop()
    }

    /// Index of the first cell holding radical `index`.
    pub(crate) fn radical(&self, index: usize) -> Option<usize> {
        self.cells.iter().position(|c| c.role == Role::Radical(index))
    }

    /// Index of the last radical cell, the one suffixes attach to.
    pub(crate) fn final_radical(&self) -> Option<usize> {
        self.cells.iter().rposition(Cell::is_radical)
    }

    /// Merges a sukoon-marked consonant into an identical following one,
    /// which takes a shadda.
    pub(crate) fn collapse_geminates(&mut self) {
        let mut i = 0;
        while i + 1 < self.cells.len() {
            let (a, b) = (self.cells[i], self.cells[i + 1]);
            let mergeable = a.base == b.base
                && a.base != ALIF
                && a.mark == Mark::Sukoon
                && !a.shadda
                && !b.shadda
                && b.mark.is_vowel();
            if mergeable {
                let role = if b.is_radical() { b.role } else { a.role };
                self.cells[i] = Cell { shadda: true, role, ..b };
                self.cells.remove(i + 1);
            }
            i += 1;
        }
    }

    /// Seats hamzas and emits the NFC string.
    pub(crate) fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 4);
        for cell in self.seated() {
            out.push(cell.base);
            if let Some(d) = cell.mark.diacritic() {
                out.push(d);
            }
            if cell.shadda {
                out.push(SHADDA);
            }
        }
        out.nfc().collect()
    }

    fn seated(&self) -> Vec<Cell> {
        let mut cells = self.cells.clone();
        contract_hamzas(&mut cells);
        for i in 0..cells.len() {
            if cells[i].base == HAMZA {
                cells[i].base = hamza_seat(&cells, i);
            }
        }
        cells
    }
}

impl Index<usize> for Word {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Word {
    fn index_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }
}

// ءَ + ءْ and ءَ + ا become آ where the hamza sits on an alif (initial, or
// after fatha or sukoon); a silent hamza after ءُ / ءِ lengthens the vowel.
fn contract_hamzas(cells: &mut Vec<Cell>) {
    let mut i = 0;
    while i + 1 < cells.len() {
        let (first, next) = (cells[i], cells[i + 1]);
        let after_long = i > 0 && cells[i - 1].is_long_vowel();
        if first.base == HAMZA && !first.shadda && !after_long {
            let silent_hamza = next.base == HAMZA && next.mark == Mark::Sukoon;
            let alif_seat = i == 0 || matches!(cells[i - 1].mark, Mark::Fatha | Mark::Sukoon);
            let before_alif = next.base == ALIF && next.mark == Mark::Bare;
            let madda = alif_seat && (silent_hamza || before_alif);
            match first.mark {
                Mark::Fatha if madda => {
                    cells[i] = Cell { base: ALIF_MADDA, mark: Mark::Bare, ..first };
                    cells.remove(i + 1);
                }
                Mark::Damma if silent_hamza => {
                    cells[i + 1] = Cell { base: WAW, mark: Mark::Bare, ..next };
                }
                Mark::Kasra if silent_hamza => {
                    cells[i + 1] = Cell { base: YA, mark: Mark::Bare, ..next };
                }
                _ => {}
            }
        }
        i += 1;
    }
}

fn hamza_seat(cells: &[Cell], i: usize) -> char {
    let own = cells[i].mark;
    if i == 0 {
        return if own == Mark::Kasra { ALIF_HAMZA_BELOW } else { ALIF_HAMZA_ABOVE };
    }
    let prev = cells[i - 1];
    let is_final = i + 1 == cells.len();

    if prev.is_long_vowel() {
        return match (prev.base, own) {
            _ if is_final => HAMZA,
            (YA, _) | (_, Mark::Kasra) => YA_HAMZA,
            (ALIF, Mark::Damma) => WAW_HAMZA,
            _ => HAMZA,
        };
    }

    // A final hamza follows the vowel before it; a medial one the stronger
    // of that vowel and its own.
    let governing = if is_final || prev.mark.strength() > own.strength() {
        prev.mark
    } else {
        own
    };
    match governing.diacritic() {
        Some(vowel @ (FATHA | DAMMA | KASRA)) => seat_hamza(HAMZA, vowel),
        _ => HAMZA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(marks: &[(char, Mark)]) -> Word {
        Word::new(marks.iter().map(|&(c, m)| Cell::affix(c, m)).collect())
    }

    #[test]
    fn renders_marks_in_canonical_order() {
        let word = Word::new(vec![
            Cell::affix('م', Mark::Fatha),
            Cell::affix('د', Mark::Fatha).doubled(),
        ]);
        assert_eq!(word.render(), "\u{0645}\u{064e}\u{062f}\u{064e}\u{0651}");
    }

    #[test]
    fn collapses_silent_doubles() {
        let mut word = cells(&[('م', Mark::Fatha), ('د', Mark::Sukoon), ('د', Mark::Fatha)]);
        word.collapse_geminates();
        assert_eq!(word.len(), 2);
        assert!(word[1].shadda);
        assert_eq!(word[1].mark, Mark::Fatha);
    }

    #[test]
    fn initial_hamza_sits_on_alif() {
        let word = cells(&[(HAMZA, Mark::Kasra), ('ن', Mark::Sukoon)]);
        assert!(word.render().starts_with(ALIF_HAMZA_BELOW));
        let word = cells(&[(HAMZA, Mark::Damma), ('خ', Mark::Kasra)]);
        assert!(word.render().starts_with(ALIF_HAMZA_ABOVE));
    }

    #[test]
    fn medial_hamza_follows_the_stronger_vowel() {
        // سُئِلَ
        let word = cells(&[('س', Mark::Damma), (HAMZA, Mark::Kasra), ('ل', Mark::Fatha)]);
        assert_eq!(word.render().chars().nth(2), Some(YA_HAMZA));
        // يَسْأَلُ
        let word = cells(&[
            ('ي', Mark::Fatha),
            ('س', Mark::Sukoon),
            (HAMZA, Mark::Fatha),
            ('ل', Mark::Damma),
        ]);
        assert_eq!(word.render().chars().nth(4), Some(ALIF_HAMZA_ABOVE));
    }

    #[test]
    fn final_hamza_follows_the_vowel_before_it() {
        // قَرِئَ style: kasra before a final hamza
        let word = cells(&[('ق', Mark::Damma), ('ر', Mark::Kasra), (HAMZA, Mark::Fatha)]);
        assert_eq!(word.render().chars().nth(4), Some(YA_HAMZA));
        // after a long alif the hamza stands alone
        let word = cells(&[('ج', Mark::Fatha), (ALIF, Mark::Bare), (HAMZA, Mark::Fatha)]);
        assert_eq!(word.render().chars().nth(3), Some(HAMZA));
    }

    #[test]
    fn hamza_pairs_contract_to_madda() {
        let word = cells(&[(HAMZA, Mark::Fatha), (HAMZA, Mark::Sukoon), ('ك', Mark::Damma)]);
        assert_eq!(word.render(), "\u{0622}\u{0643}\u{064f}");
        let word = cells(&[(HAMZA, Mark::Damma), (HAMZA, Mark::Sukoon), ('م', Mark::Kasra)]);
        assert_eq!(word.render(), "\u{0623}\u{064f}\u{0648}\u{0645}\u{0650}");
    }

    #[test]
    fn hamza_before_alif_keeps_its_seat_after_kasra_or_damma() {
        // ظَمِئَا
        let word = cells(&[
            ('ظ', Mark::Fatha),
            ('م', Mark::Kasra),
            (HAMZA, Mark::Fatha),
            (ALIF, Mark::Bare),
        ]);
        assert_eq!(
            word.render(),
            "\u{0638}\u{064e}\u{0645}\u{0650}\u{0626}\u{064e}\u{0627}"
        );
        // يُؤَاخِذُ
        let word = cells(&[
            ('ي', Mark::Damma),
            (HAMZA, Mark::Fatha),
            (ALIF, Mark::Bare),
            ('خ', Mark::Kasra),
            ('ذ', Mark::Damma),
        ]);
        assert_eq!(word.render().chars().nth(2), Some(WAW_HAMZA));
        // قَرَآ
        let word = cells(&[
            ('ق', Mark::Fatha),
            ('ر', Mark::Fatha),
            (HAMZA, Mark::Fatha),
            (ALIF, Mark::Bare),
        ]);
        assert_eq!(word.render(), "\u{0642}\u{064e}\u{0631}\u{064e}\u{0622}");
    }
}
