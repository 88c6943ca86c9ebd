// File: src/core/stem.rs
//! Stem skeletons for Forms I–X and quadriliterals, the person affixes, and
//! the readjustment rules that turn a raw stem + affix into a surface word
//! when the root has weak or doubled radicals.

use crate::core::letters::{
    is_hamzated_letter, ShortVowel, AIN, ALIF, ALIF_MAQSURA, DAD, DAL, HAMZA, KHAH, MEEM, NOON,
    RA, SAD, SEEN, TA, TAH, THAL, WAW, YA, ZAH, ZAY,
};
use crate::core::root::{RootAnalysis, RootClass};
use crate::core::types::{Form, PronounId, Verb, Voice};
use crate::core::vowels::FormPattern;
use crate::core::word::{Cell, Mark, Role, Word};

use Mark::{Bare, Damma, Fatha, Kasra, Sukoon};

/// Weak-radical rules that apply to a triliteral root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Weakness {
    pub(crate) assimilated: bool,
    pub(crate) hollow: bool,
    pub(crate) defective: bool,
}

impl Weakness {
    pub(crate) fn of(analysis: &RootAnalysis) -> Self {
        let weak = |p: usize| analysis.weak_positions.contains(&p);
        match analysis.class {
            RootClass::Strong | RootClass::Hamzated => Self::default(),
            RootClass::Hollow | RootClass::HamzatedHollow => {
                Self { hollow: true, ..Self::default() }
            }
            // The middle radical stays consonantal when the final one is weak.
            RootClass::Defective
            | RootClass::HamzatedDefective
            | RootClass::HamzatedHollowDefective => {
                Self { defective: true, ..Self::default() }
            }
            RootClass::DoublyWeak | RootClass::Assimilated => Self {
                assimilated: weak(0),
                defective: weak(2),
                hollow: weak(1) && !weak(2),
            },
        }
    }
}

/// The radicals as the rules see them: hamza in every seat is `ء`, and the
/// dictionary spellings ا / ى are resolved to the glide they stand for.
pub(crate) fn underlying_radicals(verb: &Verb) -> Vec<char> {
    let radicals = verb.root().radicals();
    let last = radicals.len() - 1;
    let middle_glide = match verb.form().pattern().map(|p| p.present_vowel()) {
        Some(ShortVowel::I) => YA,
        _ => WAW,
    };
    radicals
        .iter()
        .enumerate()
        .map(|(i, &c)| match c {
            c if is_hamzated_letter(c) => HAMZA,
            ALIF if i == last => WAW,
            ALIF => middle_glide,
            ALIF_MAQSURA => YA,
            c => c,
        })
        .collect()
}

/// أكل, أخذ and أمر lose their hamza in the imperative (كُلْ, خُذْ, مُرْ).
pub(crate) fn drops_hamza_in_imperative(radicals: &[char]) -> bool {
    matches!(radicals, [HAMZA, 'ك', 'ل'] | [HAMZA, KHAH, THAL] | [HAMZA, MEEM, RA])
}

/// Whether a Form I و-initial root loses its و in the present. Regular for
/// fa3ala and yaf3ilu patterns; وسع and وطئ drop it despite fa3ila-yaf3alu.
pub(crate) fn drops_initial_waw(radicals: &[char], pattern: FormPattern) -> bool {
    radicals.first() == Some(&WAW)
        && (pattern.past_vowel() == ShortVowel::A
            || pattern.present_vowel() == ShortVowel::I
            || matches!(radicals, [WAW, SEEN, AIN] | [WAW, TAH, HAMZA]))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StemTense {
    Past,
    Present,
}

/// What the suffix does to the syllable ending in the final radical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Ending {
    /// Nothing follows the final radical's vowel.
    Bare,
    /// Past feminine ت.
    Taa,
    /// Dual ا.
    Alif,
    /// Masculine plural و.
    PluralWaw,
    /// Present second feminine singular ي.
    FemYaa,
    /// A consonant-initial suffix after a silent final radical.
    Consonant,
}

struct Suffix {
    final_mark: Mark,
    ending: Ending,
    cells: Vec<Cell>,
}

impl Suffix {
    fn new(final_mark: Mark, ending: Ending, cells: &[Cell]) -> Self {
        Self { final_mark, ending, cells: cells.to_vec() }
    }
}

fn past_suffix(pronoun: PronounId) -> Suffix {
    use PronounId::*;
    let consonant = |cells: &[Cell]| Suffix::new(Sukoon, Ending::Consonant, cells);
    match pronoun {
        ThirdMasculineSingular => Suffix::new(Fatha, Ending::Bare, &[]),
        ThirdFeminineSingular => Suffix::new(Fatha, Ending::Taa, &[Cell::affix(TA, Sukoon)]),
        ThirdMasculineDual => Suffix::new(Fatha, Ending::Alif, &[Cell::long(ALIF)]),
        ThirdFeminineDual => {
            Suffix::new(Fatha, Ending::Taa, &[Cell::affix(TA, Fatha), Cell::long(ALIF)])
        }
        ThirdMasculinePlural => {
            Suffix::new(Damma, Ending::PluralWaw, &[Cell::affix(WAW, Sukoon), Cell::long(ALIF)])
        }
        ThirdFemininePlural => consonant(&[Cell::affix(NOON, Fatha)]),
        SecondMasculineSingular => consonant(&[Cell::affix(TA, Fatha)]),
        SecondFeminineSingular => consonant(&[Cell::affix(TA, Kasra)]),
        SecondDual => consonant(&[
            Cell::affix(TA, Damma),
            Cell::affix(MEEM, Fatha),
            Cell::long(ALIF),
        ]),
        SecondMasculinePlural => consonant(&[Cell::affix(TA, Damma), Cell::affix(MEEM, Sukoon)]),
        SecondFemininePlural => {
            consonant(&[Cell::affix(TA, Damma), Cell::affix(NOON, Fatha).doubled()])
        }
        FirstSingular => consonant(&[Cell::affix(TA, Damma)]),
        FirstPlural => consonant(&[Cell::affix(NOON, Fatha), Cell::long(ALIF)]),
    }
}

fn present_prefix(pronoun: PronounId) -> char {
    use PronounId::*;
    match pronoun {
        FirstSingular => HAMZA,
        FirstPlural => NOON,
        SecondMasculineSingular
        | SecondFeminineSingular
        | SecondDual
        | SecondMasculinePlural
        | SecondFemininePlural
        | ThirdFeminineSingular
        | ThirdFeminineDual => TA,
        ThirdMasculineSingular
        | ThirdMasculineDual
        | ThirdMasculinePlural
        | ThirdFemininePlural => YA,
    }
}

fn present_suffix(pronoun: PronounId) -> Suffix {
    use PronounId::*;
    match pronoun {
        FirstSingular
        | FirstPlural
        | SecondMasculineSingular
        | ThirdMasculineSingular
        | ThirdFeminineSingular => Suffix::new(Damma, Ending::Bare, &[]),
        SecondFeminineSingular => Suffix::new(
            Kasra,
            Ending::FemYaa,
            &[Cell::long(YA), Cell::affix(NOON, Fatha)],
        ),
        SecondDual | ThirdMasculineDual | ThirdFeminineDual => Suffix::new(
            Fatha,
            Ending::Alif,
            &[Cell::long(ALIF), Cell::affix(NOON, Kasra)],
        ),
        SecondMasculinePlural | ThirdMasculinePlural => Suffix::new(
            Damma,
            Ending::PluralWaw,
            &[Cell::affix(WAW, Sukoon), Cell::affix(NOON, Fatha)],
        ),
        SecondFemininePlural | ThirdFemininePlural => {
            Suffix::new(Sukoon, Ending::Consonant, &[Cell::affix(NOON, Fatha)])
        }
    }
}

/// Vowels a hollow stem takes before its contracted middle radical:
/// `long` in an open syllable (قَالَ), `short` in a closed one (قُلْتُ).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HollowVowels {
    long: ShortVowel,
    short: ShortVowel,
}

impl HollowVowels {
    const fn same(vowel: ShortVowel) -> Self {
        Self { long: vowel, short: vowel }
    }
}

fn hollow_vowels(form: Form, voice: Voice, tense: StemTense) -> Option<HollowVowels> {
    use ShortVowel::{A, I, U};
    if !matches!(form, Form::I(_) | Form::IV | Form::VII | Form::VIII | Form::X) {
        return None;
    }
    Some(match (voice, tense, form) {
        (Voice::Active, StemTense::Past, Form::I(pattern)) => HollowVowels {
            long: A,
            short: if pattern.present_vowel() == U { U } else { I },
        },
        (Voice::Active, StemTense::Past, _) => HollowVowels::same(A),
        (Voice::Active, StemTense::Present, Form::I(pattern)) => {
            HollowVowels::same(pattern.present_vowel())
        }
        (Voice::Active, StemTense::Present, Form::VII | Form::VIII) => HollowVowels::same(A),
        (Voice::Active, StemTense::Present, _) => HollowVowels::same(I),
        (Voice::Passive, StemTense::Past, _) => HollowVowels::same(I),
        (Voice::Passive, StemTense::Present, _) => HollowVowels::same(A),
    })
}

/// Builds every person of one tense/voice of one verb.
#[derive(Debug, Clone)]
pub(crate) struct Inflector {
    tense: StemTense,
    stem: Word,
    prefix_mark: Mark,
    weakness: Weakness,
    hollow: Option<HollowVowels>,
    /// Letter a defective final radical shows after fatha.
    glide_after_fatha: char,
    /// Form I و-initial presents (يَصِلُ, يَقِفُ).
    drops_initial: bool,
}

impl Inflector {
    pub(crate) fn past(verb: &Verb, voice: Voice) -> Self {
        Self::build(verb, voice, StemTense::Past)
    }

    pub(crate) fn present(verb: &Verb, voice: Voice) -> Self {
        Self::build(verb, voice, StemTense::Present)
    }

    fn build(verb: &Verb, voice: Voice, tense: StemTense) -> Self {
        let radicals = underlying_radicals(verb);
        let form = verb.form();

        if !verb.root().is_triliteral() {
            let mut stem = match tense {
                StemTense::Past => quadriliteral_past(&radicals),
                StemTense::Present => quadriliteral_present(&radicals),
            };
            if voice == Voice::Passive {
                passivize(&mut stem, tense);
            }
            return Self {
                tense,
                stem: Word::new(stem),
                prefix_mark: Damma,
                weakness: Weakness::default(),
                hollow: None,
                glide_after_fatha: YA,
                drops_initial: false,
            };
        }

        let weakness = Weakness::of(&verb.root().analyze());
        let mut stem = match tense {
            StemTense::Past => active_past_stem(form, &radicals),
            StemTense::Present => active_present_stem(form, &radicals),
        };
        if voice == Voice::Passive {
            passivize(&mut stem, tense);
        }
        if tense == StemTense::Present && matches!(form, Form::I(_)) && radicals == [RA, HAMZA, YA] {
            // يَرَى: the hamza of رأى drops and leaves its vowel behind.
            let hamza = stem.remove(1);
            stem[0].mark = hamza.mark;
        }

        let prefix_mark = match (voice, form) {
            (Voice::Passive, _) | (_, Form::II | Form::III | Form::IV) => Damma,
            _ => Fatha,
        };
        let form_one_active = matches!(form, Form::I(_)) && voice == Voice::Active;
        let drops_initial = form_one_active
            && tense == StemTense::Present
            && form.pattern().is_some_and(|p| drops_initial_waw(&radicals, p));
        let glide_after_fatha = if form_one_active && tense == StemTense::Past && radicals[2] == WAW
        {
            WAW
        } else {
            YA
        };

        Self {
            tense,
            stem: Word::new(stem),
            prefix_mark,
            weakness,
            hollow: hollow_vowels(form, voice, tense).filter(|_| weakness.hollow),
            glide_after_fatha,
            drops_initial,
        }
    }

    /// Whether the jussive shortens a long vowel before the final radical
    /// (يَقُولُ → يَقُلْ).
    pub(crate) fn apocopates(&self) -> bool {
        self.hollow.is_some()
    }

    pub(crate) fn inflect(&self, pronoun: PronounId) -> Word {
        let suffix = match self.tense {
            StemTense::Past => past_suffix(pronoun),
            StemTense::Present => present_suffix(pronoun),
        };
        let mut word = Word::default();
        if self.tense == StemTense::Present {
            word.push(Cell::affix(present_prefix(pronoun), self.prefix_mark));
        }
        word.extend(self.stem.cells());
        if let Some(last) = word.final_radical() {
            word[last].mark = suffix.final_mark;
        }
        word.extend(&suffix.cells);
        self.readjust(&mut word, suffix.ending);
        word
    }

    fn readjust(&self, word: &mut Word, ending: Ending) {
        if self.drops_initial {
            if let Some(first) = word.radical(0) {
                word.remove(first);
            }
        }
        if self.weakness.assimilated {
            harmonize_initial_glide(word);
        }
        if let Some(vowels) = self.hollow {
            contract_hollow(word, vowels);
        }
        if self.weakness.defective {
            resolve_defective(word, ending, self.glide_after_fatha);
        }
        resolve_gemination(word);
        word.collapse_geminates();
    }
}

fn radical(index: usize, radicals: &[char], mark: Mark) -> Cell {
    Cell::radical(index, radicals[index], mark)
}

// Form VIII: the first radical and the infixed ت assimilate to each other.
fn form_eight_onset(c: &[char]) -> (Cell, Cell) {
    let infix = match c[0] {
        SAD | DAD | TAH | ZAH => TAH,
        DAL | THAL | ZAY => DAL,
        _ => TA,
    };
    let first = match c {
        [WAW | YA, ..] | [HAMZA, KHAH, THAL] => TA,
        [first, ..] => *first,
        [] => TA,
    };
    (Cell::radical(0, first, Sukoon), Cell::affix(infix, Fatha))
}

fn active_past_stem(form: Form, c: &[char]) -> Vec<Cell> {
    let r = |i: usize, mark: Mark| radical(i, c, mark);
    let last = r(2, Bare);
    match form {
        Form::I(pattern) => vec![r(0, Fatha), r(1, Mark::of(pattern.past_vowel())), last],
        Form::II => vec![r(0, Fatha), r(1, Fatha).doubled(), last],
        Form::III => vec![r(0, Fatha), Cell::long(ALIF), r(1, Fatha), last],
        Form::IV => vec![Cell::affix(HAMZA, Fatha), r(0, Sukoon), r(1, Fatha), last],
        Form::V => vec![Cell::affix(TA, Fatha), r(0, Fatha), r(1, Fatha).doubled(), last],
        Form::VI => vec![
            Cell::affix(TA, Fatha),
            r(0, Fatha),
            Cell::long(ALIF),
            r(1, Fatha),
            last,
        ],
        Form::VII => vec![
            Cell::affix(ALIF, Kasra),
            Cell::affix(NOON, Sukoon),
            r(0, Fatha),
            r(1, Fatha),
            last,
        ],
        Form::VIII => {
            let (first, infix) = form_eight_onset(c);
            vec![Cell::affix(ALIF, Kasra), first, infix, r(1, Fatha), last]
        }
        Form::IX => vec![Cell::affix(ALIF, Kasra), r(0, Sukoon), r(1, Fatha), r(2, Fatha), last],
        Form::X => vec![
            Cell::affix(ALIF, Kasra),
            Cell::affix(SEEN, Sukoon),
            Cell::affix(TA, Fatha),
            r(0, Sukoon),
            r(1, Fatha),
            last,
        ],
    }
}

fn active_present_stem(form: Form, c: &[char]) -> Vec<Cell> {
    let r = |i: usize, mark: Mark| radical(i, c, mark);
    let last = r(2, Bare);
    match form {
        Form::I(pattern) => vec![r(0, Sukoon), r(1, Mark::of(pattern.present_vowel())), last],
        Form::II => vec![r(0, Fatha), r(1, Kasra).doubled(), last],
        Form::III => vec![r(0, Fatha), Cell::long(ALIF), r(1, Kasra), last],
        Form::IV => vec![r(0, Sukoon), r(1, Kasra), last],
        Form::V => vec![Cell::affix(TA, Fatha), r(0, Fatha), r(1, Fatha).doubled(), last],
        Form::VI => vec![Cell::affix(TA, Fatha), r(0, Fatha), Cell::long(ALIF), r(1, Fatha), last],
        Form::VII => vec![Cell::affix(NOON, Sukoon), r(0, Fatha), r(1, Kasra), last],
        Form::VIII => {
            let (first, infix) = form_eight_onset(c);
            vec![first, infix, r(1, Kasra), last]
        }
        Form::IX => vec![r(0, Sukoon), r(1, Fatha), r(2, Kasra), last],
        Form::X => vec![
            Cell::affix(SEEN, Sukoon),
            Cell::affix(TA, Fatha),
            r(0, Sukoon),
            r(1, Kasra),
            last,
        ],
    }
}

// فَعْلَلَ, extended by one fatha-marked radical per extra letter.
fn quadriliteral_past(c: &[char]) -> Vec<Cell> {
    let last = c.len() - 1;
    (0..=last)
        .map(|i| match i {
            1 => radical(i, c, Sukoon),
            i if i == last => radical(i, c, Bare),
            _ => radical(i, c, Fatha),
        })
        .collect()
}

// يُفَعْلِلُ
fn quadriliteral_present(c: &[char]) -> Vec<Cell> {
    let last = c.len() - 1;
    (0..=last)
        .map(|i| match i {
            0 => radical(i, c, Fatha),
            1 => radical(i, c, Sukoon),
            i if i == last => radical(i, c, Bare),
            i if i + 1 == last => radical(i, c, Kasra),
            _ => radical(i, c, Fatha),
        })
        .collect()
}

fn passivize(stem: &mut [Cell], tense: StemTense) {
    let Some(last) = stem.iter().rposition(Cell::is_radical) else {
        return;
    };
    match tense {
        // فُعِلَ: damma throughout, kasra before the final radical.
        StemTense::Past => {
            for (i, cell) in stem[..last].iter_mut().enumerate() {
                if i + 1 == last {
                    cell.mark = Kasra;
                } else if cell.is_long_vowel() && cell.base == ALIF {
                    cell.base = WAW;
                } else if matches!(cell.mark, Fatha | Kasra) {
                    cell.mark = Damma;
                }
            }
        }
        // يُفْعَلُ: the prefix takes damma separately.
        StemTense::Present => {
            if last > 0 {
                stem[last - 1].mark = Fatha;
            }
        }
    }
}

// A silent initial glide after a vowel merges into it (يُوجِدُ, مُوقِن).
fn harmonize_initial_glide(word: &mut Word) {
    let Some(first) = word.radical(0).filter(|&i| i > 0) else {
        return;
    };
    let glide = word[first];
    if glide.mark != Sukoon || !matches!(glide.base, WAW | YA) {
        return;
    }
    match word[first - 1].mark {
        Kasra => word[first] = Cell { base: YA, mark: Bare, ..glide },
        Damma => word[first] = Cell { base: WAW, mark: Bare, ..glide },
        _ => {}
    }
}

fn contract_hollow(word: &mut Word, vowels: HollowVowels) {
    let (Some(middle), Some(last)) = (word.radical(1), word.final_radical()) else {
        return;
    };
    if middle == 0 || middle + 1 != last {
        return;
    }
    if word[last].mark == Sukoon {
        word[middle - 1].mark = Mark::of(vowels.short);
        word.remove(middle);
    } else {
        word[middle - 1].mark = Mark::of(vowels.long);
        word[middle] = Cell::radical(1, vowels.long.long_letter(), Bare);
    }
}

fn resolve_defective(word: &mut Word, ending: Ending, glide_after_fatha: char) {
    let Some(last) = word.final_radical().filter(|&i| i > 0) else {
        return;
    };
    let before = last - 1;
    let prev = word[before].mark.vowel().unwrap_or(ShortVowel::A);
    let glide = |vowel: ShortVowel| match vowel {
        ShortVowel::A => glide_after_fatha,
        ShortVowel::I => YA,
        ShortVowel::U => WAW,
    };
    let final_alif = if glide_after_fatha == WAW { ALIF } else { ALIF_MAQSURA };
    let own = word[last].mark;
    let (base, mark) = match ending {
        Ending::Bare => match (own, prev) {
            (Fatha, ShortVowel::A) => (final_alif, Bare),
            (Fatha, vowel) => (glide(vowel), Fatha),
            (_, ShortVowel::A) => (ALIF_MAQSURA, Bare),
            (_, vowel) => (glide(vowel), Bare),
        },
        Ending::Taa if prev == ShortVowel::A => {
            word.remove(last);
            return;
        }
        Ending::Taa | Ending::Alif => (glide(prev), Fatha),
        Ending::Consonant if prev == ShortVowel::A => (glide_after_fatha, Sukoon),
        Ending::Consonant => (glide(prev), Bare),
        Ending::PluralWaw => {
            word.remove(last);
            if prev != ShortVowel::A {
                word[before].mark = Damma;
            }
            return;
        }
        Ending::FemYaa => {
            word.remove(last);
            if prev == ShortVowel::A {
                word[last].mark = Sukoon;
            } else {
                word[before].mark = Kasra;
            }
            return;
        }
    };
    word[last].base = base;
    word[last].mark = mark;
}

// مَدَدَ → مَدَّ, يَمْدُدُ → يَمُدُّ: only when the final radical is vowelled.
fn resolve_gemination(word: &mut Word) {
    let Some(last) = word.final_radical().filter(|&i| i > 0) else {
        return;
    };
    let penult = last - 1;
    let (doubled, final_radical) = (word[penult], word[last]);
    let geminate = doubled.is_radical()
        && doubled.base == final_radical.base
        && !doubled.shadda
        && !matches!(final_radical.base, ALIF | WAW | YA | ALIF_MAQSURA)
        && final_radical.mark.is_vowel();
    if !geminate {
        return;
    }
    if penult > 0 && word[penult - 1].mark == Sukoon {
        word[penult - 1].mark = doubled.mark;
    }
    word[penult].mark = Sukoon;
}

pub(crate) fn is_initial_radical(cell: &Cell) -> bool {
    cell.role == Role::Radical(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PassiveVoice;
    use unicode_normalization::UnicodeNormalization;

    fn verb(root: &str, form: u8, pattern: Option<&str>) -> Verb {
        Verb::new(root, form, pattern, PassiveVoice::Full).unwrap()
    }

    fn ar(s: &str) -> String {
        s.nfc().collect()
    }

    fn past(v: &Verb, p: PronounId) -> String {
        Inflector::past(v, Voice::Active).inflect(p).render()
    }

    fn present(v: &Verb, p: PronounId) -> String {
        Inflector::present(v, Voice::Active).inflect(p).render()
    }

    #[test]
    fn weakness_follows_root_class() {
        let w = |root: &str| Weakness::of(&crate::core::root::analyze_root(root).unwrap());
        assert!(w("قال").hollow);
        assert!(w("دعا").defective && !w("دعا").hollow);
        assert!(w("وقف").assimilated);
        let lafif = w("وقي");
        assert!(lafif.assimilated && lafif.defective && !lafif.hollow);
        assert_eq!(w("كتب"), Weakness::default());
    }

    #[test]
    fn resolves_dictionary_spellings() {
        assert_eq!(underlying_radicals(&verb("قال", 1, Some("fa3ala-yaf3ulu"))), vec!['ق', WAW, 'ل']);
        assert_eq!(underlying_radicals(&verb("باع", 1, Some("fa3ala-yaf3ilu"))), vec!['ب', YA, 'ع']);
        assert_eq!(underlying_radicals(&verb("رمى", 1, Some("fa3ala-yaf3ilu"))), vec!['ر', 'م', YA]);
        assert_eq!(underlying_radicals(&verb("سأل", 1, Some("fa3ala-yaf3alu")))[1], HAMZA);
    }

    #[test]
    fn strong_past_and_present() {
        let v = verb("كتب", 1, Some("fa3ala-yaf3ulu"));
        assert_eq!(past(&v, PronounId::ThirdMasculineSingular), ar("كَتَبَ"));
        assert_eq!(past(&v, PronounId::SecondFemininePlural), ar("كَتَبْتُنَّ"));
        assert_eq!(present(&v, PronounId::FirstSingular), ar("أَكْتُبُ"));
        assert_eq!(present(&v, PronounId::ThirdMasculinePlural), ar("يَكْتُبُوْنَ"));
    }

    #[test]
    fn final_radical_merges_with_matching_suffix() {
        let v = verb("سكت", 1, Some("fa3ala-yaf3ulu"));
        assert_eq!(past(&v, PronounId::FirstSingular), ar("سَكَتُّ"));
    }

    #[test]
    fn form_eight_assimilation() {
        assert_eq!(past(&verb("وصل", 8, None), PronounId::ThirdMasculineSingular), ar("اِتَّصَلَ"));
        assert_eq!(past(&verb("صبر", 8, None), PronounId::ThirdMasculineSingular), ar("اِصْطَبَرَ"));
        assert_eq!(past(&verb("زحم", 8, None), PronounId::ThirdMasculineSingular), ar("اِزْدَحَمَ"));
    }

    #[test]
    fn ra_hamza_ya_present() {
        let v = verb("رأى", 1, Some("fa3ala-yaf3alu"));
        assert_eq!(present(&v, PronounId::ThirdMasculineSingular), ar("يَرَى"));
        assert_eq!(past(&v, PronounId::ThirdMasculineSingular), ar("رَأَى"));
    }

    #[test]
    fn lexical_waw_dropping_presents() {
        let v = verb("وسع", 1, Some("fa3ila-yaf3alu"));
        assert_eq!(present(&v, PronounId::ThirdMasculineSingular), ar("يَسَعُ"));
        let v = verb("وطئ", 1, Some("fa3ila-yaf3alu"));
        assert_eq!(present(&v, PronounId::ThirdMasculineSingular), ar("يَطَأُ"));
        let v = verb("وجل", 1, Some("fa3ila-yaf3alu"));
        assert_eq!(present(&v, PronounId::ThirdMasculineSingular), ar("يَوْجَلُ"));
        assert!(!drops_initial_waw(&['ك', 'ت', 'ب'], FormPattern::FaAlaYafIlu));
    }

    #[test]
    fn quadriliteral_stems() {
        let v = verb("دحرج", 1, Some("fa3ala-yaf3ulu"));
        assert_eq!(past(&v, PronounId::ThirdMasculineSingular), ar("دَحْرَجَ"));
        assert_eq!(present(&v, PronounId::ThirdMasculineSingular), ar("يُدَحْرِجُ"));
    }
}
