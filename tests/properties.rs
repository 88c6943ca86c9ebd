use proptest::prelude::*;
use proptest::sample::select;
use sarf::core::active::FUTURE_PREFIX;
use sarf::core::letters::is_diacritic;
use sarf::{
    apply_diacritics_preference, conjugate, conjugate_future, conjugate_imperative,
    conjugate_passive_future, conjugate_passive_present_mood, conjugate_present_mood, Conjugation,
    DiacriticsPreference, Mood, PassiveVoice, Person, PronounId, Tense, Verb, Voice,
};
use unicode_normalization::is_nfc;

const ROOTS: &[(&str, &str)] = &[
    ("كتب", "fa3ala-yaf3ulu"),
    ("ضرب", "fa3ala-yaf3ilu"),
    ("فتح", "fa3ala-yaf3alu"),
    ("علم", "fa3ila-yaf3alu"),
    ("كرم", "fa3ula-yaf3ulu"),
    ("قال", "fa3ala-yaf3ulu"),
    ("باع", "fa3ala-yaf3ilu"),
    ("نام", "fa3ila-yaf3alu"),
    ("دعا", "fa3ala-yaf3ulu"),
    ("رمى", "fa3ala-yaf3ilu"),
    ("نسي", "fa3ila-yaf3alu"),
    ("وقف", "fa3ala-yaf3ilu"),
    ("وقي", "fa3ala-yaf3ilu"),
    ("مدد", "fa3ala-yaf3ulu"),
    ("أكل", "fa3ala-yaf3ulu"),
    ("سأل", "fa3ala-yaf3alu"),
    ("قرأ", "fa3ala-yaf3alu"),
    ("جاء", "fa3ala-yaf3ilu"),
    ("أتى", "fa3ala-yaf3ilu"),
    ("حمر", "fa3ila-yaf3alu"),
    ("ظمأ", "fa3ila-yaf3alu"),
    ("بدأ", "fa3ala-yaf3alu"),
    ("نشأ", "fa3ala-yaf3alu"),
    ("هنأ", "fa3ala-yaf3alu"),
    ("أخذ", "fa3ala-yaf3ulu"),
    ("وسع", "fa3ila-yaf3alu"),
];

fn any_verb() -> impl Strategy<Value = Verb> {
    (select(ROOTS), 1u8..=10).prop_map(|((root, pattern), form)| {
        let pattern = (form == 1).then_some(pattern);
        Verb::new(root, form, pattern, PassiveVoice::Full).unwrap()
    })
}

fn any_pronoun() -> impl Strategy<Value = PronounId> {
    select(PronounId::ALL.to_vec())
}

fn any_text() -> impl Strategy<Value = String> {
    (any_verb(), any_pronoun(), select(vec![Mood::Indicative, Mood::Subjunctive, Mood::Jussive]))
        .prop_map(|(verb, pronoun, mood)| conjugate_present_mood(&verb, mood)[pronoun].to_string())
}

fn marks(text: &str) -> usize {
    text.chars().filter(|c| is_diacritic(*c)).count()
}

const FATHA: char = '\u{064e}';
const DAMMA: char = '\u{064f}';
const KASRA: char = '\u{0650}';
const SHADDA: char = '\u{0651}';
const SUKOON: char = '\u{0652}';

// Short vowels followed by their own long letter, which carries no vowel of
// its own.
fn predictable_vowels(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    (0..chars.len())
        .filter(|&i| {
            let long = matches!(
                (chars[i], chars.get(i + 1)),
                (DAMMA, Some('\u{0648}'))
                    | (KASRA, Some('\u{064a}'))
                    | (FATHA, Some('\u{0627}' | '\u{0649}'))
            );
            long && !matches!(chars.get(i + 2), Some(&(FATHA | DAMMA | KASRA | SHADDA)))
        })
        .count()
}

// Every base letter carries at most one vowel or sukoon and at most one shadda.
fn marks_are_single(text: &str) -> bool {
    let mut vowels = 0;
    let mut shaddas = 0;
    for c in text.chars() {
        match c {
            FATHA | DAMMA | KASRA | SUKOON => vowels += 1,
            SHADDA => shaddas += 1,
            _ if is_diacritic(c) => return false,
            _ => {
                vowels = 0;
                shaddas = 0;
            }
        }
        if vowels > 1 || shaddas > 1 {
            return false;
        }
    }
    true
}

fn all_nfc(conjugation: &Conjugation) -> bool {
    conjugation.iter().all(|(_, form)| is_nfc(form))
}

proptest! {
    #[test]
    fn future_is_prefixed_indicative(verb in any_verb(), pronoun in any_pronoun()) {
        let indicative = conjugate_present_mood(&verb, Mood::Indicative);
        let future = conjugate_future(&verb);
        prop_assert_eq!(
            future[pronoun].to_string(),
            format!("{FUTURE_PREFIX}{}", &indicative[pronoun])
        );

        let passive = conjugate_passive_present_mood(&verb, Mood::Indicative);
        let passive_future = conjugate_passive_future(&verb);
        prop_assert_eq!(
            passive_future[pronoun].to_string(),
            format!("{FUTURE_PREFIX}{}", &passive[pronoun])
        );
    }

    #[test]
    fn imperative_only_has_second_person(verb in any_verb()) {
        let imperative = conjugate_imperative(&verb);
        for (pronoun, form) in imperative.iter() {
            prop_assert_eq!(pronoun.person() == Person::Second, !form.is_empty(), "{}", pronoun);
        }
    }

    #[test]
    fn every_form_is_nfc(verb in any_verb()) {
        for tense in [
            Tense::Past,
            Tense::Present(Mood::Indicative),
            Tense::Present(Mood::Subjunctive),
            Tense::Present(Mood::Jussive),
            Tense::Future,
            Tense::Imperative,
        ] {
            prop_assert!(all_nfc(&conjugate(&verb, tense, Voice::Active).unwrap()));
            if tense != Tense::Imperative {
                prop_assert!(all_nfc(&conjugate(&verb, tense, Voice::Passive).unwrap()));
            }
        }
    }

    #[test]
    fn no_letter_carries_two_vowels(verb in any_verb()) {
        for tense in [
            Tense::Past,
            Tense::Present(Mood::Indicative),
            Tense::Present(Mood::Subjunctive),
            Tense::Present(Mood::Jussive),
            Tense::Future,
            Tense::Imperative,
        ] {
            for voice in [Voice::Active, Voice::Passive] {
                let Ok(conjugation) = conjugate(&verb, tense, voice) else {
                    continue;
                };
                for (pronoun, form) in conjugation.iter() {
                    prop_assert!(
                        marks_are_single(form),
                        "{} {:?} {:?}: {}",
                        pronoun,
                        tense,
                        voice,
                        form
                    );
                }
            }
        }
    }

    #[test]
    fn diacritics_preferences_are_ordered(text in any_text()) {
        let all = apply_diacritics_preference(&text, DiacriticsPreference::All);
        let none = apply_diacritics_preference(&text, DiacriticsPreference::Bare);
        let some = apply_diacritics_preference(&text, DiacriticsPreference::Partial);
        prop_assert_eq!(&all, &text);
        prop_assert_eq!(marks(&none), 0);
        let predictable = predictable_vowels(&text);
        prop_assert_eq!(marks(&some), marks(&all) - predictable);
        if predictable > 0 {
            prop_assert!(marks(&some) < marks(&all));
        }
        if marks(&all) > predictable {
            prop_assert!(marks(&some) > marks(&none));
        }
    }

    #[test]
    fn impersonal_passive_only_fills_third_masculine_singular(
        (root, pattern) in select(ROOTS),
        mood in select(vec![Mood::Indicative, Mood::Subjunctive, Mood::Jussive]),
    ) {
        let verb = Verb::new(root, 1, Some(pattern), PassiveVoice::Impersonal).unwrap();
        for tense in [Tense::Past, Tense::Present(mood), Tense::Future] {
            let conjugation = conjugate(&verb, tense, Voice::Passive).unwrap();
            for (pronoun, form) in conjugation.iter() {
                prop_assert_eq!(pronoun == PronounId::ThirdMasculineSingular, !form.is_empty());
            }
        }
    }
}

#[test]
fn regular_jussive_ends_in_silent_final_radical() {
    let verb = Verb::new("كتب", 1, Some("fa3ala-yaf3ulu"), PassiveVoice::Full).unwrap();
    let jussive = conjugate_present_mood(&verb, Mood::Jussive);
    assert!(jussive[PronounId::ThirdMasculineSingular].ends_with("\u{0628}\u{0652}"));
    let imperative = conjugate_imperative(&verb);
    assert!(imperative[PronounId::SecondMasculineSingular].ends_with("\u{0628}\u{0652}"));
}
