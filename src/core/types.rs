// src/core/types.rs
use crate::core::root::Root;
use crate::core::vowels::FormPattern;
use crate::error::{ConjugationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// The derivational template applied to a root. Form I carries its lexical
/// vowel pattern, since nothing else about the root predicts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    I(FormPattern),
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
    X,
}

impl Form {
    pub fn new(number: u8, pattern: Option<FormPattern>) -> Result<Self> {
        Ok(match number {
            1 => Form::I(pattern.ok_or(ConjugationError::MissingFormPattern)?),
            2 => Form::II,
            3 => Form::III,
            4 => Form::IV,
            5 => Form::V,
            6 => Form::VI,
            7 => Form::VII,
            8 => Form::VIII,
            9 => Form::IX,
            10 => Form::X,
            other => return Err(ConjugationError::UnknownForm(other)),
        })
    }

    pub fn number(self) -> u8 {
        match self {
            Form::I(_) => 1,
            Form::II => 2,
            Form::III => 3,
            Form::IV => 4,
            Form::V => 5,
            Form::VI => 6,
            Form::VII => 7,
            Form::VIII => 8,
            Form::IX => 9,
            Form::X => 10,
        }
    }

    pub fn pattern(self) -> Option<FormPattern> {
        match self {
            Form::I(pattern) => Some(pattern),
            _ => None,
        }
    }
}

/// How much of a passive paradigm the verb has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassiveVoice {
    Full,
    /// Only the impersonal third person masculine singular exists.
    Impersonal,
    None,
}

impl FromStr for PassiveVoice {
    type Err = ConjugationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full" => Ok(PassiveVoice::Full),
            "impersonal" => Ok(PassiveVoice::Impersonal),
            "none" => Ok(PassiveVoice::None),
            other => Err(ConjugationError::UnknownPassiveVoice(other.to_string())),
        }
    }
}

/// A lexicon entry. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "VerbRecord", into = "VerbRecord")]
pub struct Verb {
    root: Root,
    form: Form,
    passive_voice: PassiveVoice,
}

impl Verb {
    pub fn new(
        root: &str,
        form: u8,
        form_pattern: Option<&str>,
        passive_voice: PassiveVoice,
    ) -> Result<Self> {
        let pattern = form_pattern.map(str::parse::<FormPattern>).transpose()?;
        Ok(Self::from_parts(
            root.parse()?,
            Form::new(form, pattern)?,
            passive_voice,
        ))
    }

    pub fn from_parts(root: Root, form: Form, passive_voice: PassiveVoice) -> Self {
        Self { root, form, passive_voice }
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn form(&self) -> Form {
        self.form
    }

    pub fn passive_voice(&self) -> PassiveVoice {
        self.passive_voice
    }
}

/// The flat shape a verb takes in lexicon files and in the memo store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerbRecord {
    root: String,
    form: u8,
    #[serde(default)]
    form_pattern: Option<String>,
    passive_voice: PassiveVoice,
}

impl TryFrom<VerbRecord> for Verb {
    type Error = ConjugationError;

    fn try_from(record: VerbRecord) -> Result<Self> {
        Verb::new(
            &record.root,
            record.form,
            record.form_pattern.as_deref(),
            record.passive_voice,
        )
    }
}

impl From<Verb> for VerbRecord {
    fn from(verb: Verb) -> Self {
        VerbRecord {
            root: verb.root.to_string(),
            form: verb.form.number(),
            form_pattern: verb.form.pattern().map(|p| p.token().to_string()),
            passive_voice: verb.passive_voice,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Indicative,
    Subjunctive,
    Jussive,
}

impl FromStr for Mood {
    type Err = ConjugationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "indicative" => Ok(Mood::Indicative),
            "subjunctive" => Ok(Mood::Subjunctive),
            "jussive" => Ok(Mood::Jussive),
            other => Err(ConjugationError::UnknownMood(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Past,
    Present(Mood),
    Future,
    Imperative,
}

impl Tense {
    /// Parses a tense selector; `mood` is read only for the present and
    /// defaults to the indicative there.
    pub fn parse(tense: &str, mood: Option<&str>) -> Result<Self> {
        match tense {
            "past" => Ok(Tense::Past),
            "present" => Ok(Tense::Present(
                mood.map(str::parse::<Mood>)
                    .transpose()?
                    .unwrap_or(Mood::Indicative),
            )),
            "future" => Ok(Tense::Future),
            "imperative" => Ok(Tense::Imperative),
            other => Err(ConjugationError::UnknownTense(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voice {
    Active,
    Passive,
}

impl FromStr for Voice {
    type Err = ConjugationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(Voice::Active),
            "passive" => Ok(Voice::Passive),
            other => Err(ConjugationError::UnknownVoice(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Dual,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
}

/// The thirteen person/number/gender slots of a paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PronounId {
    #[serde(rename = "1s")]
    FirstSingular,
    #[serde(rename = "1p")]
    FirstPlural,
    #[serde(rename = "2ms")]
    SecondMasculineSingular,
    #[serde(rename = "2fs")]
    SecondFeminineSingular,
    #[serde(rename = "2d")]
    SecondDual,
    #[serde(rename = "2mp")]
    SecondMasculinePlural,
    #[serde(rename = "2fp")]
    SecondFemininePlural,
    #[serde(rename = "3ms")]
    ThirdMasculineSingular,
    #[serde(rename = "3fs")]
    ThirdFeminineSingular,
    #[serde(rename = "3dm")]
    ThirdMasculineDual,
    #[serde(rename = "3df")]
    ThirdFeminineDual,
    #[serde(rename = "3mp")]
    ThirdMasculinePlural,
    #[serde(rename = "3fp")]
    ThirdFemininePlural,
}

impl PronounId {
    pub const ALL: [PronounId; 13] = [
        PronounId::FirstSingular,
        PronounId::FirstPlural,
        PronounId::SecondMasculineSingular,
        PronounId::SecondFeminineSingular,
        PronounId::SecondDual,
        PronounId::SecondMasculinePlural,
        PronounId::SecondFemininePlural,
        PronounId::ThirdMasculineSingular,
        PronounId::ThirdFeminineSingular,
        PronounId::ThirdMasculineDual,
        PronounId::ThirdFeminineDual,
        PronounId::ThirdMasculinePlural,
        PronounId::ThirdFemininePlural,
    ];

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            PronounId::FirstSingular => "1s",
            PronounId::FirstPlural => "1p",
            PronounId::SecondMasculineSingular => "2ms",
            PronounId::SecondFeminineSingular => "2fs",
            PronounId::SecondDual => "2d",
            PronounId::SecondMasculinePlural => "2mp",
            PronounId::SecondFemininePlural => "2fp",
            PronounId::ThirdMasculineSingular => "3ms",
            PronounId::ThirdFeminineSingular => "3fs",
            PronounId::ThirdMasculineDual => "3dm",
            PronounId::ThirdFeminineDual => "3df",
            PronounId::ThirdMasculinePlural => "3mp",
            PronounId::ThirdFemininePlural => "3fp",
        }
    }

    pub fn person(self) -> Person {
        match self {
            PronounId::FirstSingular | PronounId::FirstPlural => Person::First,
            PronounId::SecondMasculineSingular
            | PronounId::SecondFeminineSingular
            | PronounId::SecondDual
            | PronounId::SecondMasculinePlural
            | PronounId::SecondFemininePlural => Person::Second,
            _ => Person::Third,
        }
    }

    pub fn number(self) -> Number {
        match self {
            PronounId::FirstSingular
            | PronounId::SecondMasculineSingular
            | PronounId::SecondFeminineSingular
            | PronounId::ThirdMasculineSingular
            | PronounId::ThirdFeminineSingular => Number::Singular,
            PronounId::SecondDual | PronounId::ThirdMasculineDual | PronounId::ThirdFeminineDual => {
                Number::Dual
            }
            _ => Number::Plural,
        }
    }

    /// `None` where the language makes no gender distinction (first person,
    /// second dual).
    pub fn gender(self) -> Option<Gender> {
        match self {
            PronounId::FirstSingular | PronounId::FirstPlural | PronounId::SecondDual => None,
            PronounId::SecondMasculineSingular
            | PronounId::SecondMasculinePlural
            | PronounId::ThirdMasculineSingular
            | PronounId::ThirdMasculineDual
            | PronounId::ThirdMasculinePlural => Some(Gender::Masculine),
            _ => Some(Gender::Feminine),
        }
    }
}

impl fmt::Display for PronounId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PronounId {
    type Err = ConjugationError;

    fn from_str(s: &str) -> Result<Self> {
        let code = match s {
            "2pm" => "2mp",
            "3pm" => "3mp",
            "2pf" => "2fp",
            "3pf" => "3fp",
            other => other,
        };
        PronounId::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| ConjugationError::UnknownPronoun(s.to_string()))
    }
}

/// One surface form per pronoun slot, always all thirteen. Empty strings mark
/// slots that do not exist for the requested tense or voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    forms: [String; 13],
}

impl Conjugation {
    pub fn from_fn(mut f: impl FnMut(PronounId) -> String) -> Self {
        Self { forms: PronounId::ALL.map(&mut f) }
    }

    pub fn get(&self, pronoun: PronounId) -> &str {
        &self.forms[pronoun.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PronounId, &str)> + '_ {
        PronounId::ALL.into_iter().zip(self.forms.iter().map(String::as_str))
    }

    pub fn map(&self, mut f: impl FnMut(PronounId, &str) -> String) -> Self {
        Self::from_fn(|p| f(p, self.get(p)))
    }
}

impl Index<PronounId> for Conjugation {
    type Output = str;

    fn index(&self, pronoun: PronounId) -> &str {
        self.get(pronoun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pronoun_codes_round_trip() {
        for p in PronounId::ALL {
            assert_eq!(p.code().parse::<PronounId>(), Ok(p));
        }
        assert_eq!("3pm".parse::<PronounId>(), Ok(PronounId::ThirdMasculinePlural));
        assert!("4s".parse::<PronounId>().is_err());
    }

    #[test]
    fn pronoun_metadata() {
        assert_eq!(PronounId::SecondDual.gender(), None);
        assert_eq!(PronounId::SecondDual.number(), Number::Dual);
        assert_eq!(PronounId::ThirdFemininePlural.person(), Person::Third);
        assert_eq!(PronounId::ThirdFemininePlural.gender(), Some(Gender::Feminine));
        assert_eq!(PronounId::FirstPlural.gender(), None);
    }

    #[test]
    fn form_one_requires_a_pattern() {
        assert_eq!(Form::new(1, None), Err(ConjugationError::MissingFormPattern));
        assert_eq!(Form::new(11, None), Err(ConjugationError::UnknownForm(11)));
        assert_eq!(Form::new(7, None).map(Form::number), Ok(7));
    }

    #[test]
    fn tense_parsing() {
        assert_eq!(Tense::parse("present", None), Ok(Tense::Present(Mood::Indicative)));
        assert_eq!(
            Tense::parse("present", Some("jussive")),
            Ok(Tense::Present(Mood::Jussive))
        );
        assert_eq!(
            Tense::parse("present", Some("energetic")),
            Err(ConjugationError::UnknownMood("energetic".into()))
        );
        assert!(Tense::parse("pluperfect", None).is_err());
    }

    #[test]
    fn verb_record_round_trips_through_json() {
        let json = r#"{"root":"كتب","form":1,"formPattern":"fa3ala-yaf3ulu","passiveVoice":"full"}"#;
        let verb: Verb = serde_json::from_str(json).unwrap();
        assert_eq!(verb.form().number(), 1);
        let back = serde_json::to_string(&verb).unwrap();
        assert_eq!(serde_json::from_str::<Verb>(&back).unwrap(), verb);
    }

    #[test]
    fn conjugation_indexes_by_pronoun() {
        let c = Conjugation::from_fn(|p| p.code().to_string());
        assert_eq!(&c[PronounId::ThirdFeminineDual], "3df");
        assert_eq!(c.iter().count(), 13);
    }
}
