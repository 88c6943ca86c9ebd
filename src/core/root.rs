// File: src/core/root.rs
use crate::core::letters::{
    is_arabic_letter, is_diacritic, is_hamzated_letter, is_weak_letter, ALIF, ALIF_HAMZA_ABOVE,
};
use crate::error::{ConjugationError, Result};
use std::fmt;
use std::str::FromStr;

pub const MIN_RADICALS: usize = 3;
pub const MAX_RADICALS: usize = 5;

/// The consonantal skeleton of a verb: 3 to 5 radicals, compared by
/// codepoint. Weak radicals may be written with ا or ى as in the dictionary
/// headword (قام, دعا, رمى).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    radicals: Vec<char>,
}

impl Root {
    pub fn new(letters: &str) -> Result<Self> {
        let mut radicals = Vec::with_capacity(MAX_RADICALS);
        for c in letters.chars().filter(|c| !c.is_whitespace() && !is_diacritic(*c)) {
            if !is_arabic_letter(c) {
                return Err(ConjugationError::InvalidRootLetter(c));
            }
            radicals.push(c);
        }
        if !(MIN_RADICALS..=MAX_RADICALS).contains(&radicals.len()) {
            return Err(ConjugationError::InvalidRootLength(radicals.len()));
        }
        // A first radical is never a vowel; a bare alif there is a hamza seat.
        if radicals[0] == ALIF {
            radicals[0] = ALIF_HAMZA_ABOVE;
        }
        Ok(Self { radicals })
    }

    pub fn radicals(&self) -> &[char] {
        &self.radicals
    }

    pub fn len(&self) -> usize {
        self.radicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radicals.is_empty()
    }

    pub fn is_triliteral(&self) -> bool {
        self.radicals.len() == MIN_RADICALS
    }

    pub fn analyze(&self) -> RootAnalysis {
        RootAnalysis::of(self)
    }
}

impl FromStr for Root {
    type Err = ConjugationError;

    fn from_str(s: &str) -> Result<Self> {
        Root::new(s)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.radicals.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Weakness class of a root. Exactly one applies; see [`RootAnalysis::of`]
/// for the order in which overlapping cases are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootClass {
    Strong,
    Hollow,
    Defective,
    DoublyWeak,
    Assimilated,
    Hamzated,
    HamzatedHollow,
    HamzatedDefective,
    HamzatedHollowDefective,
}

impl RootClass {
    pub fn label(self) -> &'static str {
        match self {
            RootClass::Strong => "strong",
            RootClass::Hollow => "hollow",
            RootClass::Defective => "defective",
            RootClass::DoublyWeak => "doubly-weak",
            RootClass::Assimilated => "assimilated",
            RootClass::Hamzated => "hamzated",
            RootClass::HamzatedHollow => "hamzated-hollow",
            RootClass::HamzatedDefective => "hamzated-defective",
            RootClass::HamzatedHollowDefective => "hamzated-hollow-defective",
        }
    }
}

impl fmt::Display for RootClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived facts about a root; recomputed on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootAnalysis {
    pub class: RootClass,
    pub weak_positions: Vec<usize>,
    pub hamza_positions: Vec<usize>,
    /// Second and final radicals are the same sound letter (مدّ, حجّ).
    pub geminate: bool,
}

impl RootAnalysis {
    pub fn of(root: &Root) -> Self {
        let radicals = root.radicals();
        let last = radicals.len() - 1;
        let positions = |pred: fn(char) -> bool| -> Vec<usize> {
            radicals
                .iter()
                .enumerate()
                .filter(|(_, c)| pred(**c))
                .map(|(i, _)| i)
                .collect()
        };
        let weak_positions = positions(is_weak_letter);
        let hamza_positions = positions(is_hamzated_letter);

        let middle_weak = weak_positions.iter().any(|&p| p > 0 && p < last);
        let final_weak = weak_positions.contains(&last);
        let hamzated = !hamza_positions.is_empty();

        let class = if weak_positions.len() >= 2 && !hamzated {
            RootClass::DoublyWeak
        } else if weak_positions.contains(&0) {
            RootClass::Assimilated
        } else if hamzated {
            match (middle_weak, final_weak) {
                (true, true) => RootClass::HamzatedHollowDefective,
                (true, false) => RootClass::HamzatedHollow,
                (false, true) => RootClass::HamzatedDefective,
                (false, false) => RootClass::Hamzated,
            }
        } else if middle_weak {
            RootClass::Hollow
        } else if final_weak {
            RootClass::Defective
        } else {
            RootClass::Strong
        };

        let geminate = root.is_triliteral()
            && radicals[1] == radicals[2]
            && !is_weak_letter(radicals[2]);

        Self { class, weak_positions, hamza_positions, geminate }
    }
}

/// Parses and classifies a root in one step.
pub fn analyze_root(root: &str) -> Result<RootAnalysis> {
    Ok(Root::new(root)?.analyze())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_and_foreign_roots() {
        assert_eq!(Root::new("كت"), Err(ConjugationError::InvalidRootLength(2)));
        assert_eq!(Root::new("كتبكتب"), Err(ConjugationError::InvalidRootLength(6)));
        assert_eq!(Root::new("ktb"), Err(ConjugationError::InvalidRootLetter('k')));
    }

    #[test]
    fn ignores_marks_and_spacing() {
        assert_eq!(Root::new("كَ تَ بَ").unwrap().to_string(), "كتب");
    }

    #[test]
    fn leading_alif_reads_as_hamza() {
        let root = Root::new("اكل").unwrap();
        assert_eq!(root.to_string(), "أكل");
        assert_eq!(root.analyze().class, RootClass::Hamzated);
    }

    #[test]
    fn flags_geminates() {
        assert!(analyze_root("مدد").unwrap().geminate);
        assert!(!analyze_root("حيي").unwrap().geminate);
        assert!(!analyze_root("كتب").unwrap().geminate);
    }

    #[test]
    fn hamza_with_middle_weak() {
        let analysis = analyze_root("جاء").unwrap();
        assert_eq!(analysis.class, RootClass::HamzatedHollow);
        assert_eq!(analysis.weak_positions, vec![1]);
        assert_eq!(analysis.hamza_positions, vec![2]);
    }

    #[test]
    fn hamza_with_final_weak() {
        assert_eq!(analyze_root("أتى").unwrap().class, RootClass::HamzatedDefective);
    }

    #[test]
    fn quadriliteral_is_strong() {
        assert_eq!(analyze_root("دحرج").unwrap().class, RootClass::Strong);
    }
}
