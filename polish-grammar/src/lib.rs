//! Random generation of inflected Polish phrases and sentences with English glosses.
//!
//! Words are stored in dictionary form and inflected on demand: nouns by case,
//! adjectives by gender and case, verbs by person/number class. Phrases thread
//! case and agreement through their parts, and every rendered phrase has a
//! parallel English translation.

pub mod adjectives;
pub mod error;
pub mod nouns;
pub mod options;
pub mod phrases;
pub mod possessive;
pub mod pronouns;
pub mod sentence;
pub mod verbs;
pub mod vocabulary;

use enumap::EnuMap;
use rand::prelude::IndexedRandom;

pub use adjectives::Adjective;
pub use error::GrammarError;
pub use nouns::{Noun, NounClass};
pub use options::GenerationOptions;
pub use phrases::{NounPhrase, NounPhraseKind, StandardNounPhrase};
pub use possessive::{Possessive, Possessor};
pub use pronouns::{Name, Pronoun};
pub use sentence::{Phrase, Sentence, SentenceShape};
pub use verbs::{Paradigm, Verb};
pub use vocabulary::Vocabulary;

#[derive(
    Clone,
    Copy,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    EnuMap,
)]
pub enum Gender {
    #[serde(rename = "masc")]
    Masculine,
    #[serde(rename = "fem")]
    Feminine,
    #[serde(rename = "neut")]
    Neuter,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
        };
        write!(f, "{word}")
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    EnuMap,
)]
pub enum Case {
    #[serde(rename = "nom")]
    Nominative, // subject
    #[serde(rename = "acc")]
    Accusative, // direct object
    #[serde(rename = "gen")]
    Genitive, // possession, "of"
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Case::Nominative => "nominative",
            Case::Accusative => "accusative",
            Case::Genitive => "genitive",
        };
        write!(f, "{word}")
    }
}

/// The agreement class of a subject, which picks the verb suffix.
///
/// Named after the pronoun that heads each class. Third person singular
/// covers `on`, `ona` and `ono`; the masculine-group plural covers `oni`
/// and `one`, which share their verb forms in the present tense.
#[derive(
    Clone,
    Copy,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    EnuMap,
)]
pub enum PersonClass {
    #[serde(rename = "ja")]
    FirstSingular,
    #[serde(rename = "ty")]
    SecondSingular,
    #[serde(rename = "wy")]
    SecondPlural,
    #[serde(rename = "my")]
    FirstPlural,
    #[serde(rename = "oni")]
    ThirdPluralMasculine,
    #[serde(rename = "on")]
    ThirdSingular,
}

impl std::fmt::Display for PersonClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pronoun = match self {
            PersonClass::FirstSingular => "ja",
            PersonClass::SecondSingular => "ty",
            PersonClass::SecondPlural => "wy",
            PersonClass::FirstPlural => "my",
            PersonClass::ThirdPluralMasculine => "oni",
            PersonClass::ThirdSingular => "on",
        };
        write!(f, "{pronoun}")
    }
}

/// Anything that can stand where a noun stands: it inflects for case, has a
/// gender and an agreement class, and carries an English gloss.
pub trait Nominal {
    fn render(&self, case: Case) -> String;
    fn translation(&self) -> String;
    fn gender(&self) -> Gender;
    fn person_class(&self) -> PersonClass;
}

/// A generated Polish sentence and its English gloss.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, Eq, PartialEq)]
pub struct SentencePair {
    pub target: String,
    pub native: String,
}

/// Removes `suffix` from the end of `word`, or returns `word` unchanged.
pub fn chop_suffix<'a>(word: &'a str, suffix: &str) -> &'a str {
    word.strip_suffix(suffix).unwrap_or(word)
}

/// Draws one item uniformly from a list that `Vocabulary::new` or an enum's
/// `ALL` guarantees to be non-empty.
pub(crate) fn pick<'a, T>(rng: &mut impl rand::Rng, items: &'a [T]) -> &'a T {
    items.choose(rng).expect("word lists are non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chop_suffix() {
        assert_eq!(chop_suffix("czytać", "ać"), "czyt");
        assert_eq!(chop_suffix("mały", "y"), "mał");
        assert_eq!(chop_suffix("kot", "ek"), "kot");
    }

    #[test]
    fn test_person_class_serializes_as_pronoun() {
        let json = serde_json::to_string(&PersonClass::ThirdPluralMasculine).unwrap();
        assert_eq!(json, "\"oni\"");

        let parsed: Case = serde_json::from_str("\"gen\"").unwrap();
        assert_eq!(parsed, Case::Genitive);
    }

    #[test]
    fn test_pick_draws_every_item() {
        use rand::SeedableRng;

        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(3);
        assert_eq!(*pick(&mut rng, &["tylko"]), "tylko");

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(*pick(&mut rng, &Case::ALL));
        }
        assert_eq!(seen.len(), Case::ALL.len());
    }

    #[test]
    fn test_case_map_is_complete() {
        let forms = CaseMap::from_fn(|case| case.to_string());
        assert_eq!(forms.get(&Case::Accusative), "accusative");
        assert_eq!(Case::ALL.len(), 3);
        assert_eq!(PersonClass::ALL.len(), 6);
    }
}
