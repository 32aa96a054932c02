use crate::{GrammarError, PersonClass, PersonClassMap, chop_suffix};

/// Present-tense conjugation patterns, each named after a model verb.
#[derive(
    Clone, Copy, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum Paradigm {
    /// czytać: czytam, czytasz, czyta
    Czytac,
    /// pisać: piszę, piszesz, pisze
    Pisac,
    /// mówić: mówię, mówisz, mówi
    Mowic,
    /// uczyć: uczę, uczysz, uczy
    Uczyc,
}

const CZYTAC_SUFFIXES: PersonClassMap<&str> = PersonClassMap {
    first_singular: "am",
    second_singular: "asz",
    second_plural: "acie",
    first_plural: "amy",
    third_plural_masculine: "ają",
    third_singular: "a",
};

const PISAC_SUFFIXES: PersonClassMap<&str> = PersonClassMap {
    first_singular: "ę",
    second_singular: "esz",
    second_plural: "ecie",
    first_plural: "emy",
    third_plural_masculine: "ą",
    third_singular: "e",
};

const MOWIC_SUFFIXES: PersonClassMap<&str> = PersonClassMap {
    first_singular: "ię",
    second_singular: "isz",
    second_plural: "icie",
    first_plural: "imy",
    third_plural_masculine: "ią",
    third_singular: "i",
};

const UCZYC_SUFFIXES: PersonClassMap<&str> = PersonClassMap {
    first_singular: "ę",
    second_singular: "ysz",
    second_plural: "ycie",
    first_plural: "ymy",
    third_plural_masculine: "ą",
    third_singular: "y",
};

impl Paradigm {
    /// The infinitive ending every verb of this paradigm must have.
    pub fn infinitive_ending(self) -> &'static str {
        match self {
            Paradigm::Czytac | Paradigm::Pisac => "ać",
            Paradigm::Mowic => "ić",
            Paradigm::Uczyc => "yć",
        }
    }

    fn suffixes(self) -> &'static PersonClassMap<&'static str> {
        match self {
            Paradigm::Czytac => &CZYTAC_SUFFIXES,
            Paradigm::Pisac => &PISAC_SUFFIXES,
            Paradigm::Mowic => &MOWIC_SUFFIXES,
            Paradigm::Uczyc => &UCZYC_SUFFIXES,
        }
    }

    fn stem(self, infinitive: &str) -> String {
        let stem = chop_suffix(infinitive, self.infinitive_ending());
        match self {
            // s → sz before every present-tense ending
            Paradigm::Pisac => format!("{stem}z"),
            Paradigm::Czytac | Paradigm::Mowic | Paradigm::Uczyc => stem.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Verb {
    infinitive: String,
    translation: String,
    paradigm: Paradigm,
}

impl Verb {
    /// Fails if the infinitive does not carry the paradigm's ending.
    pub fn new(
        infinitive: impl Into<String>,
        translation: impl Into<String>,
        paradigm: Paradigm,
    ) -> Result<Self, GrammarError> {
        let infinitive = infinitive.into();
        if !infinitive.ends_with(paradigm.infinitive_ending()) {
            return Err(GrammarError::UnrecognizedWordShape {
                word: infinitive,
                expected: match paradigm {
                    Paradigm::Czytac | Paradigm::Pisac => "an infinitive ending in `ać`",
                    Paradigm::Mowic => "an infinitive ending in `ić`",
                    Paradigm::Uczyc => "an infinitive ending in `yć`",
                },
            });
        }

        Ok(Self {
            infinitive,
            translation: translation.into(),
            paradigm,
        })
    }

    pub fn infinitive(&self) -> &str {
        &self.infinitive
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn paradigm(&self) -> Paradigm {
        self.paradigm
    }

    /// The present-tense form for `person_class`, or the infinitive when there is none.
    pub fn render(&self, person_class: Option<PersonClass>) -> String {
        match person_class {
            None => self.infinitive.clone(),
            Some(person_class) => format!(
                "{}{}",
                self.paradigm.stem(&self.infinitive),
                self.paradigm.suffixes().get(&person_class)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_czytac_third_plural() {
        let read = Verb::new("czytać", "read", Paradigm::Czytac).unwrap();
        assert_eq!(read.render(Some(PersonClass::ThirdPluralMasculine)), "czytają");
        assert_eq!(read.render(Some(PersonClass::FirstSingular)), "czytam");
    }

    #[test]
    fn test_infinitive_without_person_class() {
        let speak = Verb::new("mówić", "speak", Paradigm::Mowic).unwrap();
        assert_eq!(speak.render(None), "mówić");
    }

    #[test]
    fn test_full_paradigms() {
        let cases = [
            (
                Verb::new("pisać", "write", Paradigm::Pisac).unwrap(),
                ["piszę", "piszesz", "piszecie", "piszemy", "piszą", "pisze"],
            ),
            (
                Verb::new("mówić", "speak", Paradigm::Mowic).unwrap(),
                ["mówię", "mówisz", "mówicie", "mówimy", "mówią", "mówi"],
            ),
            (
                Verb::new("uczyć", "teach", Paradigm::Uczyc).unwrap(),
                ["uczę", "uczysz", "uczycie", "uczymy", "uczą", "uczy"],
            ),
        ];

        for (verb, forms) in cases {
            for (person_class, form) in PersonClass::ALL.into_iter().zip(forms) {
                assert_eq!(verb.render(Some(person_class)), form, "{person_class}");
            }
        }
    }

    #[test]
    fn test_wrong_ending_is_rejected() {
        let err = Verb::new("mówić", "speak", Paradigm::Czytac).unwrap_err();
        assert_eq!(
            err,
            GrammarError::UnrecognizedWordShape {
                word: "mówić".to_string(),
                expected: "an infinitive ending in `ać`",
            }
        );
    }
}
