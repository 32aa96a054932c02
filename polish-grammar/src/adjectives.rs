use crate::{Case, Gender, GrammarError, chop_suffix};

/// Adjectives are classified by the last letter of their masculine nominative form.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
enum AdjectiveClass {
    /// `mały`, `kolorowy`
    Hard,
    /// `tani`, `drogi`
    Soft,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Adjective {
    word: String,
    translation: String,
    class: AdjectiveClass,
}

impl Adjective {
    /// Builds an adjective from its masculine nominative form, which must end in `y` or `i`.
    pub fn new(
        word: impl Into<String>,
        translation: impl Into<String>,
    ) -> Result<Self, GrammarError> {
        let word = word.into();
        let class = if word.ends_with('y') {
            AdjectiveClass::Hard
        } else if word.ends_with('i') {
            AdjectiveClass::Soft
        } else {
            return Err(GrammarError::UnrecognizedWordShape {
                word,
                expected: "a masculine adjective ending in `y` or `i`",
            });
        };

        Ok(Self {
            word,
            translation: translation.into(),
            class,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// The form agreeing with a noun of `gender` in `case`.
    pub fn render(&self, gender: Gender, case: Case) -> String {
        let stem = match self.class {
            AdjectiveClass::Hard => chop_suffix(&self.word, "y"),
            AdjectiveClass::Soft => chop_suffix(&self.word, "i"),
        };
        format!("{stem}{}", suffix(self.class, gender, case))
    }
}

// Masculine accusative ignores animacy: `małego` is used for every masculine noun.
fn suffix(class: AdjectiveClass, gender: Gender, case: Case) -> &'static str {
    use AdjectiveClass::{Hard, Soft};

    match (case, gender, class) {
        (Case::Nominative, Gender::Masculine, Hard) => "y",
        (Case::Nominative, Gender::Masculine, Soft) => "i",
        (Case::Nominative, Gender::Feminine, _) => "a",
        (Case::Nominative | Case::Accusative, Gender::Neuter, Hard) => "e",
        (Case::Nominative | Case::Accusative, Gender::Neuter, Soft) => "ie",

        (Case::Accusative, Gender::Feminine, _) => "ą",
        (Case::Accusative | Case::Genitive, Gender::Masculine, Hard) => "ego",
        (Case::Accusative | Case::Genitive, Gender::Masculine, Soft) => "iego",

        (Case::Genitive, Gender::Neuter, Hard) => "ego",
        (Case::Genitive, Gender::Neuter, Soft) => "iego",
        (Case::Genitive, Gender::Feminine, Hard) => "ej",
        (Case::Genitive, Gender::Feminine, Soft) => "iej",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feminine_nominative() {
        let small = Adjective::new("mały", "small").unwrap();
        assert_eq!(small.render(Gender::Feminine, Case::Nominative), "mała");
    }

    #[test]
    fn test_hard_table() {
        let small = Adjective::new("mały", "small").unwrap();
        let expected = [
            (Case::Nominative, Gender::Masculine, "mały"),
            (Case::Nominative, Gender::Neuter, "małe"),
            (Case::Accusative, Gender::Masculine, "małego"),
            (Case::Accusative, Gender::Feminine, "małą"),
            (Case::Accusative, Gender::Neuter, "małe"),
            (Case::Genitive, Gender::Masculine, "małego"),
            (Case::Genitive, Gender::Feminine, "małej"),
            (Case::Genitive, Gender::Neuter, "małego"),
        ];
        for (case, gender, form) in expected {
            assert_eq!(small.render(gender, case), form, "{gender} {case}");
        }
    }

    #[test]
    fn test_soft_table() {
        let expensive = Adjective::new("drogi", "expensive").unwrap();
        assert_eq!(expensive.render(Gender::Masculine, Case::Nominative), "drogi");
        assert_eq!(expensive.render(Gender::Feminine, Case::Nominative), "droga");
        assert_eq!(expensive.render(Gender::Neuter, Case::Nominative), "drogie");
        assert_eq!(expensive.render(Gender::Masculine, Case::Accusative), "drogiego");
        assert_eq!(expensive.render(Gender::Feminine, Case::Accusative), "drogą");
        assert_eq!(expensive.render(Gender::Neuter, Case::Genitive), "drogiego");
        assert_eq!(expensive.render(Gender::Feminine, Case::Genitive), "drogiej");
    }

    #[test]
    fn test_unrecognized_ending_is_rejected() {
        for word in ["zielona", "dobre", "xyz", ""] {
            let err = Adjective::new(word, "bad").unwrap_err();
            assert!(
                matches!(err, GrammarError::UnrecognizedWordShape { word: ref w, .. } if w == word),
                "{err}"
            );
        }
    }
}
