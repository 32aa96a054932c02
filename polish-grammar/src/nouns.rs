use crate::{Case, Gender, Nominal, PersonClass, chop_suffix};

/// Declension class of a common noun. The class fixes the gender.
#[derive(
    Clone, Copy, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum NounClass {
    Neuter,
    Feminine,
    MasculineAnimate,
    MasculineInanimate,
    /// Masculine nouns for people that take `-a` in both object cases (`pan` → `pana`).
    MasculinePerson,
}

impl NounClass {
    pub fn gender(self) -> Gender {
        match self {
            NounClass::Neuter => Gender::Neuter,
            NounClass::Feminine => Gender::Feminine,
            NounClass::MasculineAnimate
            | NounClass::MasculineInanimate
            | NounClass::MasculinePerson => Gender::Masculine,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Noun {
    word: String,
    translation: String,
    class: NounClass,
}

impl Noun {
    pub fn new(word: impl Into<String>, translation: impl Into<String>, class: NounClass) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            class,
        }
    }

    /// The dictionary (nominative singular) form.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn class(&self) -> NounClass {
        self.class
    }
}

impl Nominal for Noun {
    fn render(&self, case: Case) -> String {
        let form = inflect(&self.word, self.class, case);
        log::trace!("{} ({:?}) in {case}: {form}", self.word, self.class);
        form
    }

    fn translation(&self) -> String {
        self.translation.clone()
    }

    fn gender(&self) -> Gender {
        self.class.gender()
    }

    fn person_class(&self) -> PersonClass {
        PersonClass::ThirdSingular
    }
}

/// Inflects a dictionary-form noun of the given class into `case`.
pub fn inflect(word: &str, class: NounClass, case: Case) -> String {
    match (class, case) {
        (_, Case::Nominative) => word.to_string(),

        // Borrowed neuters like `muzeum` do not decline in the singular
        (NounClass::Neuter, _) if word.ends_with("um") => word.to_string(),
        (NounClass::Neuter, Case::Accusative) => word.to_string(),
        (NounClass::Neuter, Case::Genitive) => format!("{}a", stem(word)),

        (NounClass::Feminine, Case::Accusative) => {
            let (base, ending) = consonant_accusative(word);
            format!("{base}{ending}")
        }
        (NounClass::Feminine, Case::Genitive) => feminine_genitive(word),

        (NounClass::MasculineAnimate | NounClass::MasculineInanimate, Case::Accusative) => {
            let stripped = strip_diminutive(word);
            match consonant_accusative(&stripped) {
                (_, "") => word.to_string(),
                (base, ending) => masculine_form(base, ending),
            }
        }
        // Masculine nouns in `-a` (`mężczyzna`) take the feminine genitive
        (NounClass::MasculineAnimate | NounClass::MasculineInanimate, Case::Genitive)
            if word.ends_with('a') =>
        {
            feminine_genitive(word)
        }
        (NounClass::MasculineAnimate, Case::Genitive) => {
            masculine_form(&strip_diminutive(word), "a")
        }
        (NounClass::MasculineInanimate, Case::Genitive) => {
            masculine_form(&strip_diminutive(word), "u")
        }

        (NounClass::MasculinePerson, Case::Accusative | Case::Genitive) => {
            masculine_form(word, "a")
        }
    }
}

/// The word with all trailing vowels removed.
fn stem(word: &str) -> &str {
    word.trim_end_matches(|c: char| "aeiouąę".contains(c))
}

/// Drops the mobile `e` that disappears once an ending is added (`pies` → `ps-`).
fn strip_diminutive(word: &str) -> String {
    if let Some(rest) = word.strip_suffix("ek") {
        format!("{rest}k")
    } else if let Some(rest) = word.strip_suffix("ies") {
        format!("{rest}s")
    } else if let Some(rest) = word.strip_suffix("iec") {
        format!("{rest}c")
    } else {
        word.to_string()
    }
}

/// Accusative shared by masculine and feminine nouns, keyed on the final letter.
///
/// Returns the base and the ending to attach. An empty ending means the
/// accusative is the same as the nominative.
fn consonant_accusative(word: &str) -> (&str, &'static str) {
    match word.chars().last() {
        Some('a') => (chop_suffix(word, "a"), "ę"),
        Some('t' | 's' | 'c' | 'k') => (word, "a"),
        Some('ł') => (word, "y"),
        Some('l' | 'g') => (word, ""),
        // Most irregular nouns keep their dictionary form
        _ => (word, ""),
    }
}

/// Attaches an ending to a masculine stem. A final-syllable `ó` opens to `o`
/// once the syllable gains an ending (`stół` → `stołu`, `nóż` → `nożu`).
fn masculine_form(stem: &str, ending: &str) -> String {
    if ending.is_empty() {
        return stem.to_string();
    }
    let last_vowel = stem
        .char_indices()
        .rev()
        .find(|(_, c)| "aeiouyąęó".contains(*c));
    match last_vowel {
        Some((index, 'ó')) => {
            format!("{}o{}{ending}", &stem[..index], &stem[index + 'ó'.len_utf8()..])
        }
        _ => format!("{stem}{ending}"),
    }
}

fn feminine_genitive(word: &str) -> String {
    let stem = stem(word);
    if stem.ends_with(['k', 'g']) {
        format!("{stem}i")
    } else {
        format!("{stem}y")
    }
}
