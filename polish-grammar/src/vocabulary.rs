use crate::{
    Adjective, CaseMap, Gender, GrammarError, Name, Noun, NounClass, Paradigm, PersonClass,
    Pronoun, Verb,
};

/// The closed word lists generation draws from. Every list is non-empty.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    nouns: Vec<Noun>,
    adjectives: Vec<Adjective>,
    verbs: Vec<Verb>,
    pronouns: Vec<Pronoun>,
    names: Vec<Name>,
}

impl Vocabulary {
    pub fn new(
        nouns: Vec<Noun>,
        adjectives: Vec<Adjective>,
        verbs: Vec<Verb>,
        pronouns: Vec<Pronoun>,
        names: Vec<Name>,
    ) -> Result<Self, GrammarError> {
        let lists = [
            ("nouns", nouns.is_empty()),
            ("adjectives", adjectives.is_empty()),
            ("verbs", verbs.is_empty()),
            ("pronouns", pronouns.is_empty()),
            ("names", names.is_empty()),
        ];
        if let Some((category, _)) = lists.into_iter().find(|(_, empty)| *empty) {
            return Err(GrammarError::EmptyVocabulary { category });
        }

        Ok(Self {
            nouns,
            adjectives,
            verbs,
            pronouns,
            names,
        })
    }

    /// The built-in Polish word lists.
    pub fn polish() -> Result<Self, GrammarError> {
        let vocabulary = Self::new(nouns(), adjectives()?, verbs()?, pronouns(), names())?;
        log::debug!(
            "loaded vocabulary: {} nouns, {} adjectives, {} verbs, {} pronouns, {} names",
            vocabulary.nouns.len(),
            vocabulary.adjectives.len(),
            vocabulary.verbs.len(),
            vocabulary.pronouns.len(),
            vocabulary.names.len(),
        );
        Ok(vocabulary)
    }

    pub fn nouns(&self) -> &[Noun] {
        &self.nouns
    }

    pub fn adjectives(&self) -> &[Adjective] {
        &self.adjectives
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn pronouns(&self) -> &[Pronoun] {
        &self.pronouns
    }

    pub fn names(&self) -> &[Name] {
        &self.names
    }
}

fn nouns() -> Vec<Noun> {
    use NounClass::*;

    [
        ("kobieta", "woman", Feminine),
        ("mężczyzna", "man", MasculineAnimate),
        ("dziecko", "child", Neuter),
        ("pies", "dog", MasculineAnimate),
        ("kot", "cat", MasculineAnimate),
        ("chłopiec", "boy", MasculineAnimate),
        ("pan", "gentleman", MasculinePerson),
        ("student", "student", MasculinePerson),
        // Furniture
        ("stół", "table", MasculineInanimate),
        ("łóżko", "bed", Neuter),
        ("książka", "book", Feminine),
        ("torba", "bag", Feminine),
        // Kitchen
        ("nóż", "knife", MasculineInanimate),
        ("widelec", "fork", MasculineInanimate),
        ("łyżka", "spoon", Feminine),
        ("miska", "bowl", Feminine),
        ("talerz", "plate", MasculineInanimate),
        ("butelka", "bottle", Feminine),
        // Food
        ("jabłko", "apple", Neuter),
        ("gruszka", "pear", Feminine),
        ("chleb", "bread", MasculineInanimate),
        // Places
        ("dworzec", "station", MasculineInanimate),
        ("poczta", "post office", Feminine),
        ("hotel", "hotel", MasculineInanimate),
        ("muzeum", "museum", Neuter),
        // Drinks
        ("herbata", "tea", Feminine),
        ("kawa", "coffee", Feminine),
        ("sok", "juice", MasculineInanimate),
        ("piwo", "beer", Neuter),
    ]
    .into_iter()
    .map(|(word, translation, class)| Noun::new(word, translation, class))
    .collect()
}

fn adjectives() -> Result<Vec<Adjective>, GrammarError> {
    [
        ("mały", "small"),
        ("długi", "long"),
        ("kolorowy", "colourful"),
        ("drogi", "expensive"),
        ("tani", "cheap"),
        ("smaczny", "tasty"),
        // Colours
        ("zielony", "green"),
        ("czarny", "black"),
        ("żółty", "yellow"),
        ("czerwony", "red"),
        ("niebieski", "blue"),
        ("brązowy", "brown"),
        ("fioletowy", "purple"),
        ("pomarańczowy", "orange"),
    ]
    .into_iter()
    .map(|(word, translation)| Adjective::new(word, translation))
    .collect()
}

fn verbs() -> Result<Vec<Verb>, GrammarError> {
    [
        ("czytać", "read", Paradigm::Czytac),
        ("pisać", "write", Paradigm::Pisac),
        ("mówić", "speak", Paradigm::Mowic),
        ("uczyć", "teach", Paradigm::Uczyc),
    ]
    .into_iter()
    .map(|(infinitive, translation, paradigm)| Verb::new(infinitive, translation, paradigm))
    .collect()
}

fn pronouns() -> Vec<Pronoun> {
    use PersonClass::*;

    [
        (["on", "jego", "jego"], "he", Gender::Masculine, ThirdSingular),
        (["ona", "ją", "jej"], "she", Gender::Feminine, ThirdSingular),
        (["one", "je", "ich"], "they (non-masc.)", Gender::Feminine, ThirdPluralMasculine),
        (["oni", "ich", "ich"], "they (any-masc.)", Gender::Masculine, ThirdPluralMasculine),
        (["ono", "je", "jego"], "it", Gender::Neuter, ThirdSingular),
        // Gender is not marked on first and second person pronouns
        (["ja", "mnie", "mnie"], "I", Gender::Neuter, FirstSingular),
        (["ty", "ciebie", "ciebie"], "you (sing.)", Gender::Neuter, SecondSingular),
        (["wy", "was", "was"], "you (pl.)", Gender::Neuter, SecondPlural),
        (["my", "nas", "nas"], "we", Gender::Neuter, FirstPlural),
    ]
    .into_iter()
    .map(|([nominative, accusative, genitive], translation, gender, person_class)| {
        let forms = CaseMap {
            nominative: nominative.to_string(),
            accusative: accusative.to_string(),
            genitive: genitive.to_string(),
        };
        Pronoun::new(forms, translation, gender, person_class)
    })
    .collect()
}

fn names() -> Vec<Name> {
    vec![
        Name::new("Stanisław", Gender::Masculine),
        Name::new("Marie", Gender::Feminine),
        Name::new("Lech", Gender::Masculine),
    ]
}
