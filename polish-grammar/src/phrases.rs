use enumap::EnuMap;

use crate::{
    Adjective, Case, GenerationOptions, Gender, GrammarError, Name, Nominal, Noun, PersonClass,
    Possessive, Pronoun, Vocabulary, pick,
};

/// Most adjectives a standard noun phrase may carry.
pub const MAX_ADJECTIVES: usize = 2;

/// Adjectives, a head noun and an optional possessive: "mały czarny kot jej".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StandardNounPhrase {
    adjectives: Vec<Adjective>,
    noun: Noun,
    possessive: Option<Possessive>,
}

impl StandardNounPhrase {
    pub fn new(
        adjectives: Vec<Adjective>,
        noun: Noun,
        possessive: Option<Possessive>,
    ) -> Result<Self, GrammarError> {
        if adjectives.len() > MAX_ADJECTIVES {
            return Err(GrammarError::TooManyAdjectives {
                count: adjectives.len(),
                max: MAX_ADJECTIVES,
            });
        }
        Ok(Self {
            adjectives,
            noun,
            possessive,
        })
    }

    pub fn adjectives(&self) -> &[Adjective] {
        &self.adjectives
    }

    pub fn noun(&self) -> &Noun {
        &self.noun
    }

    pub fn possessive(&self) -> Option<&Possessive> {
        self.possessive.as_ref()
    }

    pub fn generate(
        vocabulary: &Vocabulary,
        options: &GenerationOptions,
        rng: &mut impl rand::Rng,
    ) -> Self {
        let adjective_count = rng.random_range(0..=options.max_adjectives.min(MAX_ADJECTIVES));
        let adjectives = (0..adjective_count)
            .map(|_| pick(rng, vocabulary.adjectives()).clone())
            .collect();
        let noun = pick(rng, vocabulary.nouns()).clone();
        let possessive = (rng.random::<f64>() < options.possessive_probability)
            .then(|| Possessive::generate(vocabulary, rng));

        Self {
            adjectives,
            noun,
            possessive,
        }
    }
}

impl Nominal for StandardNounPhrase {
    /// Adjectives agree with the head noun; the possessive follows the noun.
    fn render(&self, case: Case) -> String {
        let gender = self.noun.gender();
        self.adjectives
            .iter()
            .map(|adjective| adjective.render(gender, case))
            .chain(std::iter::once(self.noun.render(case)))
            .chain(self.possessive.iter().map(Possessive::render))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// English puts the possessive first: "Lech's small black cat".
    fn translation(&self) -> String {
        self.possessive
            .iter()
            .map(Possessive::translation)
            .chain(
                self.adjectives
                    .iter()
                    .map(|adjective| adjective.translation().to_string()),
            )
            .chain(std::iter::once(self.noun.translation()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn gender(&self) -> Gender {
        self.noun.gender()
    }

    fn person_class(&self) -> PersonClass {
        self.noun.person_class()
    }
}

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, EnuMap)]
pub enum NounPhraseKind {
    Name,
    Pronoun,
    Standard,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NounPhrase {
    Name(Name),
    Pronoun(Pronoun),
    Standard(StandardNounPhrase),
}

impl NounPhrase {
    pub fn kind(&self) -> NounPhraseKind {
        match self {
            NounPhrase::Name(_) => NounPhraseKind::Name,
            NounPhrase::Pronoun(_) => NounPhraseKind::Pronoun,
            NounPhrase::Standard(_) => NounPhraseKind::Standard,
        }
    }

    /// Picks a name, a pronoun or a standard phrase with equal chance.
    pub fn generate(
        vocabulary: &Vocabulary,
        options: &GenerationOptions,
        rng: &mut impl rand::Rng,
    ) -> Self {
        let kind = *pick(rng, &NounPhraseKind::ALL);
        log::trace!("generating {kind:?} noun phrase");
        match kind {
            NounPhraseKind::Name => NounPhrase::Name(pick(rng, vocabulary.names()).clone()),
            NounPhraseKind::Pronoun => {
                NounPhrase::Pronoun(pick(rng, vocabulary.pronouns()).clone())
            }
            NounPhraseKind::Standard => NounPhrase::Standard(StandardNounPhrase::generate(
                vocabulary, options, rng,
            )),
        }
    }
}

impl Nominal for NounPhrase {
    fn render(&self, case: Case) -> String {
        match self {
            NounPhrase::Name(name) => name.render(case),
            NounPhrase::Pronoun(pronoun) => pronoun.render(case),
            NounPhrase::Standard(phrase) => phrase.render(case),
        }
    }

    fn translation(&self) -> String {
        match self {
            NounPhrase::Name(name) => name.translation(),
            NounPhrase::Pronoun(pronoun) => pronoun.translation(),
            NounPhrase::Standard(phrase) => phrase.translation(),
        }
    }

    fn gender(&self) -> Gender {
        match self {
            NounPhrase::Name(name) => name.gender(),
            NounPhrase::Pronoun(pronoun) => pronoun.gender(),
            NounPhrase::Standard(phrase) => phrase.gender(),
        }
    }

    fn person_class(&self) -> PersonClass {
        match self {
            NounPhrase::Name(name) => name.person_class(),
            NounPhrase::Pronoun(pronoun) => pronoun.person_class(),
            NounPhrase::Standard(phrase) => phrase.person_class(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NounClass;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn black_cat_of_lech() -> StandardNounPhrase {
        StandardNounPhrase::new(
            vec![
                Adjective::new("mały", "small").unwrap(),
                Adjective::new("czarny", "black").unwrap(),
            ],
            Noun::new("kot", "cat", NounClass::MasculineAnimate),
            Some(Possessive::new(Name::new("Lech", Gender::Masculine))),
        )
        .unwrap()
    }

    #[test]
    fn test_standard_phrase_render() {
        let phrase = black_cat_of_lech();
        assert_eq!(
            phrase.render(Case::Nominative),
            "mały czarny kot Genitive(Lech)"
        );
        assert_eq!(
            phrase.render(Case::Accusative),
            "małego czarnego kota Genitive(Lech)"
        );
    }

    #[test]
    fn test_translation_puts_possessive_first() {
        let phrase = black_cat_of_lech();
        assert_eq!(phrase.translation(), "Lech's small black cat");
    }

    #[test]
    fn test_adjectives_agree_with_feminine_head() {
        let phrase = StandardNounPhrase::new(
            vec![Adjective::new("drogi", "expensive").unwrap()],
            Noun::new("książka", "book", NounClass::Feminine),
            None,
        )
        .unwrap();
        assert_eq!(phrase.render(Case::Nominative), "droga książka");
        assert_eq!(phrase.render(Case::Accusative), "drogą książkę");
        assert_eq!(phrase.render(Case::Genitive), "drogiej książki");
        assert_eq!(phrase.translation(), "expensive book");
    }

    #[test]
    fn test_too_many_adjectives() {
        let adjective = Adjective::new("mały", "small").unwrap();
        let err = StandardNounPhrase::new(
            vec![adjective; 3],
            Noun::new("kot", "cat", NounClass::MasculineAnimate),
            None,
        )
        .unwrap_err();
        assert_eq!(err, GrammarError::TooManyAdjectives { count: 3, max: 2 });
    }

    #[test]
    fn test_generated_adjectives_agree_in_every_case() {
        let vocabulary = Vocabulary::polish().unwrap();
        let options = GenerationOptions::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut adjective_counts = std::collections::BTreeSet::new();
        let mut possessives = 0;

        for _ in 0..200 {
            let phrase = StandardNounPhrase::generate(&vocabulary, &options, &mut rng);
            assert!(phrase.adjectives().len() <= MAX_ADJECTIVES);
            adjective_counts.insert(phrase.adjectives().len());
            if phrase.possessive().is_some() {
                possessives += 1;
            }

            let gender = phrase.noun().gender();
            for case in Case::ALL {
                let rendered = phrase.render(case);
                let words: Vec<_> = rendered.split(' ').collect();
                for (adjective, word) in phrase.adjectives().iter().zip(&words) {
                    assert_eq!(*word, adjective.render(gender, case));
                }
            }
        }

        assert_eq!(adjective_counts.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        // About 40 expected at the default rate of 0.2
        assert!((10..100).contains(&possessives), "{possessives} possessives");
    }

    #[test]
    fn test_generation_respects_options() {
        let vocabulary = Vocabulary::polish().unwrap();
        let options = GenerationOptions {
            max_adjectives: 0,
            possessive_probability: 0.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for _ in 0..200 {
            let phrase = StandardNounPhrase::generate(&vocabulary, &options, &mut rng);
            assert!(phrase.adjectives().is_empty());
            assert!(phrase.possessive().is_none());
        }

        let always = GenerationOptions {
            possessive_probability: 1.0,
            ..GenerationOptions::default()
        };
        for _ in 0..50 {
            let phrase = StandardNounPhrase::generate(&vocabulary, &always, &mut rng);
            assert!(phrase.possessive().is_some());
        }
    }

    #[test]
    fn test_noun_phrase_forwards_to_variant() {
        let vocabulary = Vocabulary::polish().unwrap();
        let name = NounPhrase::Name(vocabulary.names()[0].clone());
        assert_eq!(name.kind(), NounPhraseKind::Name);
        assert_eq!(name.person_class(), PersonClass::ThirdSingular);
        assert_eq!(name.render(Case::Accusative), name.render(Case::Nominative));
    }
}
