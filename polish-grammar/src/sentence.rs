use enumap::EnuMap;

use crate::{Case, GenerationOptions, Nominal, NounPhrase, SentencePair, Verb, Vocabulary, pick};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, EnuMap)]
pub enum SentenceShape {
    /// "Kot czyta."
    Nominative,
    /// "Kot czyta książkę."
    SubjectVerbObject,
}

/// The clause inside a sentence. The verb always agrees with the subject.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phrase {
    Nominative {
        subject: NounPhrase,
        verb: Verb,
    },
    SubjectVerbObject {
        subject: NounPhrase,
        verb: Verb,
        object: NounPhrase,
    },
}

impl Phrase {
    pub fn shape(&self) -> SentenceShape {
        match self {
            Phrase::Nominative { .. } => SentenceShape::Nominative,
            Phrase::SubjectVerbObject { .. } => SentenceShape::SubjectVerbObject,
        }
    }

    pub fn subject(&self) -> &NounPhrase {
        match self {
            Phrase::Nominative { subject, .. } | Phrase::SubjectVerbObject { subject, .. } => {
                subject
            }
        }
    }

    pub fn verb(&self) -> &Verb {
        match self {
            Phrase::Nominative { verb, .. } | Phrase::SubjectVerbObject { verb, .. } => verb,
        }
    }

    pub fn object(&self) -> Option<&NounPhrase> {
        match self {
            Phrase::Nominative { .. } => None,
            Phrase::SubjectVerbObject { object, .. } => Some(object),
        }
    }

    pub fn render(&self) -> String {
        let subject = self.subject();
        let mut words = vec![
            subject.render(Case::Nominative),
            self.verb().render(Some(subject.person_class())),
        ];
        if let Some(object) = self.object() {
            words.push(object.render(Case::Accusative));
        }
        words.join(" ")
    }

    pub fn translation(&self) -> String {
        let mut words = vec![
            self.subject().translation(),
            self.verb().translation().to_string(),
        ];
        if let Some(object) = self.object() {
            words.push(object.translation());
        }
        words.join(" ")
    }

    pub fn generate(
        vocabulary: &Vocabulary,
        options: &GenerationOptions,
        rng: &mut impl rand::Rng,
    ) -> Self {
        let shape = *pick(rng, &SentenceShape::ALL);
        let subject = NounPhrase::generate(vocabulary, options, rng);
        let verb = pick(rng, vocabulary.verbs()).clone();
        match shape {
            SentenceShape::Nominative => Phrase::Nominative { subject, verb },
            SentenceShape::SubjectVerbObject => Phrase::SubjectVerbObject {
                subject,
                verb,
                object: NounPhrase::generate(vocabulary, options, rng),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sentence {
    phrase: Phrase,
}

impl Sentence {
    pub fn new(phrase: Phrase) -> Self {
        Self { phrase }
    }

    pub fn generate(
        vocabulary: &Vocabulary,
        options: &GenerationOptions,
        rng: &mut impl rand::Rng,
    ) -> Self {
        let phrase = Phrase::generate(vocabulary, options, rng);
        log::debug!(
            "generated {:?} sentence with {:?} subject",
            phrase.shape(),
            phrase.subject().kind()
        );
        Self::new(phrase)
    }

    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    pub fn shape(&self) -> SentenceShape {
        self.phrase.shape()
    }

    /// The Polish sentence, capitalized and ending in a period.
    pub fn render(&self) -> String {
        let phrase = self.phrase.render();
        let mut chars = phrase.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
            None => ".".to_string(),
        }
    }

    /// The English gloss, word for word and unpunctuated.
    pub fn translation(&self) -> String {
        self.phrase.translation()
    }

    pub fn to_pair(&self) -> SentencePair {
        SentencePair {
            target: self.render(),
            native: self.translation(),
        }
    }
}
