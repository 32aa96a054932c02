use crate::{Case, Gender, Name, Nominal, PersonClass, Pronoun, Vocabulary, pick};

/// The owner in a possessive construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Possessor {
    Name(Name),
    Pronoun(Pronoun),
}

impl Nominal for Possessor {
    fn render(&self, case: Case) -> String {
        match self {
            Possessor::Name(name) => name.render(case),
            Possessor::Pronoun(pronoun) => pronoun.render(case),
        }
    }

    fn translation(&self) -> String {
        match self {
            Possessor::Name(name) => name.translation(),
            Possessor::Pronoun(pronoun) => pronoun.translation(),
        }
    }

    fn gender(&self) -> Gender {
        match self {
            Possessor::Name(name) => name.gender(),
            Possessor::Pronoun(pronoun) => pronoun.gender(),
        }
    }

    fn person_class(&self) -> PersonClass {
        match self {
            Possessor::Name(name) => name.person_class(),
            Possessor::Pronoun(pronoun) => pronoun.person_class(),
        }
    }
}

impl From<Name> for Possessor {
    fn from(name: Name) -> Self {
        Possessor::Name(name)
    }
}

impl From<Pronoun> for Possessor {
    fn from(pronoun: Pronoun) -> Self {
        Possessor::Pronoun(pronoun)
    }
}

/// "X's": the owner rendered in the genitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Possessive {
    owner: Possessor,
}

impl Possessive {
    pub fn new(owner: impl Into<Possessor>) -> Self {
        Self {
            owner: owner.into(),
        }
    }

    pub fn owner(&self) -> &Possessor {
        &self.owner
    }

    pub fn render(&self) -> String {
        self.owner.render(Case::Genitive)
    }

    pub fn translation(&self) -> String {
        format!("{}'s", self.owner.translation())
    }

    /// Picks a random name or pronoun, each with equal chance, as the owner.
    pub fn generate(vocabulary: &Vocabulary, rng: &mut impl rand::Rng) -> Self {
        let owner = if rng.random_bool(0.5) {
            Possessor::Name(pick(rng, vocabulary.names()).clone())
        } else {
            Possessor::Pronoun(pick(rng, vocabulary.pronouns()).clone())
        };
        Self::new(owner)
    }
}
