use crate::{Case, CaseMap, Gender, GrammarError, Nominal, PersonClass};

/// A personal pronoun. Pronouns are irregular, so every case form is stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pronoun {
    forms: CaseMap<String>,
    translation: String,
    gender: Gender,
    person_class: PersonClass,
}

impl Pronoun {
    pub fn new(
        forms: CaseMap<String>,
        translation: impl Into<String>,
        gender: Gender,
        person_class: PersonClass,
    ) -> Self {
        Self {
            forms,
            translation: translation.into(),
            gender,
            person_class,
        }
    }

    /// Builds a pronoun from loose `(case, form)` pairs, failing if any case is missing.
    pub fn from_forms(
        forms: impl IntoIterator<Item = (Case, String)>,
        translation: impl Into<String>,
        gender: Gender,
        person_class: PersonClass,
    ) -> Result<Self, GrammarError> {
        let mut table = CaseMap::from_fn(|_| None);
        for (case, form) in forms {
            *table.get_mut(&case) = Some(form);
        }

        let word = table
            .nominative
            .clone()
            .unwrap_or_else(|| "<unnamed>".to_string());
        if let Some((case, _)) = table.iter().find(|(_, form)| form.is_none()) {
            return Err(GrammarError::MissingCase { word, case });
        }

        let forms = table.map(|_, form| form.unwrap_or_default());
        Ok(Self::new(forms, translation, gender, person_class))
    }

    pub fn forms(&self) -> &CaseMap<String> {
        &self.forms
    }
}

impl Nominal for Pronoun {
    fn render(&self, case: Case) -> String {
        self.forms.get(&case).clone()
    }

    fn translation(&self) -> String {
        self.translation.clone()
    }

    fn gender(&self) -> Gender {
        self.gender
    }

    fn person_class(&self) -> PersonClass {
        self.person_class
    }
}

/// A personal name. Names are left undeclined except for a marked genitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name {
    name: String,
    gender: Gender,
}

impl Name {
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
        }
    }
}

impl Nominal for Name {
    fn render(&self, case: Case) -> String {
        match case {
            Case::Nominative | Case::Accusative => self.name.clone(),
            // TODO: decline names once they carry a declension class like common nouns
            Case::Genitive => format!("Genitive({})", self.name),
        }
    }

    fn translation(&self) -> String {
        self.name.clone()
    }

    fn gender(&self) -> Gender {
        self.gender
    }

    fn person_class(&self) -> PersonClass {
        PersonClass::ThirdSingular
    }
}
