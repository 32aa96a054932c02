use crate::Case;

/// Errors raised while building vocabulary, phrases or generation options.
///
/// All of these point at bad word data or bad configuration. Once a value has
/// been built successfully, rendering it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("unrecognized word shape `{word}`: expected {expected}")]
    UnrecognizedWordShape { word: String, expected: &'static str },

    #[error("pronoun `{word}` has no {case} form")]
    MissingCase { word: String, case: Case },

    #[error("noun phrase has {count} adjectives but at most {max} are supported")]
    TooManyAdjectives { count: usize, max: usize },

    #[error("vocabulary has no {category}")]
    EmptyVocabulary { category: &'static str },

    #[error("invalid generation option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },
}
