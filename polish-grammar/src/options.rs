use serde::{Deserialize, Serialize};

use crate::GrammarError;
use crate::phrases::MAX_ADJECTIVES;

/// Knobs for random generation. Missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Standard noun phrases get between zero and this many adjectives.
    pub max_adjectives: usize,
    /// Chance that a standard noun phrase carries a possessive.
    pub possessive_probability: f64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_adjectives: MAX_ADJECTIVES,
            possessive_probability: 0.2,
        }
    }
}

impl GenerationOptions {
    pub fn validate(&self) -> Result<(), GrammarError> {
        if self.max_adjectives > MAX_ADJECTIVES {
            return Err(GrammarError::InvalidOption {
                name: "max_adjectives",
                reason: format!("{} exceeds the maximum of {MAX_ADJECTIVES}", self.max_adjectives),
            });
        }
        if !(0.0..=1.0).contains(&self.possessive_probability) {
            return Err(GrammarError::InvalidOption {
                name: "possessive_probability",
                reason: format!("{} is not within [0, 1]", self.possessive_probability),
            });
        }
        Ok(())
    }
}
