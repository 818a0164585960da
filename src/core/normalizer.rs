// src/core/normalizer.rs
use crate::core::lexicon::Lexicon;
use crate::core::types::{GestureId, Token};
use tracing::debug;

/// Output of the first pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub display_tokens: Vec<Token>,
    /// Set when the whole input matched a phrase; later stages are skipped.
    pub short_circuit: Option<Vec<GestureId>>,
}

/// Turns raw input into English tokens.
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, lexicon: &Lexicon, raw: &str) -> Normalized {
        if let Some(entry) = lexicon.phrase(raw) {
            debug!(input = raw.trim(), phrase = %entry.phrase, "phrase match");
            return Normalized {
                display_tokens: entry.gestures.iter().map(|g| g.as_str().to_string()).collect(),
                short_circuit: Some(entry.gestures.clone()),
            };
        }

        let display_tokens = raw
            .split_whitespace()
            .map(|word| self.translate_token(lexicon, word))
            .collect();

        Normalized { display_tokens, short_circuit: None }
    }

    /// Regional table first, then the legacy table, else the lower-cased word.
    fn translate_token(&self, lexicon: &Lexicon, word: &str) -> Token {
        if let Some(mapping) = lexicon.regional(word) {
            debug!(word, english = %mapping.english, language = ?mapping.language, "regional translation");
            return mapping.english.clone();
        }
        if let Some(english) = lexicon.legacy(word) {
            return english.to_string();
        }
        let lower = word.to_lowercase();
        match lexicon.legacy(&lower) {
            Some(english) => english.to_string(),
            None => lower,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(raw: &str) -> Normalized {
        Normalizer::new().normalize(&Lexicon::builtin(), raw)
    }

    #[test]
    fn splits_and_lowercases() {
        let out = normalize("I eat   FOOD");
        assert_eq!(out.display_tokens, vec!["i", "eat", "food"]);
        assert!(out.short_circuit.is_none());
    }

    #[test]
    fn phrase_short_circuits() {
        let out = normalize("Thank you");
        assert_eq!(out.display_tokens, vec!["thankyou"]);
        let gestures = out.short_circuit.unwrap();
        assert_eq!(gestures.len(), 1);
        assert_eq!(gestures[0].as_str(), "thankyou");

        let out = normalize("hello");
        assert_eq!(out.display_tokens, vec!["hello"]);
        assert!(out.short_circuit.is_some());
    }

    #[test]
    fn substitutes_regional_words() {
        let out = normalize("நல்ல காலை");
        assert_eq!(out.display_tokens, vec!["good", "morning"]);

        let out = normalize("पिता आओ");
        assert_eq!(out.display_tokens, vec!["father", "come"]);
    }

    #[test]
    fn substitutes_romanized_legacy_words() {
        let out = normalize("Namaste teacher");
        assert_eq!(out.display_tokens, vec!["hello", "teacher"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        let out = normalize("   ");
        assert!(out.display_tokens.is_empty());
        assert!(out.short_circuit.is_none());
    }
}
