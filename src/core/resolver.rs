// src/core/resolver.rs
use crate::core::lexicon::Lexicon;
use crate::core::types::{GestureId, Resolution};
use crate::fuzzy::morphology;
use std::collections::HashMap;
use tracing::debug;

/// Vocabulary entries this short are never used for substring matches.
const MIN_SUBSTRING_LEN: usize = 4;

/// Which fallback produced a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Synonym,
    Dataset,
    Variant,
    Substring,
}

/// Maps a word to a playable gesture through an ordered fallback chain.
/// Results are cached per token; call `clear_cache` after the lexicon changes.
pub struct GlossResolver {
    cache: HashMap<String, Option<(GestureId, MatchKind)>>,
}

impl GlossResolver {
    pub fn new() -> Self {
        Self { cache: HashMap::new() }
    }

    pub fn resolve(&mut self, lexicon: &Lexicon, token: &str) -> Resolution {
        match self.resolve_with_kind(lexicon, token) {
            Some((id, _)) => Resolution::Resolved(id),
            None => Resolution::Unresolved(token.to_string()),
        }
    }

    pub fn resolve_with_kind(
        &mut self,
        lexicon: &Lexicon,
        token: &str,
    ) -> Option<(GestureId, MatchKind)> {
        let word = token.to_lowercase();
        if let Some(hit) = self.cache.get(&word) {
            return hit.clone();
        }
        let hit = Self::lookup(lexicon, &word);
        match &hit {
            Some((id, kind)) => debug!(word = %word, gesture = %id, ?kind, "resolved"),
            None => debug!(word = %word, "no sign available"),
        }
        self.cache.insert(word, hit.clone());
        hit
    }

    fn lookup(lexicon: &Lexicon, word: &str) -> Option<(GestureId, MatchKind)> {
        if let Some(id) = lexicon.gesture(word) {
            return Some((id, MatchKind::Exact));
        }
        if let Some(id) = lexicon.synonym(word) {
            return Some((id, MatchKind::Synonym));
        }
        if let Some(id) = lexicon.lookup_word(word) {
            return Some((id.clone(), MatchKind::Dataset));
        }
        for variant in morphology::variants(word) {
            if let Some(id) = lexicon.lookup_word(&variant) {
                return Some((id.clone(), MatchKind::Variant));
            }
        }
        lexicon
            .vocabulary()
            .find(|sign| sign.len() >= MIN_SUBSTRING_LEN && word.contains(sign))
            .and_then(|sign| lexicon.gesture(sign))
            .map(|id| (id, MatchKind::Substring))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl Default for GlossResolver {
    fn default() -> Self {
        Self::new()
    }
}
