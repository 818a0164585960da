use crate::core::grammar;
use crate::core::lexicon::Lexicon;
use crate::core::normalizer::Normalizer;
use crate::core::notice::MissingSignNotice;
use crate::core::resolver::GlossResolver;
use crate::core::types::{GestureId, Resolution, Token};
use crate::persistence::{load_snapshot, save_snapshot};
use crate::error::LexiconError;
use std::path::Path;
use tracing::info;

/// Played and displayed when nothing else survives translation.
pub const SENTINEL_GESTURE: &str = "hello";

/// How a translation was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationSource {
    Phrase,
    Grammar,
}

/// Result of running one input through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The user's words in sign order.
    pub display: Vec<Token>,
    /// Gestures to play, in order.
    pub gestures: Vec<GestureId>,
    /// Words dropped because no gesture could be found.
    pub unresolved: Vec<Token>,
    pub source: TranslationSource,
}

// The gloss engine composes the lexicon with the pipeline stages.
pub struct GlossEngine {
    lexicon: Lexicon,
    normalizer: Normalizer,
    resolver: GlossResolver,
    notice: MissingSignNotice,
    sentinel: String,
}

impl GlossEngine {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            normalizer: Normalizer::new(),
            resolver: GlossResolver::new(),
            notice: MissingSignNotice::new(),
            sentinel: SENTINEL_GESTURE.to_string(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }

    /// Loads a compiled lexicon snapshot, falling back to the built-in one.
    pub fn from_snapshot_or_builtin(path: &Path) -> Self {
        match load_snapshot(path) {
            Ok(lexicon) => Self::new(lexicon),
            Err(e) => {
                info!(path = %path.display(), error = %e, "using built-in lexicon");
                Self::builtin()
            }
        }
    }

    pub fn with_sentinel(mut self, sentinel: &str) -> Self {
        self.sentinel = sentinel.to_string();
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Mutable access to the lexicon; cached resolutions are dropped.
    pub fn lexicon_mut(&mut self) -> &mut Lexicon {
        self.resolver.clear_cache();
        &mut self.lexicon
    }

    pub fn notice(&self) -> &MissingSignNotice {
        &self.notice
    }

    pub fn clear_notice(&mut self) {
        self.notice.clear();
    }

    pub fn resolve(&mut self, token: &str) -> Resolution {
        let resolution = self.resolver.resolve(&self.lexicon, token);
        if let Resolution::Unresolved(word) = &resolution {
            self.notice.record(word);
        }
        resolution
    }

    /// raw text -> normalize -> (phrase | reorder -> resolve each token).
    pub fn translate(&mut self, raw: &str) -> Translation {
        let normalized = self.normalizer.normalize(&self.lexicon, raw);

        if let Some(gestures) = normalized.short_circuit {
            return Translation {
                display: normalized.display_tokens,
                gestures,
                unresolved: Vec::new(),
                source: TranslationSource::Phrase,
            };
        }

        let sov = grammar::reorder(&normalized.display_tokens);

        let mut gestures = Vec::with_capacity(sov.len());
        let mut unresolved = Vec::new();
        for token in &sov {
            match self.resolve(token) {
                Resolution::Resolved(id) => gestures.push(id),
                Resolution::Unresolved(word) => unresolved.push(word),
            }
        }

        info!(tokens = ?sov, gestures = gestures.len(), dropped = unresolved.len(), "translated");

        let display = if sov.is_empty() { vec![self.sentinel.clone()] } else { sov };
        if gestures.is_empty() {
            gestures.push(self.sentinel_gesture());
        }

        Translation { display, gestures, unresolved, source: TranslationSource::Grammar }
    }

    pub fn sentinel_gesture(&self) -> GestureId {
        self.lexicon
            .gesture(&self.sentinel)
            .unwrap_or_else(|| GestureId::new(self.sentinel.as_str()))
    }

    pub fn save_lexicon(&self, path: &Path) -> Result<(), LexiconError> {
        save_snapshot(&self.lexicon, path)
    }
}
