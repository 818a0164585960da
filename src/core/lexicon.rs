// src/core/lexicon.rs
use crate::core::dataset;
use crate::core::types::{Difficulty, GestureId, PhraseCategory, RegionalLanguage};
use crate::error::LexiconError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// One row of the word→sign dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub word: String,
    pub sign: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "general".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub phrase: String,
    pub gestures: Vec<GestureId>,
    pub category: PhraseCategory,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalMapping {
    pub english: String,
    pub language: RegionalLanguage,
}

/// All static word, phrase and gesture tables the pipeline queries.
///
/// The gesture vocabulary is kept in a `BTreeSet` so that every scan over it
/// runs in lexicographic order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    vocabulary: BTreeSet<String>,
    /// word -> gesture, from dataset rows only.
    words: HashMap<String, GestureId>,
    entries: Vec<DatasetEntry>,
    phrases: HashMap<String, PhraseEntry>,
    regional: HashMap<String, RegionalMapping>,
    legacy: HashMap<String, String>,
    synonyms: HashMap<String, String>,
    common: Vec<String>,
}

impl Lexicon {
    /// An empty lexicon over the given vocabulary.
    pub fn with_vocabulary<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
            words: HashMap::new(),
            entries: Vec::new(),
            phrases: HashMap::new(),
            regional: HashMap::new(),
            legacy: HashMap::new(),
            synonyms: HashMap::new(),
            common: Vec::new(),
        }
    }

    /// The lexicon shipped with the crate.
    pub fn builtin() -> Self {
        let mut lexicon = Self::with_vocabulary(dataset::GESTURE_VOCABULARY.iter().copied());

        for &(word, sign, category) in dataset::ACTION_DATASET {
            let entry = DatasetEntry {
                word: word.to_string(),
                sign: sign.to_string(),
                category: category.to_string(),
            };
            let added = lexicon.add_entry(entry);
            debug_assert!(added.is_ok(), "built-in dataset rows must name vocabulary members: {added:?}");
        }
        for row in dataset::PHRASES {
            lexicon.add_phrase(
                row.phrase,
                row.signs.iter().copied(),
                row.category,
                row.difficulty,
            );
        }
        for &(native, english, language) in dataset::REGIONAL_MAPPINGS {
            lexicon.add_regional(native, english, language);
        }
        for &(native, english) in dataset::LEGACY_TRANSLATIONS {
            lexicon.legacy.insert(native.to_string(), english.to_string());
        }
        for &(variant, canonical) in dataset::SYNONYMS {
            lexicon.add_synonym(variant, canonical);
        }
        lexicon.common = dataset::COMMON_GESTURES.iter().map(|s| s.to_string()).collect();
        lexicon
    }

    // --- Gesture vocabulary ---

    pub fn contains_gesture(&self, id: &str) -> bool {
        self.vocabulary.contains(id)
    }

    /// Looks up a vocabulary member by name.
    pub fn gesture(&self, id: &str) -> Option<GestureId> {
        self.vocabulary.get(id).map(|g| GestureId::new(g.as_str()))
    }

    /// Vocabulary members in lexicographic order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.iter().map(String::as_str)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    // --- Word -> gesture dataset ---

    /// Adds a dataset row. Rows whose sign is outside the vocabulary are rejected.
    pub fn add_entry(&mut self, entry: DatasetEntry) -> Result<(), LexiconError> {
        let word = entry.word.to_lowercase();
        let gesture = self.gesture(&entry.sign).ok_or_else(|| LexiconError::UnknownGesture {
            table: "dataset",
            word: word.clone(),
            gesture: entry.sign.clone(),
        })?;
        self.words.insert(word, gesture);
        self.entries.push(entry);
        Ok(())
    }

    pub fn lookup_word(&self, word: &str) -> Option<&GestureId> {
        self.words.get(word)
    }

    pub fn entries(&self) -> &[DatasetEntry] {
        &self.entries
    }

    /// Dataset rows whose word or sign contains `query` (case-insensitive),
    /// optionally restricted to one category.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&DatasetEntry> {
        let query = query.to_lowercase();
        let mut hits: Vec<&DatasetEntry> = self
            .entries
            .iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .filter(|e| {
                e.word.to_lowercase().contains(&query) || e.sign.to_lowercase().contains(&query)
            })
            .collect();
        hits.sort_by(|a, b| a.word.cmp(&b.word));
        hits
    }

    /// Distinct dataset categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.entries.iter().map(|e| e.category.as_str()).collect();
        set.into_iter().collect()
    }

    // --- Phrases ---

    pub fn add_phrase<'a>(
        &mut self,
        phrase: &str,
        gestures: impl IntoIterator<Item = &'a str>,
        category: PhraseCategory,
        difficulty: Difficulty,
    ) {
        let key = normalize_phrase(phrase);
        let entry = PhraseEntry {
            phrase: key.clone(),
            gestures: gestures.into_iter().map(GestureId::new).collect(),
            category,
            difficulty,
        };
        self.phrases.insert(key, entry);
    }

    /// Whole-input phrase match. The input is lower-cased, stripped of
    /// punctuation and whitespace-collapsed first; a key written without
    /// spaces (`"howareyou"`) also matches the spaced form.
    pub fn phrase(&self, text: &str) -> Option<&PhraseEntry> {
        let normalized = normalize_phrase(text);
        if normalized.is_empty() {
            return None;
        }
        self.phrases.get(&normalized).or_else(|| {
            let compact: String = normalized.chars().filter(|c| !c.is_whitespace()).collect();
            self.phrases.get(&compact)
        })
    }

    pub fn phrase_category(&self, text: &str) -> Option<PhraseCategory> {
        self.phrase(text).map(|p| p.category)
    }

    // --- Regional and legacy translation ---

    pub fn add_regional(&mut self, native: &str, english: &str, language: RegionalLanguage) {
        self.regional.insert(
            native.to_string(),
            RegionalMapping { english: english.to_string(), language },
        );
    }

    pub fn regional(&self, token: &str) -> Option<&RegionalMapping> {
        self.regional.get(token)
    }

    pub fn legacy(&self, token: &str) -> Option<&str> {
        self.legacy.get(token).map(String::as_str)
    }

    // --- Synonyms ---

    pub fn add_synonym(&mut self, variant: &str, canonical: &str) {
        self.synonyms.insert(variant.to_lowercase(), canonical.to_string());
    }

    /// Canonical gesture for a word variant, only if that gesture is playable.
    pub fn synonym(&self, word: &str) -> Option<GestureId> {
        let canonical = self.synonyms.get(word.trim())?;
        self.gesture(canonical)
    }

    // --- Preload list ---

    pub fn common_gestures(&self) -> &[String] {
        &self.common
    }
}

/// Lower-case, strip punctuation, collapse whitespace.
pub fn normalize_phrase(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
