// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A lower-cased word or symbol extracted from input text.
pub type Token = String;

/// A single sign-language unit of meaning, identified by its vocabulary key.
/// Only the lexicon hands these out; the ones in a `Resolution` are always
/// vocabulary members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GestureId(String);

impl GestureId {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name the renderer resolves against its asset directory.
    /// Single-character glyphs use upper case, everything else lower case.
    pub fn locator(&self) -> AssetLocator {
        let mut chars = self.0.chars();
        let name = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_uppercase().collect(),
            _ => self.0.to_lowercase(),
        };
        AssetLocator(name)
    }
}

impl fmt::Display for GestureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Asset name handed to the renderer, e.g. `"hello"` or `"A"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetLocator(String);

impl AssetLocator {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Relative file name of the asset, e.g. `SignFiles/hello.sigml`.
    pub fn file_path(&self, asset_dir: impl AsRef<std::path::Path>, extension: &str) -> std::path::PathBuf {
        let mut path = asset_dir.as_ref().to_path_buf();
        path.push(format!("{}.{}", self.0, extension));
        path
    }
}

impl fmt::Display for AssetLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of resolving one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(GestureId),
    Unresolved(Token),
}

impl Resolution {
    pub fn gesture(&self) -> Option<&GestureId> {
        match self {
            Resolution::Resolved(id) => Some(id),
            Resolution::Unresolved(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseCategory {
    Greeting,
    Question,
    Daily,
    Emergency,
    Education,
    Emotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Source language of a regional mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionalLanguage {
    Tamil,
    Hindi,
}
