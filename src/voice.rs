// src/voice.rs
//! Speech-to-text bridge. The platform recognizer lives behind `VoiceInput`;
//! the session only sees a transcript or a `VoiceError`.

use crate::core::types::RegionalLanguage;
use crate::error::VoiceError;
use async_trait::async_trait;
use std::fmt;

/// Recognition language, as a BCP-47 tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    HiIn,
    TaIn,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::EnUs, Locale::HiIn, Locale::TaIn];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::HiIn => "hi-IN",
            Locale::TaIn => "ta-IN",
        }
    }

    pub fn from_tag(tag: &str) -> Result<Self, VoiceError> {
        Locale::ALL
            .into_iter()
            .find(|l| l.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| VoiceError::LanguageNotSupported(tag.to_string()))
    }

    pub fn regional(self) -> Option<RegionalLanguage> {
        match self {
            Locale::EnUs => None,
            Locale::HiIn => Some(RegionalLanguage::Hindi),
            Locale::TaIn => Some(RegionalLanguage::Tamil),
        }
    }
}

impl From<RegionalLanguage> for Locale {
    fn from(language: RegionalLanguage) -> Self {
        match language {
            RegionalLanguage::Hindi => Locale::HiIn,
            RegionalLanguage::Tamil => Locale::TaIn,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One-shot speech recognition.
#[async_trait]
pub trait VoiceInput: Send + Sync {
    /// Listens once and returns the final transcript.
    async fn recognize(&self, locale: Locale) -> Result<String, VoiceError>;
}
