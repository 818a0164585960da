// src/error.rs
use thiserror::Error;

/// Failures while building, importing or persisting a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed lexicon snapshot: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("{table} entry '{word}' maps to '{gesture}', which is not in the gesture vocabulary")]
    UnknownGesture {
        table: &'static str,
        word: String,
        gesture: String,
    },
}

/// Failures reported by an avatar renderer integration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RendererError {
    #[error("renderer rejected asset '{locator}': {reason}")]
    Dispatch { locator: String, reason: String },

    #[error("renderer aborted")]
    Aborted,

    #[error("renderer initialization failed: {0}")]
    Init(String),

    #[error("renderer did not become ready within {0} ms")]
    Timeout(u64),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// Initialization exhausted its retries; playback stays disabled until
    /// the renderer is re-initialized.
    #[error("renderer unavailable: {0}")]
    RendererUnavailable(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VoiceError {
    #[error("speech recognition is not supported here")]
    Unsupported,

    #[error("no speech detected")]
    NoSpeech,

    #[error("language '{0}' is not supported by the recognizer")]
    LanguageNotSupported(String),

    #[error("speech recognition failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures surfaced by a `SignSession`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Voice(#[from] VoiceError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error("no gesture for '{0}'")]
    NoGesture(String),
}
