// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod persistence;
pub mod playback;
pub mod session;
pub mod voice;

pub use crate::config::PlayerConfig;
pub use crate::core::engine::{GlossEngine, Translation, TranslationSource};
pub use crate::core::lexicon::Lexicon;
pub use crate::core::types::{AssetLocator, GestureId, Resolution, Token};
pub use crate::playback::renderer::{AssetProbe, Renderer, RendererStatus};
pub use crate::playback::scheduler::{PlaybackScheduler, PlaybackSnapshot, Phase, StatusMessage};
pub use crate::session::SignSession;
