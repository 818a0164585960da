// src/playback/renderer.rs
//! The seam between the scheduler and an avatar renderer.

use crate::core::types::AssetLocator;
use crate::error::RendererError;
use async_trait::async_trait;

/// What the renderer is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererStatus {
    /// Idle and able to take the next asset.
    Ready,
    /// Busy animating an asset.
    Playing,
    /// The last asset could not be played.
    Invalid,
}

impl RendererStatus {
    /// Parses the free-text status field some renderers expose
    /// (e.g. `"Invalid SiGML"`, `"Ready"`, `"Frame 12"`).
    pub fn parse_legacy(text: &str) -> Self {
        let text = text.to_lowercase();
        if text.contains("invalid") {
            RendererStatus::Invalid
        } else if text.contains("ready") || !text.contains("frame") {
            RendererStatus::Ready
        } else {
            RendererStatus::Playing
        }
    }
}

/// An avatar renderer that plays gesture assets one at a time.
///
/// Implementations are owned by a single `PlaybackScheduler`, which is the
/// only caller of `play_asset` and `abort`.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Resolves once the renderer can take assets.
    async fn initialize(&self) -> Result<(), RendererError>;

    /// Starts playing an asset. The scheduler does not wait on this.
    async fn play_asset(&self, locator: &AssetLocator) -> Result<(), RendererError>;

    /// Stops the current asset, if any.
    fn abort(&self);

    fn status(&self) -> RendererStatus;
}

/// Lightweight existence check for gesture assets.
#[async_trait]
pub trait AssetProbe: Send + Sync {
    async fn exists(&self, locator: &AssetLocator) -> Result<bool, RendererError>;
}
