// src/session.rs
//! One user's translate-and-play session.

use crate::config::PlayerConfig;
use crate::core::engine::{GlossEngine, Translation};
use crate::core::types::{GestureId, Resolution};
use crate::error::{PlaybackError, SessionError, VoiceError};
use crate::playback::lifecycle::RendererLifecycle;
use crate::playback::preload::{PreloadProber, PreloadReport};
use crate::playback::renderer::{AssetProbe, Renderer};
use crate::playback::scheduler::{PlaybackScheduler, PlaybackSnapshot};
use crate::voice::{Locale, VoiceInput};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Ties the text pipeline to a scheduler, a renderer lifecycle and the
/// preload prober. Text and voice input both end up in `submit_text`.
pub struct SignSession<R: Renderer + 'static, P: AssetProbe + 'static> {
    engine: GlossEngine,
    scheduler: PlaybackScheduler<R>,
    lifecycle: RendererLifecycle,
    prober: PreloadProber<P>,
    preload: Option<JoinHandle<PreloadReport>>,
    warmup: Duration,
    locale: Locale,
}

impl<R: Renderer + 'static, P: AssetProbe + 'static> SignSession<R, P> {
    pub fn new(engine: GlossEngine, renderer: Arc<R>, probe: Arc<P>, config: &PlayerConfig) -> Self {
        Self {
            engine: engine.with_sentinel(&config.sentinel_gesture),
            scheduler: PlaybackScheduler::new(renderer, config),
            lifecycle: RendererLifecycle::new(config),
            prober: PreloadProber::new(probe),
            preload: None,
            warmup: config.warmup_delay(),
            locale: Locale::default(),
        }
    }

    pub fn engine(&self) -> &GlossEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GlossEngine {
        &mut self.engine
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Brings the renderer up, then starts the preload probe after the
    /// warm-up delay. The probe runs once per session.
    pub async fn initialize(&mut self) -> Result<(), PlaybackError> {
        self.scheduler.initialize(&mut self.lifecycle).await?;

        if self.preload.is_none() {
            // Phrases can play gestures outside the vocabulary, so the whole
            // list is probed.
            let candidates: Vec<GestureId> =
                self.engine.lexicon().common_gestures().iter().map(|g| GestureId::new(g.as_str())).collect();
            info!(candidates = candidates.len(), "scheduling asset preload");
            self.preload = Some(self.prober.spawn_after(self.warmup, candidates));
        }
        Ok(())
    }

    /// Translates without playing.
    pub fn translate(&mut self, text: &str) -> Translation {
        self.engine.translate(text)
    }

    /// Translates `text` and replaces whatever is playing with the result.
    pub fn submit_text(&mut self, text: &str) -> Result<Translation, PlaybackError> {
        let translation = self.engine.translate(text);
        self.scheduler.submit(translation.gestures.clone())?;
        Ok(translation)
    }

    /// Listens once in the session locale and plays the transcript.
    pub async fn submit_voice<V: VoiceInput + ?Sized>(&mut self, voice: &V) -> Result<Translation, SessionError> {
        let transcript = match voice.recognize(self.locale).await {
            Ok(text) if text.trim().is_empty() => return Err(VoiceError::NoSpeech.into()),
            Ok(text) => text,
            Err(e) => {
                warn!(locale = %self.locale, error = %e, "voice input failed");
                return Err(e.into());
            }
        };
        info!(locale = %self.locale, transcript = %transcript, "voice input");
        Ok(self.submit_text(&transcript)?)
    }

    /// Plays one gesture on its own, looked up the same way a typed word is.
    pub fn play_single(&mut self, word: &str) -> Result<GestureId, SessionError> {
        let gesture = match self.engine.lexicon().gesture(word.trim()) {
            Some(id) => id,
            None => match self.engine.resolve(&word.trim().to_lowercase()) {
                Resolution::Resolved(id) => id,
                Resolution::Unresolved(w) => return Err(SessionError::NoGesture(w)),
            },
        };
        self.scheduler.submit(vec![gesture.clone()])?;
        Ok(gesture)
    }

    pub fn stop(&self) {
        self.scheduler.cancel();
    }

    pub fn notice(&self) -> Option<&str> {
        self.engine.notice().message()
    }

    pub fn clear_notice(&mut self) {
        self.engine.clear_notice();
    }

    pub fn preload_report(&self) -> PreloadReport {
        self.prober.report()
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.scheduler.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.scheduler.subscribe()
    }

    /// Stops playback and background work; `initialize` may be called again.
    pub fn dispose(&mut self) {
        self.scheduler.cancel();
        if let Some(handle) = self.preload.take() {
            handle.abort();
        }
        self.lifecycle.dispose();
    }
}

impl<R: Renderer + 'static, P: AssetProbe + 'static> Drop for SignSession<R, P> {
    fn drop(&mut self) {
        if let Some(handle) = self.preload.take() {
            handle.abort();
        }
    }
}
