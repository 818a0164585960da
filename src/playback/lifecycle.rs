// src/playback/lifecycle.rs
use crate::config::PlayerConfig;
use crate::error::{PlaybackError, RendererError};
use crate::playback::renderer::Renderer;
use crate::playback::scheduler::StatusMessage;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    Uninitialized,
    Initializing { attempt: u32 },
    Ready,
    /// Terminal until `dispose` and a fresh `initialize`.
    Failed(StatusMessage),
}

/// Brings a renderer up with a bounded number of retries.
///
/// Each attempt gets `attempt_timeout`; all attempts together get
/// `overall_timeout`. Exhausting the retries ends in `SetupFailed`, hitting
/// the overall ceiling ends in `FailedToLoad`.
#[derive(Debug, Clone)]
pub struct RendererLifecycle {
    state: RendererState,
    attempt_timeout: Duration,
    overall_timeout: Duration,
    retry_delay: Duration,
    max_retries: u32,
}

impl RendererLifecycle {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            state: RendererState::Uninitialized,
            attempt_timeout: config.attempt_timeout(),
            overall_timeout: config.overall_timeout(),
            retry_delay: config.retry_delay(),
            max_retries: config.max_retries,
        }
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == RendererState::Ready
    }

    pub fn failure(&self) -> Option<StatusMessage> {
        match self.state {
            RendererState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn dispose(&mut self) {
        self.state = RendererState::Uninitialized;
    }

    /// Runs initialization attempts, reporting progress through `on_status`.
    pub async fn initialize<R, F>(&mut self, renderer: &R, mut on_status: F) -> Result<(), PlaybackError>
    where
        R: Renderer + ?Sized,
        F: FnMut(StatusMessage),
    {
        if self.is_ready() {
            return Ok(());
        }
        on_status(StatusMessage::Loading);

        let ceiling = self.overall_timeout;
        let outcome = timeout(ceiling, self.attempts(renderer, &mut on_status)).await;

        let message = match outcome {
            Ok(Ok(())) => {
                self.state = RendererState::Ready;
                on_status(StatusMessage::Ready);
                info!("renderer ready");
                return Ok(());
            }
            Ok(Err(_)) => StatusMessage::SetupFailed,
            Err(_) => {
                error!(ceiling_ms = ceiling.as_millis() as u64, "renderer did not load in time");
                StatusMessage::FailedToLoad
            }
        };
        self.state = RendererState::Failed(message);
        on_status(message);
        Err(PlaybackError::RendererUnavailable(message.to_string()))
    }

    async fn attempts<R, F>(&mut self, renderer: &R, on_status: &mut F) -> Result<(), RendererError>
    where
        R: Renderer + ?Sized,
        F: FnMut(StatusMessage),
    {
        let mut last_error = RendererError::Timeout(self.attempt_timeout.as_millis() as u64);
        for attempt in 0..=self.max_retries {
            self.state = RendererState::Initializing { attempt: attempt + 1 };
            match timeout(self.attempt_timeout, renderer.initialize()).await {
                Ok(Ok(())) => return Ok(()),
                Ok(Err(e)) => {
                    warn!(attempt = attempt + 1, error = %e, "renderer initialization failed");
                    last_error = e;
                }
                Err(_) => {
                    warn!(attempt = attempt + 1, "renderer initialization timed out");
                    on_status(StatusMessage::RenderTimeout);
                    last_error = RendererError::Timeout(self.attempt_timeout.as_millis() as u64);
                }
            }
            if attempt < self.max_retries {
                on_status(StatusMessage::Retrying);
                sleep(self.retry_delay).await;
            }
        }
        error!(attempts = self.max_retries + 1, error = %last_error, "giving up on renderer");
        Err(last_error)
    }
}
