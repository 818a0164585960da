// src/playback/testing.rs
//! Scripted renderer and probe for unit tests.

use crate::core::types::AssetLocator;
use crate::error::RendererError;
use crate::playback::renderer::{AssetProbe, Renderer, RendererStatus};
use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// How one `initialize` call behaves.
#[derive(Debug, Clone, Copy)]
pub enum InitOutcome {
    Ready,
    Fail,
    Hang,
}

pub struct MockRenderer {
    played: Mutex<Vec<String>>,
    status: Mutex<RendererStatus>,
    failing: Mutex<HashSet<String>>,
    play_duration: Mutex<Duration>,
    init_script: Mutex<VecDeque<InitOutcome>>,
    init_calls: AtomicUsize,
    aborts: AtomicUsize,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self {
            played: Mutex::new(Vec::new()),
            status: Mutex::new(RendererStatus::Ready),
            failing: Mutex::new(HashSet::new()),
            play_duration: Mutex::new(Duration::ZERO),
            init_script: Mutex::new(VecDeque::new()),
            init_calls: AtomicUsize::new(0),
            aborts: AtomicUsize::new(0),
        }
    }

    /// Outcomes for successive `initialize` calls; once exhausted, calls succeed.
    pub fn with_init_script(self, script: &[InitOutcome]) -> Self {
        *self.init_script.lock().unwrap() = script.iter().copied().collect();
        self
    }

    pub fn set_status(&self, status: RendererStatus) {
        *self.status.lock().unwrap() = status;
    }

    pub fn fail_on(&self, locator: &str) {
        self.failing.lock().unwrap().insert(locator.to_string());
    }

    pub fn set_play_duration(&self, duration: Duration) {
        *self.play_duration.lock().unwrap() = duration;
    }

    pub fn played(&self) -> Vec<String> {
        self.played.lock().unwrap().clone()
    }

    pub fn aborts(&self) -> usize {
        self.aborts.load(Ordering::SeqCst)
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Renderer for MockRenderer {
    async fn initialize(&self) -> Result<(), RendererError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.init_script.lock().unwrap().pop_front().unwrap_or(InitOutcome::Ready);
        match outcome {
            InitOutcome::Ready => Ok(()),
            InitOutcome::Fail => Err(RendererError::Init("no canvas".into())),
            InitOutcome::Hang => std::future::pending().await,
        }
    }

    async fn play_asset(&self, locator: &AssetLocator) -> Result<(), RendererError> {
        self.played.lock().unwrap().push(locator.as_str().to_string());
        let duration = *self.play_duration.lock().unwrap();
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
        if self.failing.lock().unwrap().contains(locator.as_str()) {
            return Err(RendererError::Dispatch {
                locator: locator.as_str().to_string(),
                reason: "scripted failure".into(),
            });
        }
        Ok(())
    }

    fn abort(&self) {
        self.aborts.fetch_add(1, Ordering::SeqCst);
    }

    fn status(&self) -> RendererStatus {
        *self.status.lock().unwrap()
    }
}

/// Probe that knows a fixed set of asset names.
pub struct MockProbe {
    present: HashSet<String>,
    broken: HashSet<String>,
}

impl MockProbe {
    pub fn new(present: &[&str]) -> Self {
        Self { present: present.iter().map(|s| s.to_string()).collect(), broken: HashSet::new() }
    }

    /// Names whose probe returns an error.
    pub fn with_broken(mut self, broken: &[&str]) -> Self {
        self.broken = broken.iter().map(|s| s.to_string()).collect();
        self
    }
}

#[async_trait]
impl AssetProbe for MockProbe {
    async fn exists(&self, locator: &AssetLocator) -> Result<bool, RendererError> {
        if self.broken.contains(locator.as_str()) {
            return Err(RendererError::Dispatch {
                locator: locator.as_str().to_string(),
                reason: "probe failed".into(),
            });
        }
        Ok(self.present.contains(locator.as_str()))
    }
}
