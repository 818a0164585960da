// src/playback/scheduler.rs
//! Drives a renderer through a gesture sequence, one gesture per tick.
//!
//! All state lives in `SchedulerCore`, a plain state machine behind one
//! mutex. The Tokio side only supplies the clock: a tick task calls
//! `SchedulerCore::tick` once per interval and spawns renderer dispatches,
//! which report back through `SchedulerCore::dispatch_finished`. The lock is
//! never held across an await.

use crate::config::PlayerConfig;
use crate::core::types::GestureId;
use crate::error::{PlaybackError, RendererError};
use crate::playback::job::{Cursor, PlaybackJob};
use crate::playback::lifecycle::RendererLifecycle;
use crate::playback::renderer::{Renderer, RendererStatus};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    /// The renderer failed to initialize; playback is disabled.
    Error,
}

/// Short status line shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    Loading,
    Ready,
    Playing,
    Error,
    InvalidAsset,
    Retrying,
    RenderTimeout,
    SetupFailed,
    FailedToLoad,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusMessage::Loading => "Loading",
            StatusMessage::Ready => "Ready",
            StatusMessage::Playing => "Playing",
            StatusMessage::Error => "Error",
            StatusMessage::InvalidAsset => "Error - Invalid asset",
            StatusMessage::Retrying => "Retrying...",
            StatusMessage::RenderTimeout => "Render timeout",
            StatusMessage::SetupFailed => "Timeout - Setup failed",
            StatusMessage::FailedToLoad => "Failed to load",
        })
    }
}

/// Point-in-time view of the scheduler for UI feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub phase: Phase,
    pub message: StatusMessage,
    pub cursor: Cursor,
    /// The gesture most recently dispatched, while a job is active.
    pub highlighted: Option<(usize, GestureId)>,
    /// 1-based number of the last gesture the renderer accepted.
    pub sign_number: usize,
    pub job_len: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Tick {
    /// No job, or the tick belongs to a superseded job.
    Idle,
    Finished,
    Dispatch { index: usize, gesture: GestureId },
    /// Renderer reported an invalid asset and was marked ready again.
    Recovered,
    /// Renderer still busy.
    Waiting,
}

#[derive(Debug)]
pub(crate) struct SchedulerCore {
    job: Option<PlaybackJob>,
    /// Job whose dispatch results are still accepted.
    live_job: Option<u64>,
    next_job_id: u64,
    renderer_ready: bool,
    phase: Phase,
    message: StatusMessage,
    highlighted: Option<(usize, GestureId)>,
    sign_number: usize,
}

impl SchedulerCore {
    pub(crate) fn new() -> Self {
        Self {
            job: None,
            live_job: None,
            next_job_id: 1,
            renderer_ready: true,
            phase: Phase::Idle,
            message: StatusMessage::Loading,
            highlighted: None,
            sign_number: 0,
        }
    }

    pub(crate) fn submit(&mut self, gestures: Vec<GestureId>) -> Result<u64, PlaybackError> {
        if self.phase == Phase::Error {
            return Err(PlaybackError::RendererUnavailable(self.message.to_string()));
        }
        let id = self.next_job_id;
        self.next_job_id += 1;

        let mut job = PlaybackJob::new(id, gestures);
        job.start();
        self.job = Some(job);
        self.live_job = Some(id);
        // The previous asset may still be animating; wait for the renderer.
        self.renderer_ready = false;
        self.phase = Phase::Playing;
        self.message = StatusMessage::Playing;
        self.highlighted = None;
        self.sign_number = 0;
        Ok(id)
    }

    pub(crate) fn tick(&mut self, job_id: u64, status: RendererStatus) -> Tick {
        let Some(job) = self.job.as_mut().filter(|j| j.id() == job_id) else {
            return Tick::Idle;
        };

        let Some((index, gesture)) = job.current().map(|(i, g)| (i, g.clone())) else {
            self.job = None;
            self.phase = Phase::Idle;
            self.highlighted = None;
            self.message = StatusMessage::Ready;
            return Tick::Finished;
        };

        if !self.renderer_ready {
            match status {
                RendererStatus::Playing => return Tick::Waiting,
                RendererStatus::Invalid => {
                    self.renderer_ready = true;
                    self.message = StatusMessage::InvalidAsset;
                    return Tick::Recovered;
                }
                RendererStatus::Ready => self.renderer_ready = true,
            }
        }

        self.renderer_ready = false;
        job.advance();
        self.highlighted = Some((index, gesture.clone()));
        self.message = StatusMessage::Playing;
        Tick::Dispatch { index, gesture }
    }

    pub(crate) fn dispatch_finished(
        &mut self,
        job_id: u64,
        index: usize,
        result: Result<(), RendererError>,
    ) {
        if self.live_job != Some(job_id) {
            return;
        }
        match result {
            Ok(()) => self.sign_number = index + 1,
            Err(e) => {
                warn!(job_id, index, error = %e, "gesture dispatch failed");
                self.renderer_ready = true;
                self.message = StatusMessage::Error;
            }
        }
    }

    /// Returns false, changing nothing, when no job is active.
    pub(crate) fn cancel(&mut self) -> bool {
        let Some(mut job) = self.job.take() else {
            return false;
        };
        job.reset();
        self.live_job = None;
        self.renderer_ready = true;
        self.phase = Phase::Idle;
        self.highlighted = None;
        self.message = StatusMessage::Ready;
        true
    }

    pub(crate) fn set_message(&mut self, message: StatusMessage) {
        self.message = message;
    }

    pub(crate) fn mark_available(&mut self) {
        if self.phase == Phase::Error {
            self.phase = Phase::Idle;
        }
        self.message = StatusMessage::Ready;
    }

    pub(crate) fn mark_unavailable(&mut self, message: StatusMessage) {
        self.cancel();
        self.phase = Phase::Error;
        self.message = message;
    }

    pub(crate) fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            phase: self.phase,
            message: self.message,
            cursor: self.job.as_ref().map_or(Cursor::NotStarted, PlaybackJob::cursor),
            highlighted: self.highlighted.clone(),
            sign_number: self.sign_number,
            job_len: self.job.as_ref().map_or(0, PlaybackJob::len),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Core state plus the channel snapshots are published on.
struct Shared {
    core: Mutex<SchedulerCore>,
    updates: watch::Sender<PlaybackSnapshot>,
}

impl Shared {
    fn update<T>(&self, f: impl FnOnce(&mut SchedulerCore) -> T) -> T {
        let (out, snapshot) = {
            let mut core = lock(&self.core);
            let out = f(&mut core);
            (out, core.snapshot())
        };
        self.updates.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
        out
    }
}

/// Plays gesture sequences through a renderer it exclusively owns.
///
/// `submit` and `cancel` spawn and abort Tokio tasks, so they must be called
/// from inside a runtime.
pub struct PlaybackScheduler<R: Renderer + 'static> {
    renderer: Arc<R>,
    shared: Arc<Shared>,
    ticker: Mutex<Option<JoinHandle<()>>>,
    tick_interval: Duration,
    sentinel: GestureId,
}

impl<R: Renderer + 'static> PlaybackScheduler<R> {
    pub fn new(renderer: Arc<R>, config: &PlayerConfig) -> Self {
        let core = SchedulerCore::new();
        let (updates, _) = watch::channel(core.snapshot());
        Self {
            renderer,
            shared: Arc::new(Shared { core: Mutex::new(core), updates }),
            ticker: Mutex::new(None),
            tick_interval: config.tick_interval(),
            sentinel: GestureId::new(config.sentinel_gesture.as_str()),
        }
    }

    pub fn renderer(&self) -> &Arc<R> {
        &self.renderer
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        lock(&self.shared.core).snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.shared.updates.subscribe()
    }

    /// Runs renderer initialization and records its outcome. A terminal
    /// failure disables `submit` until a later call succeeds.
    pub async fn initialize(&self, lifecycle: &mut RendererLifecycle) -> Result<(), PlaybackError> {
        self.shared.update(|core| core.set_message(StatusMessage::Loading));
        let shared = &self.shared;
        let result = lifecycle
            .initialize(self.renderer.as_ref(), |message| {
                shared.update(|core| core.set_message(message))
            })
            .await;
        match &result {
            Ok(()) => self.shared.update(SchedulerCore::mark_available),
            Err(_) => {
                let message = lifecycle.failure().unwrap_or(StatusMessage::FailedToLoad);
                self.shared.update(|core| core.mark_unavailable(message));
            }
        }
        result
    }

    /// Replaces whatever is playing with `gestures`. An empty sequence plays
    /// the sentinel gesture instead.
    pub fn submit(&self, gestures: Vec<GestureId>) -> Result<u64, PlaybackError> {
        let gestures = if gestures.is_empty() { vec![self.sentinel.clone()] } else { gestures };
        let len = gestures.len();

        let mut ticker = lock(&self.ticker);
        if let Some(handle) = ticker.take() {
            handle.abort();
        }
        let (was_playing, job_id) = self.shared.update(|core| {
            let was_playing = core.cancel();
            core.submit(gestures).map(|id| (was_playing, id))
        })?;
        if was_playing {
            self.renderer.abort();
        }

        info!(job_id, len, "playback started");
        *ticker = Some(tokio::spawn(run_ticks(
            Arc::clone(&self.renderer),
            Arc::clone(&self.shared),
            job_id,
            self.tick_interval,
        )));
        Ok(job_id)
    }

    /// Stops playback and aborts the renderer. Does nothing when idle.
    pub fn cancel(&self) {
        let mut ticker = lock(&self.ticker);
        if let Some(handle) = ticker.take() {
            handle.abort();
        }
        if self.shared.update(SchedulerCore::cancel) {
            self.renderer.abort();
            info!("playback cancelled");
        }
    }
}

impl<R: Renderer + 'static> Drop for PlaybackScheduler<R> {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.ticker).take() {
            handle.abort();
        }
    }
}

async fn run_ticks<R: Renderer + 'static>(
    renderer: Arc<R>,
    shared: Arc<Shared>,
    job_id: u64,
    period: Duration,
) {
    let period = period.max(Duration::from_millis(1));
    let mut ticks = interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticks.tick().await;
        let status = renderer.status();
        match shared.update(|core| core.tick(job_id, status)) {
            Tick::Dispatch { index, gesture } => {
                debug!(job_id, index, gesture = %gesture, "dispatching gesture");
                let renderer = Arc::clone(&renderer);
                let shared = Arc::clone(&shared);
                tokio::spawn(async move {
                    let result = renderer.play_asset(&gesture.locator()).await;
                    shared.update(|core| core.dispatch_finished(job_id, index, result));
                });
            }
            Tick::Recovered => warn!(job_id, "renderer reported an invalid asset, skipping it"),
            Tick::Waiting => {}
            Tick::Finished => {
                info!(job_id, "playback finished");
                break;
            }
            Tick::Idle => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::testing::MockRenderer;

    fn ids(names: &[&str]) -> Vec<GestureId> {
        names.iter().map(|n| GestureId::new(*n)).collect()
    }

    fn scheduler(renderer: &Arc<MockRenderer>) -> PlaybackScheduler<MockRenderer> {
        PlaybackScheduler::new(Arc::clone(renderer), &PlayerConfig::default())
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    // --- state machine, no clock ---

    #[test]
    fn core_dispatches_then_finishes() {
        let mut core = SchedulerCore::new();
        let id = core.submit(ids(&["i", "eat"])).unwrap();
        assert_eq!(
            core.tick(id, RendererStatus::Ready),
            Tick::Dispatch { index: 0, gesture: GestureId::new("i") }
        );
        assert_eq!(core.tick(id, RendererStatus::Playing), Tick::Waiting);
        assert_eq!(
            core.tick(id, RendererStatus::Ready),
            Tick::Dispatch { index: 1, gesture: GestureId::new("eat") }
        );
        assert_eq!(core.tick(id, RendererStatus::Playing), Tick::Finished);
        let snap = core.snapshot();
        assert_eq!(snap.phase, Phase::Idle);
        assert_eq!(snap.highlighted, None);
        assert_eq!(core.tick(id, RendererStatus::Ready), Tick::Idle);
    }

    #[test]
    fn core_new_job_waits_for_a_busy_renderer() {
        let mut core = SchedulerCore::new();
        let id = core.submit(ids(&["good", "morning"])).unwrap();
        assert_eq!(core.tick(id, RendererStatus::Playing), Tick::Waiting);
        assert_eq!(core.snapshot().cursor, Cursor::At(0));
        assert_eq!(
            core.tick(id, RendererStatus::Ready),
            Tick::Dispatch { index: 0, gesture: GestureId::new("good") }
        );
    }

    #[test]
    fn core_invalid_asset_frees_renderer_without_rewinding() {
        let mut core = SchedulerCore::new();
        let id = core.submit(ids(&["a", "b"])).unwrap();
        core.tick(id, RendererStatus::Ready);
        assert_eq!(core.tick(id, RendererStatus::Invalid), Tick::Recovered);
        assert_eq!(core.snapshot().message, StatusMessage::InvalidAsset);
        assert_eq!(core.snapshot().cursor, Cursor::At(1));
        // The next tick goes straight to the following gesture.
        assert_eq!(
            core.tick(id, RendererStatus::Invalid),
            Tick::Dispatch { index: 1, gesture: GestureId::new("b") }
        );
    }

    #[test]
    fn core_ignores_ticks_and_results_from_superseded_jobs() {
        let mut core = SchedulerCore::new();
        let old = core.submit(ids(&["a", "b"])).unwrap();
        core.tick(old, RendererStatus::Ready);
        core.cancel();
        let new = core.submit(ids(&["c"])).unwrap();
        assert_eq!(core.tick(old, RendererStatus::Ready), Tick::Idle);
        core.dispatch_finished(old, 0, Err(RendererError::Aborted));
        assert_eq!(core.snapshot().message, StatusMessage::Playing);
        assert_eq!(core.snapshot().cursor, Cursor::At(0));
        assert!(matches!(core.tick(new, RendererStatus::Ready), Tick::Dispatch { index: 0, .. }));
    }

    #[test]
    fn core_cancel_on_idle_changes_nothing() {
        let mut core = SchedulerCore::new();
        let before = core.snapshot();
        assert!(!core.cancel());
        assert!(!core.cancel());
        assert_eq!(core.snapshot(), before);
    }

    #[test]
    fn core_refuses_jobs_after_terminal_failure() {
        let mut core = SchedulerCore::new();
        core.mark_unavailable(StatusMessage::SetupFailed);
        assert_eq!(
            core.submit(ids(&["a"])),
            Err(PlaybackError::RendererUnavailable("Timeout - Setup failed".into()))
        );
        core.mark_available();
        assert!(core.submit(ids(&["a"])).is_ok());
    }

    // --- driven by the paused Tokio clock ---

    #[tokio::test(start_paused = true)]
    async fn plays_every_gesture_in_order_then_goes_idle() {
        let renderer = Arc::new(MockRenderer::new());
        let scheduler = scheduler(&renderer);
        scheduler.submit(ids(&["i", "food", "eat"])).unwrap();
        assert_eq!(scheduler.snapshot().phase, Phase::Playing);

        sleep_ms(4500).await;
        assert_eq!(renderer.played(), vec!["I", "food", "eat"]);
        let snap = scheduler.snapshot();
        assert_eq!(snap.phase, Phase::Idle);
        assert_eq!(snap.message, StatusMessage::Ready);
        assert_eq!(snap.sign_number, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_submission_plays_the_sentinel() {
        let renderer = Arc::new(MockRenderer::new());
        let scheduler = scheduler(&renderer);
        scheduler.submit(Vec::new()).unwrap();
        sleep_ms(2500).await;
        assert_eq!(renderer.played(), vec!["hello"]);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_while_the_renderer_is_busy() {
        let renderer = Arc::new(MockRenderer::new());
        renderer.set_status(RendererStatus::Playing);
        let scheduler = scheduler(&renderer);
        scheduler.submit(ids(&["good", "morning"])).unwrap();

        sleep_ms(3500).await;
        assert!(renderer.played().is_empty());
        assert_eq!(scheduler.snapshot().highlighted, None);

        renderer.set_status(RendererStatus::Ready);
        sleep_ms(1000).await;
        assert_eq!(renderer.played(), vec!["good"]);
        assert_eq!(scheduler.snapshot().highlighted, Some((0, GestureId::new("good"))));

        sleep_ms(1000).await;
        assert_eq!(renderer.played(), vec!["good", "morning"]);
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_asset_is_skipped_not_fatal() {
        let renderer = Arc::new(MockRenderer::new());
        let scheduler = scheduler(&renderer);
        scheduler.submit(ids(&["hello", "good", "bye"])).unwrap();

        sleep_ms(1500).await;
        renderer.set_status(RendererStatus::Playing);
        sleep_ms(1000).await;
        assert_eq!(renderer.played(), vec!["hello"]);

        renderer.set_status(RendererStatus::Invalid);
        sleep_ms(1000).await;
        assert_eq!(renderer.played(), vec!["hello"]);
        let snap = scheduler.snapshot();
        assert_eq!(snap.phase, Phase::Playing);
        assert_eq!(snap.message, StatusMessage::InvalidAsset);

        sleep_ms(1000).await;
        assert_eq!(renderer.played(), vec!["hello", "good"]);
    }

    #[tokio::test(start_paused = true)]
    async fn dispatch_failure_is_reported_and_playback_continues() {
        let renderer = Arc::new(MockRenderer::new());
        renderer.fail_on("good");
        let scheduler = scheduler(&renderer);
        scheduler.submit(ids(&["hello", "good", "bye"])).unwrap();

        sleep_ms(2500).await;
        assert_eq!(scheduler.snapshot().message, StatusMessage::Error);

        sleep_ms(2000).await;
        assert_eq!(renderer.played(), vec!["hello", "good", "bye"]);
        assert_eq!(scheduler.snapshot().phase, Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_on_idle_is_a_no_op() {
        let renderer = Arc::new(MockRenderer::new());
        let scheduler = scheduler(&renderer);
        let before = scheduler.snapshot();
        scheduler.cancel();
        scheduler.cancel();
        assert_eq!(scheduler.snapshot(), before);
        assert_eq!(renderer.aborts(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_dispatching_and_aborts_renderer() {
        let renderer = Arc::new(MockRenderer::new());
        let scheduler = scheduler(&renderer);
        scheduler.submit(ids(&["a", "b", "c", "d"])).unwrap();

        sleep_ms(1500).await;
        scheduler.cancel();
        let snap = scheduler.snapshot();
        assert_eq!(snap.phase, Phase::Idle);
        assert_eq!(snap.cursor, Cursor::NotStarted);
        assert_eq!(renderer.aborts(), 1);

        sleep_ms(5000).await;
        assert_eq!(renderer.played(), vec!["A"]);
    }

    #[tokio::test(start_paused = true)]
    async fn new_submission_supersedes_the_old_one() {
        let renderer = Arc::new(MockRenderer::new());
        let scheduler = scheduler(&renderer);
        scheduler.submit(ids(&["one", "two", "three", "four", "five"])).unwrap();

        sleep_ms(2500).await;
        scheduler.submit(ids(&["yes", "no"])).unwrap();
        assert_eq!(scheduler.snapshot().cursor, Cursor::At(0));
        assert_eq!(scheduler.snapshot().job_len, 2);
        assert_eq!(renderer.aborts(), 1);

        sleep_ms(5000).await;
        assert_eq!(renderer.played(), vec!["one", "two", "yes", "no"]);
    }

    #[tokio::test(start_paused = true)]
    async fn late_results_from_a_cancelled_job_are_discarded() {
        let renderer = Arc::new(MockRenderer::new());
        renderer.set_play_duration(Duration::from_secs(3));
        renderer.fail_on("good");
        let scheduler = scheduler(&renderer);
        scheduler.submit(ids(&["good"])).unwrap();

        sleep_ms(1500).await;
        scheduler.cancel();
        sleep_ms(5000).await;
        assert_eq!(scheduler.snapshot().message, StatusMessage::Ready);
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_snapshots_to_subscribers() {
        let renderer = Arc::new(MockRenderer::new());
        let scheduler = scheduler(&renderer);
        let mut updates = scheduler.subscribe();
        scheduler.submit(ids(&["hello"])).unwrap();

        let done = updates
            .wait_for(|s| s.phase == Phase::Idle && s.sign_number == 1)
            .await
            .unwrap()
            .clone();
        assert_eq!(done.message, StatusMessage::Ready);
    }
}
