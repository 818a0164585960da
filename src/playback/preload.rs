// src/playback/preload.rs
//! Background existence check for the most common gesture assets.

use crate::core::types::{AssetLocator, GestureId};
use crate::error::RendererError;
use crate::playback::renderer::AssetProbe;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
    /// Gestures whose asset was found.
    pub confirmed: BTreeSet<String>,
    pub probed: usize,
    pub total: usize,
}

impl PreloadReport {
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.probed * 100) / self.total).min(100) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.probed >= self.total
    }

    pub fn is_confirmed(&self, gesture: &GestureId) -> bool {
        self.confirmed.contains(gesture.as_str())
    }
}

/// Probes candidates one by one and keeps a shared report current while it
/// runs. Probe failures count as "not found".
pub struct PreloadProber<P: AssetProbe + 'static> {
    probe: Arc<P>,
    report: Arc<Mutex<PreloadReport>>,
}

impl<P: AssetProbe + 'static> PreloadProber<P> {
    pub fn new(probe: Arc<P>) -> Self {
        Self { probe, report: Arc::new(Mutex::new(PreloadReport::default())) }
    }

    pub fn report(&self) -> PreloadReport {
        self.report.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub async fn run(&self, candidates: Vec<GestureId>) -> PreloadReport {
        probe_all(self.probe.as_ref(), &self.report, candidates).await
    }

    /// Waits `warmup`, then probes in the background.
    pub fn spawn_after(&self, warmup: Duration, candidates: Vec<GestureId>) -> JoinHandle<PreloadReport> {
        let probe = Arc::clone(&self.probe);
        let report = Arc::clone(&self.report);
        tokio::spawn(async move {
            tokio::time::sleep(warmup).await;
            probe_all(probe.as_ref(), &report, candidates).await
        })
    }
}

async fn probe_all<P: AssetProbe + ?Sized>(
    probe: &P,
    report: &Mutex<PreloadReport>,
    candidates: Vec<GestureId>,
) -> PreloadReport {
    {
        let mut r = report.lock().unwrap_or_else(PoisonError::into_inner);
        *r = PreloadReport { total: candidates.len(), ..PreloadReport::default() };
    }

    for gesture in candidates {
        let found = match probe.exists(&gesture.locator()).await {
            Ok(found) => found,
            Err(e) => {
                debug!(gesture = %gesture, error = %e, "preload probe failed");
                false
            }
        };
        let mut r = report.lock().unwrap_or_else(PoisonError::into_inner);
        r.probed += 1;
        if found {
            r.confirmed.insert(gesture.as_str().to_string());
        }
    }

    let done = report.lock().unwrap_or_else(PoisonError::into_inner).clone();
    info!(confirmed = done.confirmed.len(), total = done.total, "preload finished");
    done
}

/// Looks for `<asset_dir>/<locator>.<extension>` on disk.
#[derive(Debug, Clone)]
pub struct FileAssetProbe {
    asset_dir: PathBuf,
    extension: String,
}

impl FileAssetProbe {
    pub fn new(asset_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self { asset_dir: asset_dir.into(), extension: extension.into() }
    }

    pub fn path_for(&self, locator: &AssetLocator) -> PathBuf {
        locator.file_path(&self.asset_dir, &self.extension)
    }
}

#[async_trait]
impl AssetProbe for FileAssetProbe {
    async fn exists(&self, locator: &AssetLocator) -> Result<bool, RendererError> {
        match tokio::fs::metadata(self.path_for(locator)).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(RendererError::Dispatch {
                locator: locator.as_str().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
