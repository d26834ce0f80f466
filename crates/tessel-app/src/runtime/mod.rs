//! The event loop between the native layer and the sync core.
//!
//! Retile triggers are coalesced on a trailing edge: each trigger pushes
//! the deadline back by `sync.coalesce_ms`, and one sync runs once the
//! stream has been quiet that long.

pub mod input;

use std::future::pending;
use std::time::Duration;

use tessel_config::TesselConfig;
use tessel_tiling::{NativeBridge, NativeEvent, RetileReason, WmState};
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info};

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub events: usize,
    pub syncs: usize,
}

pub struct SyncLoop<B: NativeBridge> {
    state: WmState,
    bridge: B,
    coalesce: Duration,
    summary: LoopSummary,
}

impl<B: NativeBridge> SyncLoop<B> {
    pub fn new(state: WmState, bridge: B, config: &TesselConfig) -> Self {
        Self {
            state,
            bridge,
            coalesce: Duration::from_millis(config.sync.coalesce_ms),
            summary: LoopSummary::default(),
        }
    }

    /// Sync once for the startup snapshot, then follow `events` until the
    /// stream closes. A retile still pending at that point is flushed.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<NativeEvent>,
        settings: Option<watch::Receiver<TesselConfig>>,
    ) -> (WmState, LoopSummary) {
        self.sync_now("startup snapshot");

        let mut settings = settings;
        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                received = events.recv() => match received {
                    Some(event) => {
                        self.summary.events += 1;
                        if let Some(reason) = self.state.apply(event) {
                            deadline = Some(self.schedule(reason));
                        }
                    }
                    None => break,
                },
                changed = wait_for_settings(&mut settings) => {
                    match changed {
                        Some(config) => {
                            self.coalesce = Duration::from_millis(config.sync.coalesce_ms);
                            let reason = self.state.apply_settings(&config);
                            deadline = Some(self.schedule(reason));
                        }
                        None => {
                            debug!("settings channel closed, live reload disabled");
                            settings = None;
                        }
                    }
                },
                _ = wait_until(deadline) => {
                    deadline = None;
                    self.sync_now("coalesced triggers");
                }
            }
        }

        if deadline.is_some() {
            self.sync_now("pending before shutdown");
        }
        info!(
            events = self.summary.events,
            syncs = self.summary.syncs,
            "sync loop finished"
        );
        (self.state, self.summary)
    }

    fn schedule(&self, reason: RetileReason) -> Instant {
        debug!(?reason, "retile scheduled");
        Instant::now() + self.coalesce
    }

    fn sync_now(&mut self, cause: &str) {
        let positions = self.state.sync(&self.bridge);
        self.summary.syncs += 1;
        debug!(cause, windows = positions.len(), "positions pushed");
    }
}

async fn wait_for_settings(
    settings: &mut Option<watch::Receiver<TesselConfig>>,
) -> Option<TesselConfig> {
    match settings {
        Some(rx) => match rx.changed().await {
            Ok(()) => Some(rx.borrow_and_update().clone()),
            Err(_) => None,
        },
        None => pending().await,
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tessel_common::{AppEntry, FocusedApp, HostMetrics, WindowHandle};
    use tessel_tiling::platform::RecordingBridge;
    use tessel_tiling::{NativeSnapshot, Reservation, WmNode};

    fn h(n: isize) -> WindowHandle {
        WindowHandle(n)
    }

    fn config(coalesce_ms: u64) -> TesselConfig {
        let mut config = TesselConfig::default();
        config.sync.coalesce_ms = coalesce_ms;
        config
    }

    fn state(config: &TesselConfig) -> WmState {
        WmState::new(
            NativeSnapshot {
                layout: Some(WmNode::leaf(h(1))),
                focused_app: FocusedApp::default(),
                open_apps: Vec::new(),
                host: HostMetrics {
                    width: 800.0,
                    height: 600.0,
                    ..HostMetrics::default()
                },
            },
            config,
        )
    }

    // =========================================================================
    // Coalescing
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn burst_of_triggers_is_coalesced_into_one_sync() {
        let config = config(50);
        let bridge = Arc::new(RecordingBridge::default());
        let (tx, rx) = mpsc::channel(16);

        tx.send(NativeEvent::ForceRetiling).await.unwrap();
        tx.send(NativeEvent::LayoutChanged(Some(WmNode::horizontal(vec![
            WmNode::leaf(h(1)),
            WmNode::leaf(h(2)),
        ]))))
        .await
        .unwrap();
        tx.send(NativeEvent::ForceRetiling).await.unwrap();
        drop(tx);

        let sync_loop = SyncLoop::new(state(&config), bridge.clone(), &config);
        let (state, summary) = sync_loop.run(rx, None).await;

        assert_eq!(summary.events, 3);
        // startup + one coalesced batch
        assert_eq!(summary.syncs, 2);
        assert_eq!(bridge.calls().len(), 2);
        assert_eq!(bridge.last().unwrap().len(), 2);
        assert_eq!(state.forced_retiling(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn non_retiling_events_do_not_sync() {
        let config = config(0);
        let bridge = Arc::new(RecordingBridge::default());
        let (tx, rx) = mpsc::channel(16);

        tx.send(NativeEvent::OpenAppsChanged(Vec::new())).await.unwrap();
        tx.send(NativeEvent::FocusChanged(FocusedApp {
            hwnd: h(1),
            ..FocusedApp::default()
        }))
        .await
        .unwrap();
        drop(tx);

        let (_, summary) = SyncLoop::new(state(&config), bridge.clone(), &config)
            .run(rx, None)
            .await;
        assert_eq!(summary.events, 2);
        assert_eq!(summary.syncs, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_triggers_each_sync() {
        let config = config(10);
        let bridge = Arc::new(RecordingBridge::default());
        let (tx, rx) = mpsc::channel(16);

        let sync_loop = SyncLoop::new(state(&config), bridge.clone(), &config);
        let handle = tokio::spawn(sync_loop.run(rx, None));

        tx.send(NativeEvent::ForceRetiling).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        tx.send(NativeEvent::ForceRetiling).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        drop(tx);

        let (_, summary) = handle.await.unwrap();
        assert_eq!(summary.syncs, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn trigger_inside_window_pushes_deadline_back() {
        let config = config(50);
        let bridge = Arc::new(RecordingBridge::default());
        let (tx, rx) = mpsc::channel(16);

        let sync_loop = SyncLoop::new(state(&config), bridge.clone(), &config);
        let handle = tokio::spawn(sync_loop.run(rx, None));

        tx.send(NativeEvent::ForceRetiling).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        tx.send(NativeEvent::ForceRetiling).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        // 60ms after the first trigger, 30ms after the second: still quiet
        assert_eq!(bridge.calls().len(), 1);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(bridge.calls().len(), 2);

        drop(tx);
        let (_, summary) = handle.await.unwrap();
        assert_eq!(summary.syncs, 2);
    }

    // =========================================================================
    // Delivery
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn flooded_queue_keeps_every_update() {
        let config = config(0);
        let bridge = Arc::new(RecordingBridge::default());
        let (tx, rx) = mpsc::channel(4);

        let producer = tokio::spawn(async move {
            tx.send(NativeEvent::ReservationChanged(Some(Reservation::Right)))
                .await
                .unwrap();
            for _ in 0..32 {
                let app = AppEntry {
                    path: "C:\\a.exe".into(),
                    umid: None,
                    windows: Vec::new(),
                };
                tx.send(NativeEvent::OpenAppsChanged(vec![app]))
                    .await
                    .unwrap();
            }
        });

        let (state, summary) = SyncLoop::new(state(&config), bridge.clone(), &config)
            .run(rx, None)
            .await;
        producer.await.unwrap();

        assert_eq!(summary.events, 33);
        assert_eq!(state.reservation(), Some(Reservation::Right));
        assert_eq!(state.open_apps().len(), 1);
    }

    // =========================================================================
    // Settings
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn settings_reload_triggers_sync_with_new_border() {
        let config = config(0);
        let bridge = Arc::new(RecordingBridge::default());
        let (tx, rx) = mpsc::channel(16);
        let (settings_tx, settings_rx) = watch::channel(config.clone());

        let sync_loop = SyncLoop::new(state(&config), bridge.clone(), &config);
        let handle = tokio::spawn(sync_loop.run(rx, Some(settings_rx)));

        let mut reloaded = config.clone();
        reloaded.border.enabled = false;
        reloaded.layout.padding = 0.0;
        settings_tx.send(reloaded).unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        drop(settings_tx);
        drop(tx);

        let (_, summary) = handle.await.unwrap();
        assert_eq!(summary.syncs, 2);
        let last = bridge.last().unwrap();
        assert_eq!(last["1"].left, 0);
        assert_eq!(last["1"].right, 800);
    }
}
