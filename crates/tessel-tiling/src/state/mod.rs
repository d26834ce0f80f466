//! WmState holds the latest native snapshot and recomputes everything
//! derived from it on demand.

mod events;
mod sync;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{NativeEvent, NativeSnapshot};
    use crate::platform::RecordingBridge;
    use crate::tree::{Reservation, WmNode};
    use tessel_common::{AppEntry, AppWindow, FocusedApp, HostMetrics, Rect, WindowHandle};
    use tessel_config::TesselConfig;

    fn h(n: isize) -> WindowHandle {
        WindowHandle(n)
    }

    fn config() -> TesselConfig {
        let mut config = TesselConfig::default();
        config.layout.gap = 0.0;
        config.layout.padding = 0.0;
        config.border.enabled = false;
        config
    }

    fn host() -> HostMetrics {
        HostMetrics {
            x: 0,
            y: 0,
            scale_factor: 1.0,
            width: 800.0,
            height: 600.0,
        }
    }

    fn focused(hwnd: isize) -> FocusedApp {
        FocusedApp {
            hwnd: h(hwnd),
            ..FocusedApp::default()
        }
    }

    fn state_with(layout: WmNode) -> WmState {
        WmState::new(
            NativeSnapshot {
                layout: Some(layout),
                focused_app: focused(1),
                open_apps: Vec::new(),
                host: host(),
            },
            &config(),
        )
    }

    #[test]
    fn new_state_takes_snapshot() {
        let state = state_with(WmNode::leaf(h(1)));
        assert_eq!(state.layout(), Some(&WmNode::leaf(h(1))));
        assert_eq!(state.focused_app().hwnd, h(1));
        assert_eq!(state.forced_retiling(), 0);
        assert_eq!(state.reservation(), None);
    }

    #[test]
    fn layout_event_replaces_tree_and_retiles() {
        let mut state = state_with(WmNode::leaf(h(1)));
        let tree = WmNode::horizontal(vec![WmNode::leaf(h(1)), WmNode::leaf(h(2))]);
        let reason = state.apply(NativeEvent::LayoutChanged(Some(tree.clone())));
        assert_eq!(reason, Some(RetileReason::LayoutChanged));
        assert_eq!(state.layout(), Some(&tree));
    }

    #[test]
    fn forced_retiling_counter_is_monotonic() {
        let mut state = state_with(WmNode::leaf(h(1)));
        assert_eq!(
            state.apply(NativeEvent::ForceRetiling),
            Some(RetileReason::ForcedRetiling(1))
        );
        assert_eq!(
            state.apply(NativeEvent::ForceRetiling),
            Some(RetileReason::ForcedRetiling(2))
        );
        assert_eq!(state.forced_retiling(), 2);
    }

    #[test]
    fn host_change_retiles() {
        let mut state = state_with(WmNode::leaf(h(1)));
        let moved = HostMetrics { x: 1920, ..host() };
        assert_eq!(
            state.apply(NativeEvent::HostChanged(moved)),
            Some(RetileReason::HostChanged)
        );
        assert_eq!(state.host().x, 1920);
    }

    #[test]
    fn focus_change_alone_does_not_retile() {
        let mut state = state_with(WmNode::leaf(h(1)));
        assert_eq!(state.apply(NativeEvent::FocusChanged(focused(2))), None);
        assert_eq!(state.focused_app().hwnd, h(2));
    }

    #[test]
    fn open_apps_change_does_not_retile() {
        let mut state = state_with(WmNode::leaf(h(1)));
        let apps = vec![AppEntry {
            path: "C:\\a.exe".into(),
            umid: None,
            windows: vec![AppWindow {
                handle: h(1),
                title: "A".into(),
            }],
        }];
        assert_eq!(state.apply(NativeEvent::OpenAppsChanged(apps)), None);
        assert_eq!(state.open_apps().len(), 1);
    }

    #[test]
    fn reservation_follows_focus() {
        let mut state = state_with(WmNode::horizontal(vec![
            WmNode::leaf(h(1)),
            WmNode::leaf(h(2)),
        ]));
        assert_eq!(
            state.apply(NativeEvent::ReservationChanged(Some(Reservation::Right))),
            Some(RetileReason::ReservationChanged)
        );
        assert_eq!(
            state.apply(NativeEvent::FocusChanged(focused(2))),
            Some(RetileReason::ReservationFollowedFocus)
        );
        // Same window refocused: nothing moves.
        assert_eq!(state.apply(NativeEvent::FocusChanged(focused(2))), None);

        let layout = state.render();
        let reserved = layout.find_class("reserved-right").unwrap();
        assert!(reserved.bounds.left >= 600.0);
    }

    #[test]
    fn reservation_shows_when_focus_is_a_background_tab() {
        let mut state = state_with(WmNode::horizontal(vec![
            WmNode::leaf(h(1)),
            WmNode::stack(vec![h(2), h(3)], Some(h(2))),
        ]));
        state.apply(NativeEvent::ReservationChanged(Some(Reservation::Bottom)));
        state.apply(NativeEvent::FocusChanged(focused(3)));

        let layout = state.render();
        let reserved = layout.find_class("reserved-bottom").unwrap();
        assert_eq!(reserved.bounds.left, 400.0);
        assert_eq!(reserved.bounds.top, 300.0);

        let positions = state.sync(&RecordingBridge::default());
        assert_eq!(
            positions["2"],
            Rect {
                top: 0,
                left: 400,
                right: 800,
                bottom: 300,
            }
        );
    }

    #[test]
    fn overlay_tracks_latest_focus_and_layout() {
        let mut state = state_with(WmNode::leaf(h(7)));
        state.apply(NativeEvent::FocusChanged(focused(7)));
        assert!(state.overlay_visible());

        state.apply(NativeEvent::FocusChanged(FocusedApp {
            is_maximized: true,
            ..focused(7)
        }));
        assert!(!state.overlay_visible());

        state.apply(NativeEvent::FocusChanged(focused(7)));
        state.apply(NativeEvent::LayoutChanged(Some(WmNode::leaf(h(9)))));
        assert!(!state.overlay_visible());

        state.apply(NativeEvent::LayoutChanged(None));
        assert!(!state.overlay_visible());
    }

    #[test]
    fn sync_sends_one_batch_with_every_slot() {
        let state = state_with(WmNode::horizontal(vec![
            WmNode::leaf(h(1)),
            WmNode::vertical(vec![WmNode::leaf(h(2)), WmNode::leaf(h(3))]),
        ]));
        let bridge = RecordingBridge::default();
        state.sync(&bridge);

        let calls = bridge.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 3);
        assert_eq!(
            calls[0]["1"],
            Rect {
                top: 0,
                left: 0,
                right: 400,
                bottom: 600,
            }
        );
        assert_eq!(
            calls[0]["3"],
            Rect {
                top: 300,
                left: 400,
                right: 800,
                bottom: 600,
            }
        );
    }

    #[test]
    fn settings_change_updates_border_correction() {
        let mut state = state_with(WmNode::leaf(h(1)));
        let mut reloaded = config();
        reloaded.border.enabled = true;
        reloaded.border.width = 4.0;
        reloaded.border.offset = 0.0;
        assert_eq!(state.apply_settings(&reloaded), RetileReason::SettingsChanged);

        let positions = state.sync(&RecordingBridge::default());
        assert_eq!(
            positions["1"],
            Rect {
                top: 4,
                left: 4,
                right: 796,
                bottom: 596,
            }
        );
    }

    #[test]
    fn dangling_handles_are_reported_not_filtered() {
        let mut state = state_with(WmNode::horizontal(vec![
            WmNode::leaf(h(1)),
            WmNode::leaf(h(2)),
        ]));
        state.apply(NativeEvent::OpenAppsChanged(vec![AppEntry {
            path: "C:\\a.exe".into(),
            umid: Some("App.A".into()),
            windows: vec![AppWindow {
                handle: h(1),
                title: String::new(),
            }],
        }]));
        assert_eq!(state.dangling_handles(), vec![h(2)]);
        assert_eq!(state.sync(&RecordingBridge::default()).len(), 2);
    }

    #[test]
    fn cleared_layout_sends_empty_batch() {
        let mut state = state_with(WmNode::leaf(h(1)));
        state.apply(NativeEvent::LayoutChanged(None));
        let bridge = RecordingBridge::default();
        state.sync(&bridge);
        assert_eq!(bridge.calls().len(), 1);
        assert!(bridge.calls()[0].is_empty());
    }
}
