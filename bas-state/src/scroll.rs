use tracing::trace;

use crate::config::{TrackerConfig, NAV_THRESHOLD_PX, PROBE_FRACTION};
use crate::section::{SectionId, SECTIONS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

impl ScrollState {
    pub fn new(scroll_y: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y: scroll_y.max(0.0),
            viewport_height: viewport_height.max(0.0),
        }
    }

    pub fn probe(&self, config: &TrackerConfig) -> f64 {
        self.scroll_y + self.viewport_height * config.probe_fraction
    }
}

/// Vertical midpoint of the viewport in document coordinates.
pub fn probe_position(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height * PROBE_FRACTION
}

pub fn is_past_threshold(scroll_y: f64) -> bool {
    scroll_y > NAV_THRESHOLD_PX
}

/// Index of the last section whose top offset is at or above `probe`.
///
/// `offsets` is in document order; `None` marks a section whose element is
/// not in the document and is skipped. Falls back to 0.
pub fn active_index(probe: f64, offsets: &[Option<f64>]) -> usize {
    offsets
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, offset)| match offset {
            Some(top) if *top <= probe => Some(i),
            _ => None,
        })
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerUpdate {
    pub active_changed: bool,
    pub threshold_changed: bool,
}

impl TrackerUpdate {
    pub fn any(&self) -> bool {
        self.active_changed || self.threshold_changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    config: TrackerConfig,
    active: usize,
    past_threshold: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl ScrollTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            active: 0,
            past_threshold: false,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_section(&self) -> SectionId {
        SectionId::from_order(self.active).unwrap_or(SectionId::Hero)
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past_threshold
    }

    pub fn resolve_active<F>(&self, state: ScrollState, mut offset_of: F) -> usize
    where
        F: FnMut(SectionId) -> Option<f64>,
    {
        let offsets: Vec<Option<f64>> = SECTIONS.iter().map(|s| offset_of(s.id)).collect();
        active_index(state.probe(&self.config), &offsets)
    }

    pub fn resolve_threshold(&self, state: ScrollState) -> bool {
        state.scroll_y > self.config.nav_threshold_px
    }

    /// Recomputes both derived values for one scroll event.
    pub fn on_scroll<F>(&mut self, state: ScrollState, offset_of: F) -> TrackerUpdate
    where
        F: FnMut(SectionId) -> Option<f64>,
    {
        let active = self.resolve_active(state, offset_of);
        let past_threshold = self.resolve_threshold(state);

        let update = TrackerUpdate {
            active_changed: active != self.active,
            threshold_changed: past_threshold != self.past_threshold,
        };

        if update.any() {
            trace!(
                "scroll y={} active={} past_threshold={}",
                state.scroll_y,
                active,
                past_threshold
            );
        }

        self.active = active;
        self.past_threshold = past_threshold;

        if update.active_changed {
            trace!("active section #{}", self.active_section());
        }

        update
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const VIEWPORT: f64 = 1000.0;

    fn table(id: SectionId) -> Option<f64> {
        Some(id.order() as f64 * 800.0)
    }

    #[test]
    fn threshold_boundary() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(50.0));
        assert!(is_past_threshold(51.0));
        assert!(is_past_threshold(4000.0));

        let tracker = ScrollTracker::default();
        assert!(!tracker.resolve_threshold(ScrollState::new(50.0, VIEWPORT)));
        assert!(tracker.resolve_threshold(ScrollState::new(51.0, VIEWPORT)));
    }

    #[test]
    fn active_scenarios() {
        let tracker = ScrollTracker::default();

        let about = tracker.resolve_active(ScrollState::new(1700.0, VIEWPORT), table);
        assert_eq!(about, 2);

        let hero = tracker.resolve_active(ScrollState::new(0.0, VIEWPORT), table);
        assert_eq!(hero, 0);

        let community = tracker.resolve_active(ScrollState::new(4500.0, VIEWPORT), table);
        assert_eq!(community, 5);
    }

    #[test]
    fn active_is_largest_qualifying() {
        let offsets: Vec<Option<f64>> = (0..6).map(|i| Some(i as f64 * 800.0)).collect();
        for s in (0..5000).step_by(37) {
            let s = s as f64;
            let probe = probe_position(s, VIEWPORT);
            let expected = offsets
                .iter()
                .rposition(|t| t.map(|t| t <= probe).unwrap_or(false))
                .unwrap_or(0);
            assert_eq!(active_index(probe, &offsets), expected, "scroll {}", s);
            assert_eq!(active_index(probe, &offsets), active_index(probe, &offsets));
        }
    }

    #[test]
    fn boundary_is_inclusive() {
        let offsets = [Some(0.0), Some(800.0), Some(1600.0)];
        assert_eq!(active_index(1599.0, &offsets), 1);
        assert_eq!(active_index(1600.0, &offsets), 2);
    }

    #[test]
    fn nothing_qualifies() {
        let offsets = [Some(600.0), Some(1400.0)];
        assert_eq!(active_index(500.0, &offsets), 0);
        assert_eq!(active_index(500.0, &[]), 0);
        assert_eq!(active_index(500.0, &[None, None]), 0);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let offsets = [Some(0.0), Some(800.0), Some(1600.0), None, Some(3200.0), None];
        assert_eq!(active_index(2900.0, &offsets), 2);
        assert_eq!(active_index(3500.0, &offsets), 4);
        assert_eq!(active_index(9000.0, &offsets), 4);

        let tracker = ScrollTracker::default();
        let active = tracker.resolve_active(ScrollState::new(4500.0, VIEWPORT), |id| {
            if id == SectionId::Community {
                None
            } else {
                table(id)
            }
        });
        assert_eq!(active, 4);
    }

    #[test]
    fn tracker_reports_changes() {
        init_logger();
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.active_index(), 0);
        assert!(!tracker.is_past_threshold());

        let update = tracker.on_scroll(ScrollState::new(30.0, VIEWPORT), table);
        assert!(!update.any());

        let update = tracker.on_scroll(ScrollState::new(60.0, VIEWPORT), table);
        assert_eq!(
            update,
            TrackerUpdate {
                active_changed: false,
                threshold_changed: true,
            }
        );
        assert!(tracker.is_past_threshold());

        let update = tracker.on_scroll(ScrollState::new(1700.0, VIEWPORT), table);
        assert!(update.active_changed);
        assert!(!update.threshold_changed);
        assert_eq!(tracker.active_section(), SectionId::About);

        let update = tracker.on_scroll(ScrollState::new(1700.0, VIEWPORT), table);
        assert!(!update.any());

        let update = tracker.on_scroll(ScrollState::new(0.0, VIEWPORT), table);
        assert!(update.active_changed);
        assert!(update.threshold_changed);
        assert_eq!(tracker.active_section(), SectionId::Hero);
    }

    #[test]
    fn custom_config() {
        let mut tracker = ScrollTracker::new(TrackerConfig {
            nav_threshold_px: 100.0,
            probe_fraction: 0.0,
        });
        tracker.on_scroll(ScrollState::new(90.0, VIEWPORT), table);
        assert!(!tracker.is_past_threshold());
        tracker.on_scroll(ScrollState::new(1500.0, VIEWPORT), table);
        assert_eq!(tracker.active_section(), SectionId::Features);

        let default = ScrollTracker::default();
        assert_eq!(
            default.resolve_active(ScrollState::new(1500.0, VIEWPORT), table),
            SectionId::About.order()
        );
    }

    #[test]
    fn negative_scroll_is_clamped() {
        let state = ScrollState::new(-40.0, VIEWPORT);
        assert_eq!(state.scroll_y, 0.0);
        assert_eq!(state.probe(&TrackerConfig::default()), 500.0);
    }

    fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .event_format(
                tracing_subscriber::fmt::format()
                    .with_file(true)
                    .with_line_number(true),
            )
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or(tracing_subscriber::EnvFilter::from_str("bas_state=trace").unwrap()),
            )
            .try_init();
    }
}
