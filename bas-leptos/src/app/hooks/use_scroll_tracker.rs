use bas_state::prelude::*;
use leptos::{ev, prelude::*};
use tracing::{error, trace_span, warn};

use crate::toolbox::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct ScrollSignals {
    pub active_section: RwSignal<usize>,
    pub past_threshold: RwSignal<bool>,
}

/// Keeps the active section index and the navbar threshold flag in step
/// with the window scroll position.
pub fn use_scroll_tracker(config: TrackerConfig) -> ScrollSignals {
    let tracker = StoredValue::new(ScrollTracker::new(config));
    let active_section = RwSignal::new(tracker.with_value(|t| t.active_index()));
    let past_threshold = RwSignal::new(tracker.with_value(|t| t.is_past_threshold()));

    let update = move || {
        let span = trace_span!("scroll tracker").entered();

        let state = match scroll::window_scroll_state() {
            Ok(state) => state,
            Err(err) => {
                warn!("failed to read scroll state: {}", err);
                return;
            }
        };
        let document = match dom::document() {
            Ok(document) => document,
            Err(err) => {
                warn!("{}", err);
                return;
            }
        };

        let result = tracker.try_update_value(|tracker| {
            let update = tracker.on_scroll(state, |id| scroll::section_offset(&document, id));
            (update, tracker.active_index(), tracker.is_past_threshold())
        });

        if let Some((update, active, past)) = result {
            if update.active_changed {
                active_section.set(active);
            }
            if update.threshold_changed {
                past_threshold.set(past);
            }
        }

        span.exit();
    };

    Effect::new(move || {
        update();
    });

    if let Err(err) = event_listener::window(ev::scroll, move |_| update()) {
        error!("scroll tracking disabled: {}", err);
    }

    ScrollSignals {
        active_section,
        past_threshold,
    }
}
