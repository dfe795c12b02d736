use bas_state::content::{assets, meta};
use bas_state::prelude::*;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Link, Meta, Title};
use page::home::Page;
use tracing::warn;

use crate::app::hooks::use_scroll_tracker::use_scroll_tracker;
use crate::toolbox::prelude::*;

pub mod components;
pub mod hooks;
pub mod page;

/// Page-wide values derived from the scroll position.
#[derive(Clone, Copy, Debug)]
pub struct GlobalState {
    pub active_section: RwSignal<usize>,
    pub nav_past_threshold: RwSignal<bool>,
}

impl GlobalState {
    pub fn new(config: TrackerConfig) -> Self {
        let signals = use_scroll_tracker(config);
        Self {
            active_section: signals.active_section,
            nav_past_threshold: signals.past_threshold,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    intersection_observer::init_global_state();
    provide_context(GlobalState::new(TrackerConfig::default()));

    Effect::new(move || {
        if let Err(err) = scroll::set_smooth_scroll() {
            warn!("smooth scrolling unavailable: {}", err);
        }
    });

    view! {
        <Title text=meta::TITLE />
        <Meta name="description" content=meta::DESCRIPTION />
        <Meta name="keywords" content=meta::KEYWORDS />
        <Meta property="og:title" content=meta::TITLE />
        <Meta property="og:description" content=meta::OG_DESCRIPTION />
        <Meta property="og:image" content=assets::COVER />
        <Link rel="icon" href=assets::FAVICON />
        <Page />
    }
}
