use bas_state::prelude::*;
use leptos::prelude::*;
use tracing::warn;

use crate::app::GlobalState;
use crate::toolbox::prelude::*;

/// One dot per section; the active one is highlighted, clicking scrolls to it.
#[component]
pub fn ScrollIndicator() -> impl IntoView {
    let global_state = expect_context::<GlobalState>();
    let active_section = global_state.active_section;

    view! {
        <div class="scroll-indicator hidden lg:flex flex-col items-center">
            <div class="bg-black/10 rounded-full p-2 backdrop-blur-sm">
                {SECTIONS
                    .into_iter()
                    .map(|section| {
                        let id = section.id;
                        view! {
                            <button
                                type="button"
                                aria-label=format!("Scroll to {}", id)
                                class=move || {
                                    if active_section.get() == section.order {
                                        "scroll-dot active"
                                    } else {
                                        "scroll-dot"
                                    }
                                }
                                on:click=move |_| {
                                    if let Err(err) = scroll::scroll_to_section(id) {
                                        warn!("{}", err);
                                    }
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
