use bas_state::prelude::*;
use leptos::{ev, html::ElementType, prelude::*};
use tracing::{error, trace};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::toolbox::prelude::*;

/// Inline style for a layer driven by `target`'s position in the viewport.
/// Scroll bursts are folded into one recompute per animation frame.
pub fn use_parallax<E>(target: NodeRef<E>, parallax: Parallax) -> RwSignal<String>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static + Into<HtmlElement>,
{
    let style = RwSignal::new(parallax.pose_at(0.0).css());

    let update = move || {
        let Some(element) = target.get_untracked() else {
            return;
        };
        let element: HtmlElement = element.into();
        let vh = match scroll::viewport_height() {
            Ok(vh) => vh,
            Err(err) => {
                trace!("parallax skipped: {}", err);
                return;
            }
        };

        let rect = element.get_bounding_client_rect();
        let next = parallax.style(rect.top(), rect.height(), vh);
        if style.with_untracked(|current| *current != next) {
            style.set(next);
        }
    };

    let gate = StoredValue::new(FrameGate::default());
    let on_scroll = move || {
        let schedule = gate.try_update_value(|gate| gate.request()).unwrap_or(false);
        if !schedule {
            return;
        }
        request_animation_frame(move || {
            gate.update_value(|gate| gate.run());
            update();
        });
    };

    Effect::new(move || {
        if target.get().is_some() {
            update();
        }
    });

    if let Err(err) = event_listener::window(ev::scroll, move |_| on_scroll()) {
        error!("parallax disabled: {}", err);
    }

    style
}
