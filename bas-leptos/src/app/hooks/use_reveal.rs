use bas_state::prelude::*;
use leptos::{html::ElementType, prelude::*};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::toolbox::prelude::*;

/// Flips to revealed the first time `target` enters the viewport and never
/// flips back. Without a working observer the content starts revealed.
pub fn use_reveal<E>(target: NodeRef<E>) -> Signal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static + Into<HtmlElement>,
{
    use_reveal_with_config(target, RevealConfig::default())
}

pub fn use_reveal_with_config<E>(target: NodeRef<E>, config: RevealConfig) -> Signal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static + Into<HtmlElement>,
{
    let supported = intersection_observer::is_supported();
    let state = RwSignal::new(RevealState::initial(supported));

    if !supported {
        warn!("IntersectionObserver unavailable, content starts revealed");
        return Signal::derive(move || state.get().is_revealed());
    }

    target.observe_intersection_with_options(
        move |entry, observer| {
            let mut next = state.get_untracked();
            if next.observe(entry.is_intersecting()) {
                debug!("revealed <{}>", entry.target().tag_name());
                state.set(next);
                observer.unobserve(&entry.target());
            }
        },
        intersection_observer::Options::from(&config),
        move |err| {
            warn!("reveal falls back to visible: {}", err);
            state.update(|state| {
                state.reveal();
            });
        },
    );

    Signal::derive(move || state.get().is_revealed())
}

/// Revealed on the first frame after mount; drives load-time entrances.
pub fn use_mounted() -> Signal<bool> {
    let state = RwSignal::new(RevealState::default());

    Effect::new(move || {
        request_animation_frame(move || {
            state.update(|state| {
                state.reveal();
            });
        });
    });

    Signal::derive(move || state.get().is_revealed())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod test {
    use leptos::{html, prelude::*};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::js_sys::Reflect;

    use super::use_reveal;
    use crate::toolbox::prelude::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn starts_revealed_without_intersection_observer() {
        let window = dom::window().unwrap();
        let key = JsValue::from_str("IntersectionObserver");
        let saved = Reflect::get(&window, &key).unwrap();
        assert!(Reflect::delete_property(&window, &key).unwrap());
        assert!(!intersection_observer::is_supported());

        let owner = Owner::new();
        let revealed = owner.with(|| use_reveal(NodeRef::<html::Section>::new()));
        let revealed_now = revealed.get_untracked();

        Reflect::set(&window, &key, &saved).unwrap();
        owner.cleanup();

        assert!(revealed_now);
        assert!(intersection_observer::is_supported());
    }
}
