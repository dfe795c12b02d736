pub mod prelude {
    pub use super::dom;
    pub use super::event_listener;
    pub use super::intersection_observer::{self, AddIntersectionObserver};
    pub use super::scroll;
}

fn js_err(value: wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub mod dom {
    use thiserror::Error;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, Window};

    #[derive(Error, Debug)]
    pub enum DomErr {
        #[error("window is not available")]
        NoWindow,

        #[error("document is not available")]
        NoDocument,

        #[error("document has no root element")]
        NoRoot,

        #[error("js error: {0}")]
        Js(String),
    }

    pub fn window() -> Result<Window, DomErr> {
        web_sys::window().ok_or(DomErr::NoWindow)
    }

    pub fn document() -> Result<Document, DomErr> {
        window()?.document().ok_or(DomErr::NoDocument)
    }

    pub fn root_element() -> Result<HtmlElement, DomErr> {
        document()?
            .document_element()
            .and_then(|root| root.dyn_into::<HtmlElement>().ok())
            .ok_or(DomErr::NoRoot)
    }
}

pub mod uuid {
    use std::str::FromStr;

    use tracing::error;
    use uuid::Uuid;
    use web_sys::Element;

    use super::dom::DomErr;
    use super::js_err;

    pub fn get_id(target: &Element, field_name: &str) -> Option<Uuid> {
        let Some(id) = target.get_attribute(field_name) else {
            error!("{} was not set on <{}>", field_name, target.tag_name());
            return None;
        };
        match Uuid::from_str(&id) {
            Ok(id) => Some(id),
            Err(err) => {
                error!("{} is invalid on <{}>: {}", field_name, target.tag_name(), err);
                None
            }
        }
    }

    pub fn set_id(target: &Element, field_name: &str, id: Uuid) -> Result<(), DomErr> {
        target
            .set_attribute(field_name, &id.to_string())
            .map_err(|e| DomErr::Js(js_err(e)))
    }
}

pub mod event_listener {
    use std::borrow::Cow;
    use std::fmt::Debug;

    use leptos::{ev::EventDescriptor, prelude::*};
    use send_wrapper::SendWrapper;
    use thiserror::Error;
    use tracing::{trace, trace_span, warn};
    use wasm_bindgen::prelude::*;

    use super::dom::{self, DomErr};
    use super::js_err;

    #[derive(Error, Debug)]
    pub enum EventListenerErr {
        #[error("dom error: {0}")]
        Dom(#[from] DomErr),

        #[error("failed to add \"{event}\" listener: {err}")]
        Add { event: String, err: String },
    }

    /// Listens on `window` for the lifetime of the calling component.
    ///
    /// The listener is removed and its closure dropped when the owner is
    /// cleaned up, so remounting never stacks listeners.
    pub fn window<T, F>(event: T, f: F) -> Result<(), EventListenerErr>
    where
        T: EventDescriptor + Debug + 'static,
        T::EventType: 'static,
        F: FnMut(T::EventType) + 'static,
    {
        let span = trace_span!("event_listener", ?event).entered();

        let name: Cow<'static, str> = event.name();
        let window = dom::window()?;
        let closure = Closure::<dyn FnMut(T::EventType)>::new(f);

        window
            .add_event_listener_with_callback(&name, closure.as_ref().unchecked_ref())
            .map_err(|err| EventListenerErr::Add {
                event: name.to_string(),
                err: js_err(err),
            })?;
        trace!("added");

        let closure = SendWrapper::new(closure);
        on_cleanup(move || {
            let span = trace_span!("event_listener", event = %name).entered();
            match dom::window() {
                Ok(window) => {
                    let callback: &Closure<dyn FnMut(T::EventType)> = &closure;
                    let result = window.remove_event_listener_with_callback(
                        &name,
                        callback.as_ref().unchecked_ref(),
                    );
                    if let Err(err) = result {
                        warn!("failed to remove listener: {}", js_err(err));
                    } else {
                        trace!("removed");
                    }
                }
                Err(err) => {
                    warn!("failed to remove listener: {}", err);
                }
            }
            drop(closure);
            span.exit();
        });

        span.exit();
        Ok(())
    }
}

pub mod intersection_observer {
    use std::collections::HashMap;
    use std::hash::{DefaultHasher, Hash, Hasher};

    use bas_state::config::RevealConfig;
    use leptos::{html::ElementType, prelude::*};
    use ordered_float::OrderedFloat;
    use send_wrapper::SendWrapper;
    use thiserror::Error;
    use tracing::{error, trace, trace_span, warn};
    use uuid::Uuid;
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        js_sys::{Array, Reflect},
        HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use super::dom;
    use super::js_err;
    use super::uuid::{get_id, set_id};

    const ID_FIELD_NAME: &str = "data-bas_toolbox_intersection_observer_id";

    #[derive(Error, Debug, Clone)]
    pub enum ObserverErr {
        #[error("IntersectionObserver is not available")]
        Unsupported,

        #[error("failed to create observer: {0}")]
        Create(String),

        #[error("failed to tag target: {0}")]
        Tag(String),
    }

    pub trait AddIntersectionObserver {
        fn observe_intersection_with_options<F, G>(&self, callback: F, options: Options, on_err: G)
        where
            F: FnMut(IntersectionObserverEntry, IntersectionObserver)
                + Send
                + Sync
                + Clone
                + 'static,
            G: Fn(ObserverErr) + Send + Sync + Clone + 'static;
    }

    impl<E> AddIntersectionObserver for NodeRef<E>
    where
        E: ElementType,
        E::Output: JsCast + Clone + 'static + Into<HtmlElement>,
    {
        fn observe_intersection_with_options<F, G>(&self, callback: F, options: Options, on_err: G)
        where
            F: FnMut(IntersectionObserverEntry, IntersectionObserver)
                + Send
                + Sync
                + Clone
                + 'static,
            G: Fn(ObserverErr) + Send + Sync + Clone + 'static,
        {
            new(*self, callback, options, on_err);
        }
    }

    type Callback =
        Box<dyn FnMut(IntersectionObserverEntry, IntersectionObserver) + Send + Sync + 'static>;

    /// One observer per distinct [`Options`], shared by every target using them.
    #[derive(Default, Clone, Copy)]
    pub struct GlobalState {
        pub observers: StoredValue<HashMap<u64, SendWrapper<IntersectionObserver>>>,
        pub callbacks: StoredValue<HashMap<Uuid, Callback>>,
    }

    #[derive(Default, Clone, Debug, Hash, PartialEq, Eq)]
    pub struct Options {
        root_margin: Option<String>,
        threshold: Option<OrderedFloat<f64>>,
    }

    impl Options {
        pub fn set_root_margin(mut self, root_margin: String) -> Self {
            self.root_margin = Some(root_margin);
            self
        }

        pub fn set_threshold(mut self, threshold: f64) -> Self {
            self.threshold = Some(OrderedFloat(threshold));
            self
        }

        fn hash_key(&self) -> u64 {
            let mut hasher = DefaultHasher::new();
            self.hash(&mut hasher);
            hasher.finish()
        }

        fn init(&self) -> IntersectionObserverInit {
            let init = IntersectionObserverInit::new();
            if let Some(margin) = &self.root_margin {
                init.set_root_margin(margin);
            }
            if let Some(threshold) = self.threshold {
                init.set_threshold(&JsValue::from_f64(*threshold));
            }
            init
        }
    }

    impl From<&RevealConfig> for Options {
        fn from(config: &RevealConfig) -> Self {
            let options = Options::default().set_root_margin(config.root_margin.clone());
            match config.threshold {
                Some(threshold) => options.set_threshold(threshold),
                None => options,
            }
        }
    }

    pub fn is_supported() -> bool {
        let Ok(window) = dom::window() else {
            return false;
        };
        Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    }

    pub fn init_global_state() {
        provide_context(GlobalState::default());
    }

    fn global_state() -> GlobalState {
        match use_context::<GlobalState>() {
            Some(ctx) => ctx,
            None => {
                warn!("observer state missing from context, scoping a new one");
                let ctx = GlobalState::default();
                provide_context(ctx);
                ctx
            }
        }
    }

    pub fn new<E, F, G>(target: NodeRef<E>, callback: F, options: Options, on_err: G)
    where
        E: ElementType,
        E::Output: JsCast + Clone + 'static + Into<HtmlElement>,
        F: FnMut(IntersectionObserverEntry, IntersectionObserver) + Clone + Send + Sync + 'static,
        G: Fn(ObserverErr) + Send + Sync + Clone + 'static,
    {
        if !is_supported() {
            on_err(ObserverErr::Unsupported);
            return;
        }

        let ctx = global_state();
        let id = Uuid::new_v4();
        let hash = options.hash_key();

        Effect::new(move || {
            let span = trace_span!("intersection observer", %id).entered();

            let Some(target) = target.get() else {
                return;
            };
            let target: HtmlElement = target.into();

            if let Err(err) = set_id(&target, ID_FIELD_NAME, id) {
                on_err(ObserverErr::Tag(err.to_string()));
                return;
            }

            ctx.callbacks.update_value(|callbacks| {
                callbacks.insert(id, Box::new(callback.clone()));
                trace!("created callback");
            });

            let result = ctx.observers.try_update_value(|observers| {
                if let Some(observer) = observers.get(&hash) {
                    trace!("observer already exists");
                    observer.observe(&target);
                    return Ok(());
                }

                trace!("creating observer for {:?}", options);
                let observer = new_with_options_raw(
                    move |entries, observer| {
                        ctx.callbacks.update_value(|callbacks| {
                            for entry in entries {
                                let target = entry.target();
                                let Some(id) = get_id(&target, ID_FIELD_NAME) else {
                                    continue;
                                };
                                let Some(callback) = callbacks.get_mut(&id) else {
                                    continue;
                                };
                                callback(entry, observer.clone());
                            }
                        });
                    },
                    &options.init(),
                )?;
                observer.observe(&target);
                observers.insert(hash, SendWrapper::new(observer));
                trace!("observer created");
                Ok(())
            });

            if let Some(Err(err)) = result {
                error!("{}", err);
                ctx.callbacks.update_value(|callbacks| {
                    callbacks.remove(&id);
                });
                on_err(err);
            }

            span.exit();
        });

        on_cleanup(move || {
            let target: Option<HtmlElement> = target.get_untracked().map(Into::into);
            release(ctx, id, hash, target);
        });
    }

    /// Drops the callback registered under `id` and, if the element is still
    /// around, stops observing it.
    fn release(ctx: GlobalState, id: Uuid, hash: u64, target: Option<HtmlElement>) {
        let span = trace_span!("intersection observer", %id).entered();

        ctx.callbacks.update_value(|callbacks| {
            callbacks.remove(&id);
            trace!("removed {}", &id);
        });

        let Some(target) = target else {
            trace!("target already gone");
            return;
        };

        ctx.observers
            .with_value(|observers| match observers.get(&hash) {
                Some(observer) => observer.unobserve(&target),
                None => warn!("observer not found with hash {} for {}", hash, id),
            });

        span.exit();
    }

    pub fn new_closure(
        mut callback: impl FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver) + 'static,
    ) -> JsValue {
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entries: Vec<IntersectionObserverEntry> = entries
                    .to_vec()
                    .into_iter()
                    .map(|v| v.unchecked_into::<IntersectionObserverEntry>())
                    .collect();
                callback(entries, observer);
            },
        )
        .into_js_value()
    }

    pub fn new_with_options_raw<F>(
        callback: F,
        options: &IntersectionObserverInit,
    ) -> Result<IntersectionObserver, ObserverErr>
    where
        F: FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver) + 'static,
    {
        IntersectionObserver::new_with_options(
            new_closure(callback).as_ref().unchecked_ref(),
            options,
        )
        .map_err(|e| ObserverErr::Create(js_err(e)))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn release_drops_callback_when_target_is_gone() {
            let owner = Owner::new();
            owner.with(|| {
                let ctx = GlobalState::default();
                let id = Uuid::new_v4();
                let other = Uuid::new_v4();
                ctx.callbacks.update_value(|callbacks| {
                    callbacks.insert(id, Box::new(|_, _| {}));
                    callbacks.insert(other, Box::new(|_, _| {}));
                });

                release(ctx, id, Options::default().hash_key(), None);

                ctx.callbacks.with_value(|callbacks| {
                    assert!(!callbacks.contains_key(&id));
                    assert!(callbacks.contains_key(&other));
                });
            });
        }

        #[test]
        fn options_from_reveal_config() {
            let options = Options::from(&RevealConfig::default());
            assert_eq!(options.root_margin.as_deref(), Some("-100px"));
            assert_eq!(options.threshold, None);

            let config = RevealConfig {
                root_margin: String::from("0px"),
                threshold: Some(0.25),
            };
            let other = Options::from(&config);
            assert_eq!(other.threshold, Some(OrderedFloat(0.25)));
            assert_ne!(options.hash_key(), other.hash_key());
            assert_eq!(options.hash_key(), Options::from(&RevealConfig::default()).hash_key());
        }
    }
}

pub mod scroll {
    use bas_state::scroll::ScrollState;
    use bas_state::section::SectionId;
    use thiserror::Error;
    use tracing::{debug, trace};
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

    use super::dom::{self, DomErr};
    use super::js_err;

    #[derive(Error, Debug)]
    pub enum ScrollErr {
        #[error("dom error: {0}")]
        Dom(#[from] DomErr),

        #[error("section #{0} is not in the document")]
        SectionNotFound(SectionId),
    }

    pub fn viewport_height() -> Result<f64, DomErr> {
        dom::window()?
            .inner_height()
            .map_err(|e| DomErr::Js(js_err(e)))?
            .as_f64()
            .ok_or_else(|| DomErr::Js(String::from("innerHeight is not a number")))
    }

    pub fn window_scroll_state() -> Result<ScrollState, DomErr> {
        let scroll_y = dom::window()?
            .scroll_y()
            .map_err(|e| DomErr::Js(js_err(e)))?;
        Ok(ScrollState::new(scroll_y, viewport_height()?))
    }

    pub fn section_element(document: &Document, id: SectionId) -> Option<HtmlElement> {
        document
            .get_element_by_id(id.id())
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    /// `None` when the section is not mounted.
    pub fn section_offset(document: &Document, id: SectionId) -> Option<f64> {
        let offset = section_element(document, id).map(|element| element.offset_top() as f64);
        if offset.is_none() {
            trace!("section #{} missing, skipped", id);
        }
        offset
    }

    /// Fire-and-forget; a later user scroll simply takes over.
    pub fn scroll_to_section(id: SectionId) -> Result<(), ScrollErr> {
        let document = dom::document()?;
        let element = section_element(&document, id).ok_or(ScrollErr::SectionNotFound(id))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        debug!("scrolling to #{}", id);

        Ok(())
    }

    pub fn set_smooth_scroll() -> Result<(), DomErr> {
        dom::root_element()?
            .style()
            .set_property("scroll-behavior", "smooth")
            .map_err(|e| DomErr::Js(js_err(e)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod test {
    use std::cell::Cell;
    use std::rc::Rc;

    use leptos::{ev, prelude::*};
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::Event;

    use super::{dom, event_listener};

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch_scroll() {
        let window = dom::window().unwrap();
        let event = Event::new("scroll").unwrap();
        window.dispatch_event(&event).unwrap();
    }

    fn listen(hits: &Rc<Cell<u32>>) {
        let hits = hits.clone();
        event_listener::window(ev::scroll, move |_| hits.set(hits.get() + 1)).unwrap();
    }

    #[wasm_bindgen_test]
    fn window_listener_removed_with_owner() {
        let hits = Rc::new(Cell::new(0));
        let owner = Owner::new();
        owner.with(|| listen(&hits));

        dispatch_scroll();
        assert_eq!(hits.get(), 1);

        owner.cleanup();
        dispatch_scroll();
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn remounting_does_not_stack_listeners() {
        let hits = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let owner = Owner::new();
            owner.with(|| listen(&hits));
            owner.cleanup();
        }

        let owner = Owner::new();
        owner.with(|| listen(&hits));
        dispatch_scroll();
        assert_eq!(hits.get(), 1);
        owner.cleanup();
    }
}
