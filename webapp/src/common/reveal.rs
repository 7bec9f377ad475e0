use dioxus::prelude::*;
use js_sys::Array;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use api::reveal::{RevealMode, RevealOptions};

// scroll reveal
//
// every animated section and card goes through this hook.  the component attaches
// observe() to its root element's onmounted, and reads visible() or style() when
// rendering.  the observer is owned by the hook, so it is disconnected as soon as
// the component goes away
//
//    let mut reveal = use_scroll_reveal(RevealOptions::once());
//    rsx! { div { onmounted: move |evt| reveal.observe(evt), style: reveal.style() } }
#[derive(Clone, Copy)]
pub struct ScrollReveal {
    options: RevealOptions,
    visible: Signal<bool>,
    observer: Signal<Option<RevealObserver>>,
}

impl ScrollReveal {
    pub fn visible(&self) -> bool {
        (self.visible)()
    }

    pub fn style(&self) -> String {
        self.options.style(self.visible())
    }

    // the class pair used by elements that animate purely in css
    pub fn class(&self, hidden: &'static str, shown: &'static str) -> &'static str {
        if self.visible() { shown } else { hidden }
    }

    pub fn observe(&mut self, evt: MountedEvent) {
        // not an element we can watch, so it simply never reveals
        let Some(element) = evt.data().downcast::<Element>().cloned() else {
            return;
        };

        match RevealObserver::new(&element, self.options, self.visible) {
            Ok(observer) => self.observer.set(Some(observer)),
            Err(err) => warn!("failed to create intersection observer: {err:?}"),
        }
    }
}

pub fn use_scroll_reveal(options: RevealOptions) -> ScrollReveal {
    let visible = use_signal(|| false);
    let mut observer = use_signal(|| None::<RevealObserver>);

    use_drop(move || {
        if let Ok(mut slot) = observer.try_write() {
            slot.take();
        }
    });

    ScrollReveal {
        options,
        visible,
        observer,
    }
}

// the js callback has to outlive the observer, so they are kept together
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn new(
        target: &Element,
        options: RevealOptions,
        mut visible: Signal<bool>,
    ) -> Result<Self, JsValue> {
        let mode = options.mode;

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let current = *visible.peek();
                    let next = mode.next(current, entry.is_intersecting());

                    if next != current {
                        visible.set(next);
                    }
                }

                // nothing left to watch for
                if mode == RevealMode::Once && *visible.peek() {
                    observer.disconnect();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.clamped_threshold()));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(RevealObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
