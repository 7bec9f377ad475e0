use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, ScrollBehavior, ScrollIntoViewOptions};

// window listeners
//
// registered on first render and removed when the owning component unmounts
struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    fn new(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);

        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!("failed to listen for {event}: {err:?}");
            return None;
        }

        Some(WindowListener { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

pub fn use_window_listener(event: &'static str, handler: impl FnMut(Event) + 'static) {
    use_hook(move || Rc::new(WindowListener::new(event, handler)));
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

// true while the page is scrolled further down than threshold_px
pub fn use_scrolled(threshold_px: f64) -> Signal<bool> {
    let mut scrolled = use_signal(|| scroll_y() > threshold_px);

    use_window_listener("scroll", move |_| {
        let next = scroll_y() > threshold_px;
        if *scrolled.peek() != next {
            scrolled.set(next);
        }
    });

    scrolled
}

// smooth-scrolls to the element with the given id, the in-page equivalent of
// following a #fragment link
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    let Some(element) = element else {
        warn!("no section with id {id}");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

// stops the page behind a modal from scrolling
pub fn set_body_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());

    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        if let Err(err) = body.style().set_property("overflow", value) {
            warn!("failed to update body overflow: {err:?}");
        }
    }
}
