//! Window-level event wiring and guarded DOM lookups.
//!
//! Component-local events (click, submit, input) go through Yew callbacks.
//! Scroll and resize belong to the window, so they are registered here and
//! torn down when the returned listener is dropped.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Window};

pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    /// Returns `None` outside a browser or if the listener can't be added.
    pub fn new(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            warn!("Failed to listen for {}: {:?}", event, e);
            return None;
        }

        Some(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn inner_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Calls `handler` with the vertical scroll offset on every scroll.
pub fn on_scroll(mut handler: impl FnMut(f64) + 'static) -> Option<WindowListener> {
    WindowListener::new("scroll", move |_| handler(scroll_y()))
}

/// Calls `handler` with the viewport's inner width on every resize.
pub fn on_resize(mut handler: impl FnMut(f64) + 'static) -> Option<WindowListener> {
    WindowListener::new("resize", move |_| {
        if let Some(width) = inner_width() {
            handler(width);
        }
    })
}

/// First match for `selector`, or `None` if there is no document, no match,
/// or the selector doesn't parse.
pub fn query(selector: &str) -> Option<Element> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
