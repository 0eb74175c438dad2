//! One-shot reveal of content cards as they scroll into view.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::surface;

pub const REVEAL_SELECTORS: &[&str] = &[".service-card", ".portfolio-item", ".team-member", ".review-card"];

const REVEAL_KEY_ATTR: &str = "data-reveal-id";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn style_properties(self) -> &'static [(&'static str, &'static str)] {
        match self {
            RevealState::Hidden => &[
                ("opacity", "0"),
                ("transform", "translateY(20px)"),
                ("transition", "opacity 0.6s ease, transform 0.6s ease"),
            ],
            RevealState::Revealed => &[("opacity", "1"), ("transform", "translateY(0)")],
        }
    }
}

#[derive(Debug)]
pub struct RevealTracker<K> {
    states: HashMap<K, RevealState>,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn track(&mut self, key: K) {
        self.states.entry(key).or_insert(RevealState::Hidden);
    }

    pub fn state(&self, key: &K) -> Option<RevealState> {
        self.states.get(key).copied()
    }

    /// True exactly once per tracked element: the first time it intersects.
    pub fn observe(&mut self, key: &K, intersecting: bool) -> bool {
        match self.states.get_mut(key) {
            Some(state @ RevealState::Hidden) if intersecting => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.states
            .values()
            .filter(|state| **state == RevealState::Hidden)
            .count()
    }
}

fn apply_style(element: &Element, state: RevealState) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = element.style();
    for (property, value) in state.style_properties() {
        let _ = style.set_property(property, value);
    }
}

/// Owns the browser observer; dropping it stops observation.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    /// Hides every element matching `selectors` and reveals each on its first
    /// intersection. Returns `None` if there is nothing to observe.
    pub fn attach(selectors: &[&str], threshold: f64) -> Option<Self> {
        let elements = surface::query_all(&selectors.join(", "));
        if elements.is_empty() {
            debug!("No reveal targets on this page");
            return None;
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::<u32>::default()));
        {
            let mut tracker = tracker.borrow_mut();
            for (i, element) in elements.iter().enumerate() {
                let key = i as u32;
                let _ = element.set_attribute(REVEAL_KEY_ATTR, &key.to_string());
                apply_style(element, RevealState::Hidden);
                tracker.track(key);
            }
        }

        let callback = {
            let tracker = tracker.clone();
            Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(key) = target
                        .get_attribute(REVEAL_KEY_ATTR)
                        .and_then(|raw| raw.parse::<u32>().ok())
                    else {
                        continue;
                    };

                    if tracker.borrow_mut().observe(&key, entry.is_intersecting()) {
                        apply_style(&target, RevealState::Revealed);
                        observer.unobserve(&target);
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                // Without an observer nothing would ever reveal them.
                for element in &elements {
                    apply_style(element, RevealState::Revealed);
                }
                return None;
            }
        };

        for element in &elements {
            observer.observe(element);
        }
        debug!("Observing {} reveal targets", tracker.borrow().pending());

        Some(Self {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untracked_elements_never_reveal() {
        let mut tracker = RevealTracker::<&str>::default();
        assert!(!tracker.observe(&"card", true));
        assert_eq!(tracker.state(&"card"), None);
    }

    #[test]
    fn stays_hidden_until_intersecting() {
        let mut tracker = RevealTracker::default();
        tracker.track(1);

        assert!(!tracker.observe(&1, false));
        assert_eq!(tracker.state(&1), Some(RevealState::Hidden));
    }

    #[test]
    fn reveals_once_and_never_reverts() {
        let mut tracker = RevealTracker::default();
        tracker.track(1);

        assert!(tracker.observe(&1, true));
        assert!(!tracker.observe(&1, false));
        assert!(!tracker.observe(&1, true));
        assert_eq!(tracker.state(&1), Some(RevealState::Revealed));
    }

    #[test]
    fn elements_reveal_independently() {
        let mut tracker = RevealTracker::default();
        for key in 0..3 {
            tracker.track(key);
        }

        assert!(tracker.observe(&2, true));
        assert_eq!(tracker.pending(), 2);
        assert_eq!(tracker.state(&0), Some(RevealState::Hidden));

        // Re-tracking doesn't reset a revealed element.
        tracker.track(2);
        assert_eq!(tracker.state(&2), Some(RevealState::Revealed));
    }

    #[test]
    fn hidden_style_sets_transition() {
        let hidden = RevealState::Hidden.style_properties();
        assert!(hidden.contains(&("opacity", "0")));
        assert!(hidden.iter().any(|(property, _)| *property == "transition"));
        assert!(RevealState::Revealed
            .style_properties()
            .contains(&("transform", "translateY(0)")));
    }
}
