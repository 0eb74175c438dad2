use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    Top,
    Scrolled,
}

impl HeaderStyle {
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            HeaderStyle::Scrolled
        } else {
            HeaderStyle::Top
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            HeaderStyle::Top => "rgba(255, 255, 255, 0.95)",
            HeaderStyle::Scrolled => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            HeaderStyle::Top => "0 2px 10px rgba(0,0,0,0.1)",
            HeaderStyle::Scrolled => "0 5px 20px rgba(0,0,0,0.1)",
        }
    }

    pub fn css(self) -> String {
        format!("background: {}; box-shadow: {};", self.background(), self.box_shadow())
    }
}

/// The selector for a same-page anchor (`#contact`), if `href` is one.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(fragment) if !fragment.is_empty() => Some(href),
        _ => None,
    }
}

/// Where to scroll so the target sits just below the fixed header.
pub fn scroll_destination(offset_top: f64, header_offset: f64) -> f64 {
    (offset_top - header_offset).max(0.0)
}

/// Smooth-scrolls the window to `selector`. Returns false when there is
/// nothing to scroll to.
pub fn smooth_scroll_to(selector: &str, header_offset: f64) -> bool {
    let Some(target) = surface::query(selector).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        debug!("No scroll target for {}", selector);
        return false;
    };
    let Some(window) = web_sys::window() else {
        return false;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_destination(target.offset_top() as f64, header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}
