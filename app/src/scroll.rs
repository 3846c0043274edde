//! Page navigation by anchor. Every call here touches the DOM, so only invoke these
//! from event handlers or effects.

use leptos::prelude::{document, window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

/// Vertical offset past which the header turns solid.
pub const SCROLLED_OFFSET: f64 = 50.0;

#[must_use]
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_OFFSET
}

/// Smoothly scrolls the section with id `anchor` into view. An empty anchor means the
/// top of the page.
pub fn scroll_to_anchor(anchor: &str) {
    if anchor.is_empty() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
        return;
    }

    let Some(element) = document().get_element_by_id(anchor) else {
        leptos::logging::warn!("No section with id '{anchor}' to scroll to");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Current vertical scroll offset, zero if the window will not say.
#[must_use]
pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(900.0));
    }
}
