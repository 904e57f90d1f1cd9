// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scroll-into-view helpers and the home-page scroll-spy probe.

use gloo_timers::callback::Timeout;
use leptos::document;

use crate::context::section::Section;

/// Delay before scrolling after a route change, so the destination has a
/// chance to lay out.
const SCROLL_SETTLE_MS: u32 = 80;

/// How far below the viewport top a section may start and still count as
/// the one in view (the fixed header occupies the top of the page).
const SPY_OFFSET_PX: f64 = 160.0;

pub fn scroll_to_section(section: Section) {
    if let Some(element) = document().get_element_by_id(section.dom_id()) {
        element.scroll_into_view();
    }
}

pub fn scroll_to_section_deferred(section: Section) {
    Timeout::new(SCROLL_SETTLE_MS, move || scroll_to_section(section)).forget();
}

/// The lowest section whose top has scrolled past the header line, if any.
pub fn section_in_view() -> Option<Section> {
    let mut current = None;
    for section in Section::ALL {
        if let Some(element) = document().get_element_by_id(section.dom_id()) {
            if element.get_bounding_client_rect().top() <= SPY_OFFSET_PX {
                current = Some(section);
            }
        }
    }
    current
}
