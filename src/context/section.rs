// SPDX-License-Identifier: MIT OR Apache-2.0

//! Active-section state shared between the header and the home sections.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    /// Id of the DOM element the section scrolls to.
    pub fn dom_id(self) -> &'static str {
        match self {
            Section::Home => "hero",
            Section::About => "about",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }
}

/// The logically current section, plus at most one outstanding
/// scroll-into-view request.
///
/// Nav clicks go through [`SectionContext::navigate_to`], which both
/// highlights and queues a scroll. The scroll-spy goes through
/// [`SectionContext::spy_set`], which only highlights; otherwise every spy
/// update would fight the scroll it was reacting to.
#[derive(Clone, Copy)]
pub struct SectionContext {
    active: RwSignal<Section>,
    pending_scroll: RwSignal<Option<Section>>,
}

impl SectionContext {
    fn new() -> Self {
        Self {
            active: create_rw_signal(Section::Home),
            pending_scroll: create_rw_signal(None),
        }
    }

    pub fn active(&self) -> Section {
        self.active.get()
    }

    pub fn navigate_to(&self, section: Section) {
        self.active.set(section);
        self.pending_scroll.set(Some(section));
    }

    pub fn spy_set(&self, section: Section) {
        if self.active.get_untracked() != section {
            self.active.set(section);
        }
    }

    /// Called by the section owning `section`; true at most once per
    /// `navigate_to`.
    pub fn take_scroll_request(&self, section: Section) -> bool {
        if self.pending_scroll.get() == Some(section) {
            self.pending_scroll.set(None);
            true
        } else {
            false
        }
    }
}

pub fn provide_section_context() -> SectionContext {
    let context = SectionContext::new();
    provide_context(context);
    context
}

pub fn use_section_context() -> SectionContext {
    use_context::<SectionContext>().expect("SectionContext missing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_queues_scroll_once() {
        let runtime = create_runtime();
        let context = SectionContext::new();

        context.navigate_to(Section::About);
        assert_eq!(context.active.get_untracked(), Section::About);
        assert!(!context.take_scroll_request(Section::Services));
        assert!(context.take_scroll_request(Section::About));
        assert!(!context.take_scroll_request(Section::About));

        runtime.dispose();
    }

    #[test]
    fn spy_updates_highlight_without_scroll() {
        let runtime = create_runtime();
        let context = SectionContext::new();

        context.spy_set(Section::Portfolio);
        assert_eq!(context.active.get_untracked(), Section::Portfolio);
        assert!(!context.take_scroll_request(Section::Portfolio));

        runtime.dispose();
    }
}
