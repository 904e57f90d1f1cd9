// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;
use leptos_meta::Title;

use crate::components::sections::About::*;
use crate::components::sections::Contact::*;
use crate::components::sections::Hero::*;
use crate::components::sections::Portfolio::*;
use crate::components::sections::Services::*;
use crate::components::Page::*;
use crate::context::intent::use_intent_slot;
use crate::context::section::use_section_context;
use crate::scroll::{scroll_to_section_deferred, section_in_view};

#[component]
pub fn Home() -> impl IntoView {
    let sections = use_section_context();
    let intents = use_intent_slot();

    // Consume any one-shot intent from a sub-page: highlight the target and
    // scroll to it after layout settles. The slot is now empty, so a reload
    // does not replay the scroll.
    if let Some(intent) = intents.take() {
        if intent.from_clients {
            log::info!("clients page bounced back home");
        }
        if let Some(target) = intent.scroll_to {
            sections.spy_set(target);
            scroll_to_section_deferred(target);
        }
    }

    // Scroll-spy: keep the header highlight in sync with the viewport.
    let spy = window_event_listener(ev::scroll, move |_| {
        if let Some(section) = section_in_view() {
            sections.spy_set(section);
        }
    });
    on_cleanup(move || spy.remove());

    view! {
        <Title text="Home"/>
        <Page>
            <main class="pt-16">
                <Hero/>
                <About/>
                <Services/>
                <Portfolio/>
                <Contact/>
            </main>
        </Page>
    }
}
