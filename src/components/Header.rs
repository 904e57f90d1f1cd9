// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;
use leptos_router::{use_location, use_navigate};

use crate::context::intent::{use_intent_slot, NavigationIntent};
use crate::context::section::{use_section_context, Section};
use crate::context::theme::use_theme;

#[component]
pub fn Header() -> impl IntoView {
    let sections = use_section_context();
    let intents = use_intent_slot();
    let navigate = use_navigate();
    let location = use_location();
    let menu_open = create_rw_signal(false);

    // A nav click on the home page just updates the active section; from a
    // sub-page it posts a one-shot intent and routes home.
    let go_to = move |section: Section| {
        menu_open.set(false);
        if location.pathname.get_untracked() != "/" {
            intents.post(NavigationIntent::scroll_to(section));
            navigate("/", Default::default());
        } else {
            sections.navigate_to(section);
        }
    };

    let logo_go_to = go_to.clone();
    let desktop_go_to = go_to.clone();
    let mobile_go_to = go_to;

    view! {
        <header class="fixed top-0 left-0 w-full z-50 bg-white/95 dark:bg-dark-bg/95 backdrop-blur-lg shadow-lg transition-colors duration-300">
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <button
                        class="text-2xl font-bold text-gray-800 dark:text-gray-100"
                        on:click=move |_| logo_go_to(Section::Home)
                    >
                        "Company Name"
                    </button>

                    <div class="hidden sm:flex items-center space-x-4">
                        {Section::ALL
                            .iter()
                            .copied()
                            .map(|section| {
                                let go_to = desktop_go_to.clone();
                                view! {
                                    <button
                                        class="px-3 py-2 rounded-md transition-all duration-300 text-gray-600 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400"
                                        class=(
                                            "text-indigo-600",
                                            move || sections.active() == section,
                                        )
                                        class=("bg-indigo-50", move || sections.active() == section)
                                        on:click=move |_| go_to(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center space-x-2">
                        <ThemeToggle/>
                        <button
                            class="sm:hidden p-2 rounded-md text-gray-600 dark:text-gray-300"
                            aria-label="Toggle menu"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <Show when=move || menu_open.get() fallback=|| ()>
                    <div class="sm:hidden bg-white dark:bg-dark-bg shadow-lg px-2 pt-2 pb-3 space-y-1">
                        {Section::ALL
                            .iter()
                            .copied()
                            .map(|section| {
                                let go_to = mobile_go_to.clone();
                                view! {
                                    <button
                                        class="block w-full text-left px-3 py-2 rounded-md text-base font-medium text-gray-600 dark:text-gray-300"
                                        class=(
                                            "text-indigo-600",
                                            move || sections.active() == section,
                                        )
                                        on:click=move |_| go_to(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </nav>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="p-2 rounded-full bg-white dark:bg-gray-800 shadow transition-colors duration-300"
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle_dark_mode()
        >
            {move || if theme.is_dark() { "🌙" } else { "☀️" }}
        </button>
    }
}
