// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_location, use_navigate};

use crate::components::Page::*;
use crate::content::client::fetch_entries;
use crate::content::normalize::about_content;
use crate::context::intent::{use_intent_slot, NavigationIntent};
use crate::context::section::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AboutTab {
    Story,
    Mission,
}

#[component]
pub fn AboutUs() -> impl IntoView {
    let entries = create_local_resource(|| (), |_| async { fetch_entries("portfolio").await });
    let intents = use_intent_slot();
    let navigate = use_navigate();
    let location = use_location();

    // `/about#mission` opens on the mission tab; anything else on the story.
    let initial_tab = if location.hash.get_untracked().contains("mission") {
        AboutTab::Mission
    } else {
        AboutTab::Story
    };
    let tab = create_rw_signal(initial_tab);

    let tab_button = move |this: AboutTab, label: &'static str| {
        view! {
            <button
                class="py-4 px-2 border-b-2 font-medium text-sm border-transparent text-gray-500 dark:text-gray-400"
                class=("border-indigo-600", move || tab.get() == this)
                class=("text-indigo-600", move || tab.get() == this)
                on:click=move |_| tab.set(this)
            >
                {label}
            </button>
        }
    };

    view! {
        <Title text="About Us"/>
        <Page>
            <main class="pt-16 min-h-screen">
                <div class="relative h-[40vh] bg-gray-800 flex items-center justify-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-white text-center px-4">
                        "About Us"
                    </h1>
                </div>

                <div class="sticky top-16 z-10 bg-white dark:bg-dark-card shadow-md">
                    <div class="flex justify-center space-x-8">
                        {tab_button(AboutTab::Story, "Our Story")}
                        {tab_button(AboutTab::Mission, "Our Mission")}
                    </div>
                </div>

                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 mt-6 pb-12">
                    {move || match entries.get() {
                        None => {
                            view! {
                                <p class="text-center text-gray-600 dark:text-gray-400 animate-pulse">
                                    "Loading..."
                                </p>
                            }
                                .into_view()
                        }
                        Some(Err(error)) => {
                            view! { <p class="text-center text-red-500">{error.to_string()}</p> }
                                .into_view()
                        }
                        Some(Ok(posts)) => {
                            match about_content(&posts) {
                                None => {
                                    view! {
                                        <p class="text-center text-gray-500">
                                            "No about content found"
                                        </p>
                                    }
                                        .into_view()
                                }
                                Some(about) => {
                                    view! {
                                        <div class="prose dark:prose-invert max-w-none">
                                            {move || {
                                                let text = match tab.get() {
                                                    AboutTab::Story => about.story.clone(),
                                                    AboutTab::Mission => about.mission.clone(),
                                                };
                                                view! {
                                                    <p class="text-lg text-gray-600 dark:text-gray-300">
                                                        {text}
                                                    </p>
                                                }
                                            }}
                                        </div>
                                    }
                                        .into_view()
                                }
                            }
                        }
                    }}

                    <div class="mt-12 text-center">
                        <button
                            class="bg-indigo-600 hover:bg-indigo-700 text-white font-semibold py-3 px-8 rounded-xl transition-all duration-300 shadow-lg"
                            on:click={
                                let navigate = navigate.clone();
                                move |_| {
                                    intents.post(NavigationIntent::scroll_to(Section::About));
                                    navigate("/", Default::default());
                                }
                            }
                        >
                            "Back to Home"
                        </button>
                    </div>
                </div>
            </main>
        </Page>
    }
}
