// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;
use leptos_router::use_navigate;

use crate::content::client::fetch_entries;
use crate::content::normalize::about_content;
use crate::context::section::{use_section_context, Section};
use crate::scroll::scroll_to_section;

#[component]
pub fn About() -> impl IntoView {
    let sections = use_section_context();
    create_effect(move |_| {
        if sections.take_scroll_request(Section::About) {
            scroll_to_section(Section::About);
        }
    });

    let entries = create_local_resource(|| (), |_| async { fetch_entries("portfolio").await });
    let navigate = use_navigate();

    view! {
        <section id="about" class="py-20 bg-white dark:bg-dark-bg transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center mb-12 text-gray-800 dark:text-gray-100">
                    "About Us"
                </h2>
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
                        view! {
                            <p class="text-center text-red-500 dark:text-red-400">
                                {error.to_string()}
                            </p>
                        }
                            .into_view()
                    }
                    Some(Ok(posts)) => {
                        match about_content(&posts) {
                            None => {
                                view! {
                                    <p class="text-center text-gray-500">"No about content found"</p>
                                }
                                    .into_view()
                            }
                            Some(_about) => {
                                let story_nav = navigate.clone();
                                let mission_nav = navigate.clone();
                                view! {
                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                                        <div
                                            class="bg-white dark:bg-dark-card rounded-2xl shadow-xl p-8 cursor-pointer hover:shadow-2xl transition-all duration-300"
                                            on:click=move |_| story_nav("/about#story", Default::default())
                                        >
                                            <h3 class="text-2xl font-bold text-gray-800 dark:text-gray-100 mb-4">
                                                "Our Story"
                                            </h3>
                                            <p class="text-gray-600 dark:text-gray-300 mb-6">
                                                "From humble beginnings to becoming industry leaders, discover our journey of innovation, growth, and success."
                                            </p>
                                            <span class="text-indigo-600 dark:text-indigo-400 font-semibold">
                                                "Learn More →"
                                            </span>
                                        </div>
                                        <div
                                            class="bg-white dark:bg-dark-card rounded-2xl shadow-xl p-8 cursor-pointer hover:shadow-2xl transition-all duration-300"
                                            on:click=move |_| mission_nav("/about#mission", Default::default())
                                        >
                                            <h3 class="text-2xl font-bold text-gray-800 dark:text-gray-100 mb-4">
                                                "Our Mission"
                                            </h3>
                                            <p class="text-gray-600 dark:text-gray-300 mb-6">
                                                "Learn about our commitment to excellence, innovation, and creating lasting partnerships with our clients."
                                            </p>
                                            <span class="text-indigo-600 dark:text-indigo-400 font-semibold">
                                                "Learn More →"
                                            </span>
                                        </div>
                                    </div>
                                }
                                    .into_view()
                            }
                        }
                    }
                }}
            </div>
        </section>
    }
}
