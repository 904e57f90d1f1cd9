// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;
use leptos_router::A;

use crate::content::client::fetch_entries;
use crate::content::normalize::service_cards;
use crate::context::section::{use_section_context, Section};
use crate::scroll::scroll_to_section;

#[component]
pub fn Services() -> impl IntoView {
    let sections = use_section_context();
    create_effect(move |_| {
        if sections.take_scroll_request(Section::Services) {
            scroll_to_section(Section::Services);
        }
    });

    let entries = create_local_resource(|| (), |_| async { fetch_entries("portfolio").await });

    view! {
        <section id="services" class="py-20 bg-gray-100 dark:bg-dark-card transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center mb-12 text-gray-800 dark:text-gray-100">
                    "Our Services"
                </h2>
                {move || match entries.get() {
                    None => {
                        view! {
                            <p class="text-center text-gray-600 dark:text-gray-400 animate-pulse">
                                "Loading services..."
                            </p>
                        }
                            .into_view()
                    }
                    Some(Err(error)) => {
                        view! {
                            <p class="text-center text-red-500">{error.to_string()}</p>
                        }
                            .into_view()
                    }
                    Some(Ok(posts)) => {
                        let cards = service_cards(&posts);
                        if cards.is_empty() {
                            view! { <p class="text-center text-gray-500">"No services found"</p> }
                                .into_view()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 justify-items-center">
                                    {cards
                                        .into_iter()
                                        .map(|card| {
                                            view! {
                                                <A
                                                    href=format!("/services/{}", card.id)
                                                    class="w-full sm:max-w-sm bg-white dark:bg-dark-bg rounded-lg overflow-hidden shadow-lg hover:shadow-xl hover:scale-105 transform transition-all duration-300"
                                                >
                                                    <img
                                                        src=card.image
                                                        alt=card.title.clone()
                                                        class="w-full h-48 object-cover"
                                                        loading="lazy"
                                                    />
                                                    <div class="p-6">
                                                        <h3 class="text-lg font-bold mb-2 text-gray-800 dark:text-gray-100">
                                                            {card.title}
                                                        </h3>
                                                        <p class="text-sm text-gray-600 dark:text-gray-300">
                                                            {card.description}
                                                        </p>
                                                    </div>
                                                </A>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_view()
                        }
                    }
                }}
            </div>
        </section>
    }
}
