// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;
use leptos_router::use_navigate;

use crate::content::client::fetch_entries;
use crate::content::normalize::{client_images, ClientImage};
use crate::context::section::{use_section_context, Section};
use crate::scroll::scroll_to_section;

#[component]
pub fn Portfolio() -> impl IntoView {
    let sections = use_section_context();
    create_effect(move |_| {
        if sections.take_scroll_request(Section::Portfolio) {
            scroll_to_section(Section::Portfolio);
        }
    });

    let entries = create_local_resource(|| (), |_| async { fetch_entries("portfolio").await });
    let navigate = use_navigate();

    view! {
        <section id="portfolio" class="py-20 bg-indigo-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center mb-12">
                    "Some of our preferred Clients"
                </h2>
                {move || match entries.get() {
                    None => {
                        view! { <p class="text-center animate-pulse">"Loading..."</p> }.into_view()
                    }
                    Some(Err(error)) => {
                        view! { <p class="text-center text-red-300">{error.to_string()}</p> }
                            .into_view()
                    }
                    Some(Ok(posts)) => {
                        let clients = client_images(&posts);
                        if clients.is_empty() {
                            view! { <p class="text-center text-gray-300">"No clients found"</p> }
                                .into_view()
                        } else {
                            view! { <ClientGrid clients=clients/> }.into_view()
                        }
                    }
                }}
                <div class="flex justify-center mt-8">
                    <button
                        class="bg-indigo-600 text-white py-2 px-4 rounded-xl hover:bg-indigo-700 transition"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/clients", Default::default())
                        }
                    >
                        "See more..."
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ClientGrid(clients: Vec<ClientImage>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-6 items-center">
            {clients
                .into_iter()
                .map(|client| {
                    view! {
                        <div class="bg-white/10 rounded-lg p-4 flex items-center justify-center">
                            <img
                                src=client.image
                                alt="Client logo"
                                class="max-h-24 object-contain"
                                loading="lazy"
                            />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
