// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;

use crate::content::client::fetch_entries;
use crate::content::normalize::hero_banners;
use crate::context::section::{use_section_context, Section};
use crate::scroll::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let sections = use_section_context();
    create_effect(move |_| {
        if sections.take_scroll_request(Section::Home) {
            scroll_to_section(Section::Home);
        }
    });

    let entries = create_local_resource(|| (), |_| async { fetch_entries("portfolio").await });
    let current = create_rw_signal(0usize);

    view! {
        <section id="hero" class="pb-20">
            {move || match entries.get() {
                None => {
                    view! {
                        <div class="h-[500px] flex items-center justify-center text-gray-500 animate-pulse">
                            "Loading banners..."
                        </div>
                    }
                        .into_view()
                }
                Some(Err(error)) => {
                    view! {
                        <div class="h-[500px] flex items-center justify-center text-red-500 px-4 text-center">
                            {error.to_string()}
                        </div>
                    }
                        .into_view()
                }
                Some(Ok(posts)) => {
                    let banners = hero_banners(&posts);
                    if banners.is_empty() {
                        view! {
                            <div class="h-[500px] flex items-center justify-center text-gray-500">
                                "No banners available"
                            </div>
                        }
                            .into_view()
                    } else {
                        let count = banners.len();
                        let banner = banners[current.get() % count].clone();
                        view! {
                            <div class="relative">
                                <div
                                    class="h-[500px] bg-cover bg-center"
                                    style=format!("background-image: url({})", banner.image)
                                >
                                    <div class="absolute inset-0 bg-black/50 flex items-center justify-center">
                                        <h1 class="text-4xl md:text-6xl font-bold text-white text-center px-4">
                                            {banner.text}
                                        </h1>
                                    </div>
                                </div>
                                <Show when=move || (count > 1) fallback=|| ()>
                                    <div class="absolute bottom-6 left-0 right-0 flex justify-center gap-4">
                                        <button
                                            class="w-10 h-10 rounded-full bg-black/60 text-white"
                                            aria-label="Previous banner"
                                            on:click=move |_| {
                                                current.update(|index| *index = (*index + count - 1) % count)
                                            }
                                        >
                                            "‹"
                                        </button>
                                        <button
                                            class="w-10 h-10 rounded-full bg-black/60 text-white"
                                            aria-label="Next banner"
                                            on:click=move |_| current.update(|index| *index = (*index + 1) % count)
                                        >
                                            "›"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        }
                            .into_view()
                    }
                }
            }}
        </section>
    }
}
