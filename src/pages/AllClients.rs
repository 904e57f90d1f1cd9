// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_navigate, Redirect};

use crate::components::sections::Portfolio::ClientGrid;
use crate::components::Page::*;
use crate::config::site_config;
use crate::content::client::fetch_entries;
use crate::content::normalize::client_images;
use crate::context::intent::{use_intent_slot, NavigationIntent};
use crate::context::section::Section;

/// The dedicated clients page only earns its keep above the threshold; at or
/// below it the home-page grid already shows everything.
pub fn should_redirect_home(client_count: usize, threshold: usize) -> bool {
    client_count <= threshold
}

#[component]
pub fn AllClients() -> impl IntoView {
    let intents = use_intent_slot();
    let entries = create_local_resource(|| (), |_| async { fetch_entries("portfolio").await });
    let navigate = use_navigate();

    view! {
        <Title text="Our Clients"/>
        <Page>
            <main class="pt-16 min-h-screen py-20">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h1 class="text-4xl font-bold text-center mb-12 text-gray-800 dark:text-gray-100">
                        "Our Clients"
                    </h1>
                    // The route does not commit to rendering (or redirecting)
                    // until the fetch has resolved.
                    {move || match entries.get() {
                        None => {
                            view! {
                                <p class="text-center text-gray-600 dark:text-gray-300 animate-pulse">
                                    "Loading clients..."
                                </p>
                            }
                                .into_view()
                        }
                        Some(Err(error)) => {
                            view! { <p class="text-center text-red-500">{error.to_string()}</p> }
                                .into_view()
                        }
                        Some(Ok(posts)) => {
                            let clients = client_images(&posts);
                            if should_redirect_home(
                                clients.len(),
                                site_config().clients_page_threshold,
                            ) {
                                intents.post(NavigationIntent::from_clients());
                                view! { <Redirect path="/"/> }.into_view()
                            } else {
                                let navigate = navigate.clone();
                                view! {
                                    <div class="text-indigo-900 dark:text-gray-100">
                                        <ClientGrid clients=clients/>
                                    </div>
                                    <div class="mt-8 text-center">
                                        <button
                                            class="bg-indigo-600 text-white py-2 px-6 rounded-lg hover:bg-indigo-700 transition-colors"
                                            on:click=move |_| {
                                                intents.post(NavigationIntent::scroll_to(Section::Portfolio));
                                                navigate("/", Default::default());
                                            }
                                        >
                                            "Back to Home"
                                        </button>
                                    </div>
                                }
                                    .into_view()
                            }
                        }
                    }}
                </div>
            </main>
        </Page>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CLIENTS_PAGE_THRESHOLD;

    #[test]
    fn redirects_at_threshold_renders_above() {
        assert!(should_redirect_home(10, DEFAULT_CLIENTS_PAGE_THRESHOLD));
        assert!(!should_redirect_home(11, DEFAULT_CLIENTS_PAGE_THRESHOLD));
    }

    #[test]
    fn empty_grid_always_redirects() {
        assert!(should_redirect_home(0, DEFAULT_CLIENTS_PAGE_THRESHOLD));
        assert!(should_redirect_home(0, 0));
    }
}
