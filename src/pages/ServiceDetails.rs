// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_navigate, use_params_map};

use crate::components::Page::*;
use crate::content::client::fetch_entries;
use crate::content::normalize::{service_cards, ServiceCard};
use crate::context::intent::{use_intent_slot, NavigationIntent};
use crate::context::section::Section;

/// Tab title: the resolved service's name, or a generic fallback until the
/// lookup settles.
fn page_title(cards: &[ServiceCard], id: &str) -> String {
    cards
        .iter()
        .find(|card| card.id == id)
        .map(|card| card.title.clone())
        .unwrap_or_else(|| "Service".to_string())
}

#[component]
pub fn ServiceDetails() -> impl IntoView {
    let params = use_params_map();
    let entries = create_local_resource(|| (), |_| async { fetch_entries("portfolio").await });

    let title = move || {
        let id = params.with(|p| p.get("id").cloned()).unwrap_or_default();
        match entries.get() {
            Some(Ok(posts)) => page_title(&service_cards(&posts), &id),
            _ => "Service".to_string(),
        }
    };

    view! {
        <Title text=title/>
        <Page>
            <main class="pt-16 min-h-screen py-20">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                    {move || {
                        let id = params.with(|p| p.get("id").cloned()).unwrap_or_default();
                        match entries.get() {
                            None => {
                                view! {
                                    <p class="text-center text-gray-600 dark:text-gray-400 animate-pulse">
                                        "Loading service..."
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
                                match service_cards(&posts).into_iter().find(|card| card.id == id) {
                                    Some(card) => view! { <ServiceDetail card=card/> }.into_view(),
                                    None => {
                                        view! {
                                            <p class="text-center text-gray-500">
                                                "Service not found"
                                            </p>
                                        }
                                            .into_view()
                                    }
                                }
                            }
                        }
                    }}
                    <BackToServices/>
                </div>
            </main>
        </Page>
    }
}

#[component]
fn ServiceDetail(card: ServiceCard) -> impl IntoView {
    let tech_stack = (!card.tech_stack.is_empty()).then(|| {
        let chips = card
            .tech_stack
            .into_iter()
            .map(|tech| {
                view! {
                    <span class="px-3 py-1 rounded-full bg-indigo-100 dark:bg-indigo-900/30 text-indigo-700 dark:text-indigo-300 text-sm">
                        {tech}
                    </span>
                }
            })
            .collect_view();
        view! {
            <section>
                <h2 class="text-2xl font-bold text-gray-900 dark:text-gray-100 mb-4">
                    "Technologies"
                </h2>
                <div class="flex flex-wrap gap-2">{chips}</div>
            </section>
        }
    });

    let use_cases = bullet_section("Use Cases", card.use_cases);
    let benefits = bullet_section("Key Benefits", card.benefits);

    let features = (!card.features.is_empty()).then(|| {
        let items = card
            .features
            .into_iter()
            .map(|feature| {
                view! {
                    <div class="bg-white dark:bg-dark-card rounded-lg shadow-lg p-6">
                        <h3 class="text-lg font-bold text-gray-900 dark:text-gray-100">
                            {feature.title}
                        </h3>
                        <p class="mt-2 text-gray-600 dark:text-gray-300">{feature.description}</p>
                    </div>
                }
            })
            .collect_view();
        view! {
            <section>
                <h2 class="text-2xl font-bold text-gray-900 dark:text-gray-100 mb-4">
                    "Features"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">{items}</div>
            </section>
        }
    });

    let process = (!card.process.is_empty()).then(|| {
        let steps = card
            .process
            .into_iter()
            .enumerate()
            .map(|(index, step)| {
                view! {
                    <li class="bg-white dark:bg-dark-card rounded-lg shadow p-4">
                        <span class="text-sm font-semibold text-indigo-600 dark:text-indigo-400">
                            {format!("Step {}", index + 1)}
                        </span>
                        <h3 class="text-lg font-bold text-gray-900 dark:text-gray-100">
                            {step.title}
                        </h3>
                        <p class="mt-1 text-gray-600 dark:text-gray-300">{step.description}</p>
                    </li>
                }
            })
            .collect_view();
        view! {
            <section>
                <h2 class="text-2xl font-bold text-gray-900 dark:text-gray-100 mb-4">
                    "Our Process"
                </h2>
                <ol class="space-y-4">{steps}</ol>
            </section>
        }
    });

    let faqs = (!card.faqs.is_empty()).then(|| {
        let items = card
            .faqs
            .into_iter()
            .map(|faq| {
                view! {
                    <details class="bg-white dark:bg-dark-card rounded-lg shadow p-4">
                        <summary class="font-semibold text-gray-900 dark:text-gray-100 cursor-pointer">
                            {faq.question}
                        </summary>
                        <p class="mt-2 text-gray-600 dark:text-gray-300">{faq.answer}</p>
                    </details>
                }
            })
            .collect_view();
        view! {
            <section>
                <h2 class="text-2xl font-bold text-gray-900 dark:text-gray-100 mb-4">"FAQs"</h2>
                <div class="space-y-2">{items}</div>
            </section>
        }
    });

    view! {
        <article class="space-y-12">
            <header class="text-center">
                <img
                    src=card.image
                    alt=card.title.clone()
                    class="w-full h-64 object-cover rounded-2xl shadow-xl mb-8"
                />
                <h1 class="text-4xl font-bold text-gray-900 dark:text-gray-100">{card.title}</h1>
                <p class="mt-4 text-lg text-gray-600 dark:text-gray-300">{card.description}</p>
            </header>
            {tech_stack}
            {use_cases}
            {features}
            {benefits}
            {process}
            {faqs}
        </article>
    }
}

fn bullet_section(heading: &'static str, items: Vec<String>) -> Option<impl IntoView> {
    (!items.is_empty()).then(|| {
        let bullets = items
            .into_iter()
            .map(|item| view! { <li>{item}</li> })
            .collect_view();
        view! {
            <section>
                <h2 class="text-2xl font-bold text-gray-900 dark:text-gray-100 mb-4">{heading}</h2>
                <ul class="list-disc list-inside space-y-2 text-gray-600 dark:text-gray-300">
                    {bullets}
                </ul>
            </section>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, title: &str) -> ServiceCard {
        ServiceCard {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            tech_stack: Vec::new(),
            use_cases: Vec::new(),
            features: Vec::new(),
            benefits: Vec::new(),
            process: Vec::new(),
            faqs: Vec::new(),
            checked: true,
        }
    }

    #[test]
    fn title_uses_resolved_service_name() {
        let cards = vec![card("web-development", "Web Development"), card("ux", "UX")];
        assert_eq!(page_title(&cards, "ux"), "UX");
        assert_eq!(page_title(&cards, "web-development"), "Web Development");
    }

    #[test]
    fn title_falls_back_when_service_missing() {
        let cards = vec![card("web-development", "Web Development")];
        assert_eq!(page_title(&cards, "nope"), "Service");
        assert_eq!(page_title(&[], "web-development"), "Service");
    }
}

#[component]
fn BackToServices() -> impl IntoView {
    let intents = use_intent_slot();
    let navigate = use_navigate();
    view! {
        <div class="mt-12 text-center">
            <button
                class="bg-indigo-600 hover:bg-indigo-700 text-white font-semibold py-3 px-8 rounded-xl transition-all duration-300 shadow-lg"
                on:click=move |_| {
                    intents.post(NavigationIntent::scroll_to(Section::Services));
                    navigate("/", Default::default());
                }
            >
                "Back to Services"
            </button>
        </div>
    }
}
