// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;

use crate::content::client::fetch_entries;
use crate::content::normalize::contact_info;
use crate::context::section::{use_section_context, Section};
use crate::email::send_contact_message;
use crate::scroll::scroll_to_section;

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormStatus {
    Idle,
    Submitting,
    Sent,
    Failed(String),
}

#[component]
pub fn Contact() -> impl IntoView {
    let sections = use_section_context();
    create_effect(move |_| {
        if sections.take_scroll_request(Section::Contact) {
            scroll_to_section(Section::Contact);
        }
    });

    let entries = create_local_resource(|| (), |_| async { fetch_entries("portfolio").await });

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let status = create_rw_signal(FormStatus::Idle);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == FormStatus::Submitting {
            return;
        }
        status.set(FormStatus::Submitting);
        let form_name = name.get_untracked();
        let form_email = email.get_untracked();
        let form_message = message.get_untracked();
        spawn_local(async move {
            // try_* writes: the section may be gone by the time the sends
            // resolve, and a late result must not touch disposed state.
            match send_contact_message(&form_name, &form_email, &form_message).await {
                Ok(()) => {
                    // Entered values are only cleared on success.
                    let _ = name.try_set(String::new());
                    let _ = email.try_set(String::new());
                    let _ = message.try_set(String::new());
                    let _ = status.try_set(FormStatus::Sent);
                }
                Err(error) => {
                    let _ = status.try_set(FormStatus::Failed(error.to_string()));
                }
            }
        });
    };

    view! {
        <section id="contact" class="py-20 bg-gray-100 dark:bg-dark-card transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center mb-12 text-gray-800 dark:text-gray-100">
                    "Contact Us"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                    {move || match entries.get() {
                        None => view! { <ContactSkeleton/> }.into_view(),
                        Some(Err(error)) => {
                            view! {
                                <div class="text-center text-red-500">{error.to_string()}</div>
                            }
                                .into_view()
                        }
                        Some(Ok(posts)) => {
                            let info = contact_info(&posts);
                            view! {
                                <div class="bg-white dark:bg-dark-bg rounded-2xl shadow-xl p-6">
                                    <h3 class="text-xl font-semibold mb-4 text-gray-800 dark:text-gray-100">
                                        "Get in Touch"
                                    </h3>
                                    <div class="space-y-4 text-gray-600 dark:text-gray-300">
                                        <a
                                            class="block hover:text-indigo-600"
                                            href=format!("mailto:{}", info.email)
                                        >
                                            {info.email.clone()}
                                        </a>
                                        <a
                                            class="block hover:text-indigo-600"
                                            href=format!("tel:{}", info.phone)
                                        >
                                            {info.phone.clone()}
                                        </a>
                                        <span class="block">{info.address.clone()}</span>
                                    </div>
                                </div>
                            }
                                .into_view()
                        }
                    }}

                    <form
                        class="bg-white dark:bg-dark-bg rounded-2xl shadow-xl p-8 space-y-6"
                        on:submit=on_submit
                    >
                        <div>
                            <label
                                for="name"
                                class="block text-sm font-semibold text-gray-700 dark:text-gray-300 mb-1"
                            >
                                "Name"
                            </label>
                            <input
                                id="name"
                                type="text"
                                placeholder="Your Name"
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-md"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label
                                for="email"
                                class="block text-sm font-semibold text-gray-700 dark:text-gray-300 mb-1"
                            >
                                "Email"
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="Your Email"
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-md"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label
                                for="message"
                                class="block text-sm font-semibold text-gray-700 dark:text-gray-300 mb-1"
                            >
                                "Message"
                            </label>
                            <textarea
                                id="message"
                                rows="4"
                                placeholder="Your Message"
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-md"
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full bg-blue-600 text-white py-3 px-6 rounded-md font-semibold hover:bg-blue-700 transition-all"
                            disabled=move || status.get() == FormStatus::Submitting
                        >
                            {move || {
                                if status.get() == FormStatus::Submitting {
                                    "Sending..."
                                } else {
                                    "Send Message"
                                }
                            }}
                        </button>
                        {move || match status.get() {
                            FormStatus::Sent => {
                                view! {
                                    <div class="text-green-600 text-center">
                                        "Message sent successfully!"
                                    </div>
                                }
                                    .into_view()
                            }
                            FormStatus::Failed(message) => {
                                view! {
                                    <div class="text-red-600 text-center">{message}</div>
                                }
                                    .into_view()
                            }
                            _ => ().into_view(),
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-dark-bg rounded-2xl shadow-xl p-8 animate-pulse space-y-6">
            <div class="h-4 bg-gray-200 rounded w-1/4"></div>
            <div class="h-10 bg-gray-200 rounded"></div>
            <div class="h-4 bg-gray-200 rounded w-1/4"></div>
            <div class="h-10 bg-gray-200 rounded"></div>
            <div class="h-4 bg-gray-200 rounded w-1/4"></div>
            <div class="h-32 bg-gray-200 rounded"></div>
        </div>
    }
}
