// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;

use crate::context::section::Section;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 px-6 bg-white dark:bg-dark-bg border-t border-gray-200 dark:border-gray-800 transition-colors duration-300">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-center gap-6">
                <span class="text-xl font-bold text-gray-800 dark:text-gray-100">"Company Name"</span>
                <nav>
                    <ul class="flex flex-wrap justify-center gap-x-8 gap-y-2 text-gray-600 dark:text-gray-300">
                        {Section::ALL
                            .iter()
                            .copied()
                            .map(|section| {
                                view! {
                                    <li>
                                        <a
                                            href=format!("/#{}", section.dom_id())
                                            class="hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                                        >
                                            {section.label()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <span class="text-sm text-gray-500 dark:text-gray-400">
                    "© 2026 Company Name. All rights reserved."
                </span>
            </div>
        </footer>
    }
}
