// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::Footer::*;
use crate::components::Header::*;
use leptos::*;

#[component]
pub fn Page(children: Children) -> impl IntoView {
    view! {
        <div class="overflow-x-hidden min-h-screen bg-gray-50 dark:bg-dark-bg transition-colors duration-300">
            <Header/>
            {children()}
            <Footer/>
        </div>
    }
}
