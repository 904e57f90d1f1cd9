// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::context::intent::provide_intent_slot;
use crate::context::section::provide_section_context;
use crate::context::theme::provide_theme_context;
use crate::pages::AboutUs::*;
use crate::pages::AllClients::*;
use crate::pages::Home::*;
use crate::pages::ServiceDetails::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme_context();
    provide_section_context();
    provide_intent_slot();

    view! {
        <Html lang="en"/>
        <Title text="Company Name"/>
        <Meta
            name="description"
            content="Company Name builds digital products: web development, design, and consulting for clients worldwide."
        />
        <Router>
            <Routes>
                <Route path="" view=Home/>
                <Route path="/clients" view=AllClients/>
                <Route path="/about" view=AboutUs/>
                <Route path="/services/:id" view=ServiceDetails/>
                <Route path="/*any" view=move || view! { <Redirect path="/"/> }/>
            </Routes>
        </Router>
    }
}
