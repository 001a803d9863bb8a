//! Single-page portfolio: project showcase followed by the contact section.

use leptos::prelude::*;
use leptos_meta::Meta;

use crate::components::contact::ContactSection;
use crate::components::projects::ProjectsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Meta name="description" content="Projects and contact details for Ravikumar Jalapati."/>
        <main class="portfolio">
            <ProjectsSection/>
            <ContactSection/>
        </main>
    }
}
