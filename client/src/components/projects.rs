//! Projects section: heading plus the card grid in catalog order.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::site;
use crate::state::reveal::HEADER_ENTRANCE;
use crate::util::reveal::use_reveal;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let header_ref = NodeRef::<leptos::html::Div>::new();
    let header_revealed = use_reveal(header_ref, 0.0);

    view! {
        <section id="projects" class="projects">
            <div class="projects__blob projects__blob--gold" aria-hidden="true"></div>
            <div class="projects__blob projects__blob--red" aria-hidden="true"></div>

            <div class="section-container projects__inner">
                <div
                    node_ref=header_ref
                    class="projects__header"
                    style=move || HEADER_ENTRANCE.style(header_revealed.get())
                >
                    <h2 class="section-title">"My " <span class="accent-gold">"Projects"</span></h2>
                    <p class="projects__lead">
                        "Here are some of my best projects, the rest of the projects are available on GitHub"
                    </p>
                </div>

                <div class="projects__grid">
                    {site::projects()
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=project.clone() index=index/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
