//! Project card with staggered entrance and a pointer-follow highlight.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::site::Project;
use crate::state::pointer::{MousePosition, highlight_background};
use crate::state::reveal::card_entrance;
use crate::util::reveal::use_reveal;

#[component]
pub fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let pointer = RwSignal::new(MousePosition::default());
    let revealed = use_reveal(card_ref, 0.0);
    let entrance = card_entrance(index);

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        if let Some(pos) = measure_pointer(card_ref, &ev) {
            pointer.set(pos);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let Project { title, description, image_url, technologies, github_link } = project;
    let link_label = format!("{title} source on GitHub");
    let alt = title.clone();

    view! {
        <div
            node_ref=card_ref
            class="project-card"
            style=move || entrance.style(revealed.get())
            on:mousemove=on_mouse_move
        >
            <div
                class="project-card__glow"
                aria-hidden="true"
                style=move || format!("background: {};", highlight_background(pointer.get()))
            ></div>
            <div class="project-card__media">
                <img class="project-card__image" src=image_url alt=alt loading="lazy"/>
                <div class="project-card__shade" aria-hidden="true"></div>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{title}</h3>
                <p class="project-card__description">{description}</p>
                <ul class="project-card__tags">
                    {technologies
                        .into_iter()
                        .map(|tech| view! { <li class="project-card__tag">{tech}</li> })
                        .collect_view()}
                </ul>
                <a
                    class="project-card__link"
                    href=github_link
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link_label
                >
                    "more info on GitHub"
                    <Icon kind=IconKind::ArrowRight size=16 class="project-card__arrow"/>
                </a>
            </div>
        </div>
    }
}

/// Pointer position inside the card, or `None` when the card is not mounted
/// or has no layout box yet.
#[cfg(feature = "hydrate")]
fn measure_pointer(card_ref: NodeRef<leptos::html::Div>, ev: &leptos::ev::MouseEvent) -> Option<MousePosition> {
    use crate::state::pointer::CardBounds;

    let card = card_ref.get_untracked()?;
    let rect = card.get_bounding_client_rect();
    let bounds = CardBounds { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() };
    MousePosition::relative_to(bounds, f64::from(ev.client_x()), f64::from(ev.client_y()))
}
