//! Inline stroke icons used by the contact and project sections.

use leptos::prelude::*;

use crate::site::ContactIcon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Phone,
    MapPin,
    Mail,
    ArrowRight,
}

impl From<ContactIcon> for IconKind {
    fn from(icon: ContactIcon) -> Self {
        match icon {
            ContactIcon::Phone => Self::Phone,
            ContactIcon::Location => Self::MapPin,
            ContactIcon::Email => Self::Mail,
        }
    }
}

/// Decorative 24x24 stroke icon; hidden from assistive technology.
#[component]
pub fn Icon(kind: IconKind, #[prop(default = 20)] size: u32, #[prop(optional)] class: &'static str) -> impl IntoView {
    let shape = match kind {
        IconKind::Phone => view! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"></path>
        }
        .into_any(),
        IconKind::MapPin => view! {
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"></path>
            <circle cx="12" cy="10" r="3"></circle>
        }
        .into_any(),
        IconKind::Mail => view! {
            <rect x="2" y="4" width="20" height="16" rx="2"></rect>
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"></path>
        }
        .into_any(),
        IconKind::ArrowRight => view! {
            <path d="M5 12h14"></path>
            <path d="m12 5 7 7-7 7"></path>
        }
        .into_any(),
    };

    let size = size.to_string();

    view! {
        <svg
            class=format!("icon {class}")
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {shape}
        </svg>
    }
}
