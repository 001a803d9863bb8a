//! Toast region and the `notify` helper used to post into it.

use leptos::prelude::*;

use crate::state::toast::{Notice, TOAST_TTL_MS, ToastState};

/// Push `notice` and schedule its automatic dismissal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let Some(id) = toasts.try_update(|state| state.push_notice(notice)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || {
        toasts.try_update(|state| state.dismiss(id));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, TOAST_TTL_MS);
}

/// Fixed corner stack of active toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.kind.class());
                    let message = toast.message;
                    view! {
                        <div class=class>
                            <span class="toast__message">{message}</span>
                            <button
                                class="toast__close"
                                type="button"
                                aria-label="Dismiss notification"
                                on:click=move |_| {
                                    toasts.update(|state| {
                                        state.dismiss(id);
                                    });
                                }
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
