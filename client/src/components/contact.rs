//! Contact section: owner details beside a mailto-backed form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting composes a mail draft and navigates to its `mailto:` URI. After
//! `RESET_DELAY_MS` the form clears, the submit button unlocks, and a
//! "draft opened" toast is posted. The pending reset is cancelled if the
//! section unmounts before it fires.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::toast::notify;
use crate::site::{CONTACT_DETAILS, CONTACT_EMAIL};
use crate::state::contact::{ContactField, ContactForm};
#[cfg(feature = "hydrate")]
use crate::state::contact::RESET_DELAY_MS;
use crate::state::reveal::CONTACT_REVEAL_THRESHOLD;
use crate::state::toast::ToastState;
use crate::util::mailto;
use crate::util::reveal::use_reveal;

const INPUT_CLASS: &str = "contact-form__input";

#[component]
pub fn ContactSection() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(ContactForm::default());
    let section_ref = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(section_ref, CONTACT_REVEAL_THRESHOLD);

    #[cfg(feature = "hydrate")]
    let pending_reset = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        pending_reset.try_update_value(|timeout| {
            timeout.take();
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match form.try_update(|f| f.begin_submit(CONTACT_EMAIL)) {
            Some(Ok(draft)) => draft,
            Some(Err(_err)) => {
                #[cfg(feature = "hydrate")]
                log::debug!("contact submit ignored: {_err}");
                return;
            }
            None => return,
        };

        if !mailto::open_draft(&draft) {
            #[cfg(feature = "hydrate")]
            log::warn!("browser refused mailto navigation for {:?}", draft.subject);
        }

        #[cfg(feature = "hydrate")]
        {
            log::info!("mail draft handed off: {:?}", draft.subject);
            let timeout = gloo_timers::callback::Timeout::new(RESET_DELAY_MS, move || {
                if let Some(Some(notice)) = form.try_update(ContactForm::finish_submit) {
                    notify(toasts, notice);
                }
            });
            pending_reset.set_value(Some(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            // No timers outside the browser: finish immediately.
            if let Some(Some(notice)) = form.try_update(ContactForm::finish_submit) {
                notify(toasts, notice);
            }
        }
    };

    let field_value = move |field: ContactField| form.with(|f| f.fields.get(field).to_owned());
    let on_field_input = move |field: ContactField| {
        move |ev: leptos::ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)))
    };

    view! {
        <section id="contact" class="contact">
            <div
                node_ref=section_ref
                class="contact__reveal"
                class:animate-fade-in=move || revealed.get()
            >
                <div class="section-container contact__grid">
                    <div class="contact__info">
                        <h2 class="section-title">
                            "Contact " <span class="accent-red">"Me"</span>
                        </h2>
                        <p class="contact__lead">
                            "If you have any questions or would like to collaborate, please don't hesitate to contact me"
                        </p>
                        <ul class="contact__details">
                            {CONTACT_DETAILS
                                .iter()
                                .map(|detail| {
                                    view! {
                                        <li class="contact-detail">
                                            <span class="contact-detail__icon">
                                                <Icon kind=IconKind::from(detail.icon)/>
                                            </span>
                                            <div>
                                                <h3 class="contact-detail__label">{detail.label}</h3>
                                                <p class="contact-detail__value">{detail.value}</p>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <form class="contact-form" on:submit=on_submit aria-busy=move || form.with(ContactForm::is_submitting).to_string()>
                        <div class="contact-form__row">
                            <label for="name" class="sr-only">{ContactField::Name.label()}</label>
                            <input
                                class=INPUT_CLASS
                                type="text"
                                id="name"
                                name="name"
                                required=true
                                placeholder="Enter your full name here"
                                prop:value=move || field_value(ContactField::Name)
                                on:input=on_field_input(ContactField::Name)
                            />
                        </div>
                        <div class="contact-form__row">
                            <label for="email" class="sr-only">{ContactField::Email.label()}</label>
                            <input
                                class=INPUT_CLASS
                                type="email"
                                id="email"
                                name="email"
                                required=true
                                placeholder="Enter your email address here"
                                prop:value=move || field_value(ContactField::Email)
                                on:input=on_field_input(ContactField::Email)
                            />
                        </div>
                        <div class="contact-form__row">
                            <label for="message" class="sr-only">{ContactField::Message.label()}</label>
                            <textarea
                                class=format!("{INPUT_CLASS} contact-form__input--message")
                                id="message"
                                name="message"
                                required=true
                                rows="5"
                                placeholder="Enter your message here"
                                prop:value=move || field_value(ContactField::Message)
                                on:input=on_field_input(ContactField::Message)
                            ></textarea>
                        </div>
                        <button
                            class="contact-form__submit"
                            type="submit"
                            disabled=move || form.with(ContactForm::is_submitting)
                        >
                            {move || form.with(ContactForm::submit_label)}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
