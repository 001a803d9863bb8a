//! Contact form fields and submission lifecycle.
//!
//! DESIGN
//! ======
//! Submission is a two-step hand-off: `begin_submit` composes the mailto
//! draft and locks the submit control, and `finish_submit` runs after a fixed
//! pause to clear the fields and unlock it. The page cannot learn whether the
//! visitor's mail client opened or whether the mail was sent, so the
//! resulting notice says a draft was opened and never claims delivery.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::state::toast::{Notice, ToastKind};
use crate::util::mailto::{MailtoDraft, compose_draft};

/// Pause between opening the draft and resetting the form.
pub const RESET_DELAY_MS: u32 = 1_000;

/// Shown once the draft has been handed to the mail client.
pub const DRAFT_OPENED_NOTICE: Notice = Notice {
    kind: ToastKind::Info,
    message: "Email draft opened. Send it from your mail app to deliver your message.",
};

/// One of the three form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Human-readable label, also used for the screen-reader `<label>`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// Controlled values of the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormState {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// First empty field, mirroring the inputs' `required` attribute.
    #[must_use]
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL.into_iter().find(|field| self.get(*field).is_empty())
    }
}

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Draft handed off; waiting out the reset delay.
    Opening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("an email draft is already being opened")]
    AlreadyOpening,
    #[error("{} is required", .0.label())]
    MissingField(ContactField),
}

/// Form fields plus submit phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFormState,
    pub phase: SubmitPhase,
}

impl ContactForm {
    /// Apply an input change to exactly one field.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Opening
    }

    /// Compose the draft for `recipient` and lock the submit control.
    ///
    /// # Errors
    ///
    /// Rejects a second submit while a draft is still opening, and a submit
    /// with any empty field.
    pub fn begin_submit(&mut self, recipient: &str) -> Result<MailtoDraft, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::AlreadyOpening);
        }
        if let Some(field) = self.fields.first_missing() {
            return Err(SubmitError::MissingField(field));
        }
        let draft = compose_draft(recipient, &self.fields);
        self.phase = SubmitPhase::Opening;
        Ok(draft)
    }

    /// Clear every field and unlock the submit control.
    ///
    /// Returns the notice to show when a draft was actually in flight.
    pub fn finish_submit(&mut self) -> Option<Notice> {
        let was_opening = self.is_submitting();
        self.fields = ContactFormState::default();
        self.phase = SubmitPhase::Idle;
        was_opening.then_some(DRAFT_OPENED_NOTICE)
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => "Send Message",
            SubmitPhase::Opening => "Opening email draft...",
        }
    }
}
