//! Mailto draft composition and hand-off.
//!
//! DESIGN
//! ======
//! The contact form never delivers mail itself. It builds a `mailto:` URI with
//! a pre-filled subject and body and navigates to it, leaving delivery to the
//! visitor's mail client. Values are encoded with the same reserved set as
//! JavaScript `encodeURIComponent`, and body lines are joined with a literal
//! `%0D%0A` so line breaks survive into the opened draft.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::state::contact::ContactFormState;

/// Bytes left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encoded CRLF separating body lines.
pub const LINE_BREAK: &str = "%0D%0A";

/// A composed email draft ready for navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoDraft {
    /// Unencoded subject line, kept for logging and display.
    pub subject: String,
    /// Full `mailto:` URI.
    pub uri: String,
}

/// Percent-encode `raw` the way `encodeURIComponent` does.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Encode free text, turning every line ending into an encoded CRLF.
#[must_use]
pub fn encode_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Subject line for a message sent by `name`.
#[must_use]
pub fn subject_for(name: &str) -> String {
    format!("Contact from {name}")
}

/// Build the draft addressed to `recipient` from the current form fields.
#[must_use]
pub fn compose_draft(recipient: &str, fields: &ContactFormState) -> MailtoDraft {
    let subject = subject_for(&fields.name);
    let body = format!(
        "Name:%20{name}{LINE_BREAK}Email:%20{email}{LINE_BREAK}{LINE_BREAK}Message:{LINE_BREAK}{message}",
        name = encode_text(&fields.name),
        email = encode_text(&fields.email),
        message = encode_text(&fields.message),
    );
    let uri = format!("mailto:{recipient}?subject={}&body={body}", encode_component(&subject));
    MailtoDraft { subject, uri }
}

/// Navigate the current window to the draft URI.
///
/// Returns `false` when there is no window or the navigation was refused.
/// A `true` result only means the browser accepted the navigation; whether a
/// mail client actually opened is not observable from the page.
pub fn open_draft(draft: &MailtoDraft) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.location().set_href(&draft.uri).is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        false
    }
}
