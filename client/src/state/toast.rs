//! Transient notification queue shown in the toast region.
//!
//! DESIGN
//! ======
//! Notices are plain data so any component can push one through the shared
//! `RwSignal<ToastState>` context. Dismissal timing lives in the toast
//! component; this module only tracks what is currently visible.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays on screen before it is dismissed automatically.
pub const TOAST_TTL_MS: u32 = 4_000;

/// Visual tone of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral information, e.g. a hand-off whose outcome is unknown.
    #[default]
    Info,
    /// A confirmed outcome.
    Success,
}

impl ToastKind {
    /// BEM modifier class for this kind.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
        }
    }
}

/// A message waiting to become a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: &'static str,
}

/// A toast currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Queue a prepared notice and return its id.
    pub fn push_notice(&mut self, notice: Notice) -> u64 {
        self.push(notice.kind, notice.message)
    }

    /// Remove the toast with `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}
