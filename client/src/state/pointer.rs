//! Pointer-follow highlight for project cards.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

/// Pointer position relative to a card's top-left corner, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MousePosition {
    pub x: f64,
    pub y: f64,
}

/// A card's client-space bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardBounds {
    /// A box that has been laid out and can anchor pointer math.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}

impl MousePosition {
    /// Position of a client-space pointer inside `bounds`.
    ///
    /// Returns `None` when the box is not measurable; callers keep the
    /// previous position in that case.
    #[must_use]
    pub fn relative_to(bounds: CardBounds, client_x: f64, client_y: f64) -> Option<Self> {
        if !bounds.is_measurable() || !client_x.is_finite() || !client_y.is_finite() {
            return None;
        }
        Some(Self { x: client_x - bounds.left, y: client_y - bounds.top })
    }
}

/// CSS `background` value for the highlight centered on `pos`.
#[must_use]
pub fn highlight_background(pos: MousePosition) -> String {
    format!(
        "radial-gradient(circle at {}px {}px, rgba(250, 204, 21, 0.15), transparent 50%)",
        pos.x, pos.y
    )
}
