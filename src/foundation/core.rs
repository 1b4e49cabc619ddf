pub use kurbo::Vec2;

/// Normalized position of a tracked element through its scroll window, always in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Progress(f64);

impl Progress {
    /// Progress at the start of the window.
    pub const ZERO: Self = Self(0.0);
    /// Progress at the end of the window.
    pub const ONE: Self = Self(1.0);

    /// Clamp `v` into `[0, 1]`. `NaN` collapses to `0`; infinities clamp to the nearer end.
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Self::ZERO;
        }
        Self(v.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// One frame's worth of scroll geometry for a tracked element.
///
/// All values are in CSS pixels. `target_top` is relative to the document, not the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSample {
    pub raw_offset: f64,
    pub viewport_height: f64,
    pub target_top: f64,
    pub target_height: f64,
}

/// Layout box of a mounted element, document-relative.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
