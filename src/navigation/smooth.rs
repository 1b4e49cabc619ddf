use crate::{
    animation::{
        ease::Ease,
        tween::{Tween, TweenSpec},
    },
    navigation::route::ScrollDirective,
    scroll::hub::ScrollHub,
};

/// Animated programmatic scrolling (section links, scroll-to-top after navigation).
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    spec: TweenSpec,
    reduced_motion: bool,
    tween: Option<Tween>,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(TweenSpec::new(0.6, Ease::InOutCubic))
    }
}

impl SmoothScroll {
    pub fn new(spec: TweenSpec) -> Self {
        Self {
            spec,
            reduced_motion: false,
            tween: None,
        }
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Where the running animation will land, if any.
    pub fn destination(&self) -> Option<f64> {
        self.tween.as_ref().map(Tween::target)
    }

    pub fn scroll_to_offset(&mut self, hub: &ScrollHub, offset: f64) {
        let to = offset.clamp(0.0, hub.max_offset());
        let from = hub.viewport().offset;
        if self.reduced_motion || self.spec.duration_secs <= 0.0 || (to - from).abs() < 0.5 {
            self.tween = None;
            hub.scroll_to(to);
            return;
        }
        self.tween = Some(Tween::new(from, to, self.spec));
    }

    /// Scroll so the element `id` sits at the top of the viewport.
    /// Returns `false` (and does nothing) when no such element is mounted.
    pub fn scroll_to_section(&mut self, hub: &ScrollHub, id: &str) -> bool {
        let Some(el) = hub.element(id) else {
            tracing::warn!(section = id, "scroll target not found");
            return false;
        };
        self.scroll_to_offset(hub, el.top);
        true
    }

    pub fn apply(&mut self, hub: &ScrollHub, directive: &ScrollDirective) -> bool {
        match directive {
            ScrollDirective::Top => {
                self.scroll_to_offset(hub, 0.0);
                true
            }
            ScrollDirective::Section(id) => self.scroll_to_section(hub, id),
        }
    }

    /// Stop wherever the page currently is (e.g. the user grabbed the scrollbar).
    pub fn cancel(&mut self) {
        self.tween = None;
    }

    /// Advance by `dt` seconds, writing the new position to `hub`.
    /// Returns `true` while still animating.
    pub fn tick(&mut self, hub: &ScrollHub, dt: f64) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        let offset = tween.advance(dt);
        hub.scroll_to(offset);
        if tween.is_finished() {
            self.tween = None;
            return false;
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/smooth.rs"]
mod tests;
